//! Integration tests for the sampledump binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SOURCE: &str = "\
// generated resources
const size_t smp_boundaries[] = { 0, 2, 5 };
const int16_t smp_sample_data[] = { 1, 2, 3, 4, 5 };
const int16_t smp_noise_sample[] = { 9, 9 };
";

/// Command isolated from the user's config and environment.
fn sampledump(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sampledump");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("SAMPLEDUMP_SOURCE")
        .env_remove("SAMPLEDUMP_OUTPUT")
        .env_remove("SAMPLEDUMP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn setup() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("resources.cc");
    fs::write(&source, SOURCE).unwrap();
    let output = temp_dir.path().join("out");
    (temp_dir, source, output)
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();

    sampledump(temp_dir.path())
        .arg("--source")
        .arg(temp_dir.path().join("absent.cc"))
        .arg("--output")
        .arg(temp_dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("source file not found"));

    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_extract_writes_files() {
    let (temp_dir, source, output) = setup();

    sampledump(temp_dir.path())
        .arg("--force")
        .arg("--no-progress")
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Extraction complete: 3 files"));

    for name in ["wavetable_00.wav", "wavetable_01.wav", "noise.wav"] {
        assert!(output.join(name).exists(), "{name} missing");
    }
}

#[test]
fn test_second_run_reports_existing_files() {
    let (temp_dir, source, output) = setup();
    let run = || {
        sampledump(temp_dir.path())
            .args(["--no-progress", "--reference", "0,2,5", "--source"])
            .arg(&source)
            .arg("--output")
            .arg(&output)
            .assert()
            .success()
    };

    run();
    let before = fs::read(output.join("noise.wav")).unwrap();

    run().stderr(predicate::str::contains("already exist"));
    assert_eq!(fs::read(output.join("noise.wav")).unwrap(), before);
}

#[test]
fn test_json_report() {
    let (temp_dir, source, output) = setup();

    let assert = sampledump(temp_dir.path())
        .args(["--force", "--json", "--source"])
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(json["event"], "result");
    assert_eq!(json["payload"]["result_type"], "extraction");
    assert_eq!(json["payload"]["boundary_mismatch"], true);
    let artifacts = json["payload"]["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 3);
    assert_eq!(artifacts[1]["name"], "wavetable_01");
    assert_eq!(artifacts[1]["samples"], 3);
    assert_eq!(artifacts[1]["status"], "written");
}

#[test]
fn test_dry_run_writes_nothing() {
    let (temp_dir, source, output) = setup();

    sampledump(temp_dir.path())
        .arg("--dry-run")
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 3 file(s)"))
        .stdout(predicate::str::contains("wavetable_01.wav (3 samples)"));

    assert!(!output.exists());
}

#[test]
fn test_verify_before_and_after_extract() {
    let (temp_dir, source, output) = setup();

    sampledump(temp_dir.path())
        .args(["verify", "--reference", "0,2,5", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed verification"));

    sampledump(temp_dir.path())
        .args(["--no-progress", "--reference", "0,2,5", "--source"])
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    sampledump(temp_dir.path())
        .args(["verify", "--reference", "0,2,5", "--output"])
        .arg(&output)
        .assert()
        .success();
}

#[test]
fn test_explicit_config_file() {
    let (temp_dir, source, output) = setup();
    let config_path = temp_dir.path().join("sampledump.toml");
    fs::write(
        &config_path,
        format!(
            "[source]\npath = {:?}\n\n[output]\ndir = {:?}\nregion_prefix = \"wave\"\n",
            source.display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    sampledump(temp_dir.path())
        .args(["--no-progress", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    assert!(output.join("wave_00.wav").exists());
    assert!(output.join("wave_01.wav").exists());
}

#[test]
fn test_invalid_config_is_rejected() {
    let (temp_dir, source, _) = setup();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[output]\nsample_rate = 0\n").unwrap();

    sampledump(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("--source")
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration validation failed"));
}

#[test]
fn test_stereo_config_writes_nothing() {
    let (temp_dir, source, output) = setup();
    let config_path = temp_dir.path().join("stereo.toml");
    fs::write(&config_path, "[output]\nchannels = 2\n").unwrap();

    sampledump(temp_dir.path())
        .args(["--force", "--config"])
        .arg(&config_path)
        .arg("--source")
        .arg(&source)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("channels must be 1"));

    assert!(!output.exists());
}

#[test]
fn test_config_path_and_init() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom").join("config.toml");

    sampledump(temp_dir.path())
        .args(["config", "path", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    sampledump(temp_dir.path())
        .args(["config", "init", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("smp_sample_data"));
}
