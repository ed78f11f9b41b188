//! Sampledump - extract embedded sample arrays from C sources into WAV files.
//!
//! Parses `const size_t` / `const int16_t` array initializers out of a
//! source file such as the Elements `resources.cc`, slices the wavetable
//! data by its boundary table and writes each region plus the noise sample
//! as a mono 16-bit PCM WAV file.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod slicer;
pub mod wav;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, ExtractArgs};
use config::{Config, config_file_path, load_config, save_config};
use output::json_envelope::ResultType;
use output::{emit_json_result, progress};
use pipeline::{ArtifactStatus, Pipeline, PipelineSettings, ProgressEvent, verify_outputs};
use std::cell::RefCell;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the sampledump CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.extract.verbose, cli.extract.quiet);

    if let Some(Command::Config { action }) = cli.command {
        return handle_config_command(action, &cli.extract);
    }

    // Load configuration
    let config = load_config(cli.extract.config.as_deref())?;
    let settings = resolve_settings(&cli.extract, &config);

    match cli.command {
        Some(Command::Verify) => verify(&settings, cli.extract.json),
        _ if cli.extract.dry_run => plan(&settings, cli.extract.json),
        _ => extract(&settings, &cli.extract),
    }
}

/// Combine configuration with CLI overrides.
///
/// Priority: CLI flag or environment variable > config file > built-in default.
pub fn resolve_settings(args: &ExtractArgs, config: &Config) -> PipelineSettings {
    let mut settings = PipelineSettings::from_config(config).with_force(args.force);

    if let Some(source) = &args.source {
        settings = settings.with_source(source.clone());
    }
    if let Some(output) = &args.output {
        settings = settings.with_output_dir(output.clone());
    }
    if let Some(reference) = &args.reference {
        settings = settings.with_expected_boundaries(reference.clone());
    }
    if args.no_reference {
        settings = settings.with_expected_boundaries(Vec::new());
    }

    settings
}

/// Run the extraction and report the outcome.
fn extract(settings: &PipelineSettings, args: &ExtractArgs) -> Result<()> {
    info!("Source: {}", settings.source.display());
    info!("Output: {}", settings.output_dir.display());
    info!("Force:  {}", settings.force);

    let progress_enabled = !args.quiet && !args.no_progress && !args.json;
    let file_progress = RefCell::new(None);

    let pipeline = Pipeline::new(settings.clone());
    let result = pipeline.run_with_progress(|event| match event {
        ProgressEvent::Start { total } => {
            *file_progress.borrow_mut() = progress::create_file_progress(total, progress_enabled);
        }
        ProgressEvent::Artifact(entry) => {
            progress::inc_progress(file_progress.borrow().as_ref(), &entry.name);
        }
        ProgressEvent::Finish => {
            progress::finish_progress(file_progress.borrow_mut().take(), "Complete");
        }
    });

    // Clear a bar left behind by a failed write
    if let Some(pb) = file_progress.borrow_mut().take() {
        pb.abandon();
    }

    let report = result?;

    if report.boundary_mismatch {
        warn!("Boundary table differs from the reference; check the extracted regions");
    }

    info!(
        "Extraction complete: {} files ({} written, {} skipped)",
        report.artifacts.len(),
        report.written(),
        report.skipped()
    );

    if args.json {
        emit_json_result(ResultType::Extraction, &report);
    }

    Ok(())
}

/// Print what a run would do without writing.
#[allow(clippy::print_stdout)]
fn plan(settings: &PipelineSettings, json: bool) -> Result<()> {
    let report = Pipeline::new(settings.clone()).plan()?;

    if json {
        emit_json_result(ResultType::Plan, &report);
        return Ok(());
    }

    println!("Dry run: {} file(s):", report.artifacts.len());
    for artifact in &report.artifacts {
        let action = match artifact.status {
            ArtifactStatus::WouldSkip => "skip",
            _ => "write",
        };
        println!(
            "  {action:<5} {} ({} samples)",
            artifact.path.display(),
            artifact.samples.unwrap_or_default()
        );
    }

    Ok(())
}

/// Verify the output directory; fails if any file has a problem.
fn verify(settings: &PipelineSettings, json: bool) -> Result<()> {
    let report = verify_outputs(settings);

    if json {
        emit_json_result(ResultType::Verification, &report);
    }

    if report.is_ok() {
        info!(
            "All {} sample files verified in {}",
            report.entries.len(),
            settings.output_dir.display()
        );
        Ok(())
    } else {
        Err(Error::VerificationFailed {
            problems: report.problems(),
        })
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout is reserved for results (--json, --dry-run)
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, args: &ExtractArgs) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => config_file_path()?,
    };

    match action {
        ConfigAction::Init => {
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(args.config.as_deref())?;
            if args.json {
                emit_json_result(ResultType::Config, &config);
            } else {
                let contents = toml::to_string_pretty(&config)
                    .map_err(|e| Error::ConfigSerialize { source: e })?;
                println!("{contents}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}
