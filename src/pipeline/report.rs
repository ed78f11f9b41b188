//! Run reports.

use std::path::PathBuf;

use serde::Serialize;

/// What happened (or would happen) to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// File was written.
    Written,
    /// File existed and was left untouched.
    Skipped,
    /// Dry run: file would be written.
    WouldWrite,
    /// Dry run: file exists and would be left untouched.
    WouldSkip,
}

/// One output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactEntry {
    /// File stem, e.g. `wavetable_00`.
    pub name: String,
    /// Full output path.
    pub path: PathBuf,
    /// Sample count, unknown when the source was never parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Outcome.
    pub status: ArtifactStatus,
}

/// Result of a run or dry run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// All outputs were present, so the source was not read.
    pub short_circuited: bool,
    /// Parsed boundaries differ from the reference table.
    pub boundary_mismatch: bool,
    /// Parsed boundaries (empty when short-circuited).
    pub boundaries: Vec<usize>,
    /// Every output file, regions first.
    pub artifacts: Vec<ArtifactEntry>,
}

impl ExtractionReport {
    /// Number of files written in this run.
    pub fn written(&self) -> usize {
        self.count(ArtifactStatus::Written)
    }

    /// Number of files skipped because they already existed.
    pub fn skipped(&self) -> usize {
        self.count(ArtifactStatus::Skipped)
    }

    fn count(&self, status: ArtifactStatus) -> usize {
        self.artifacts.iter().filter(|a| a.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: ArtifactStatus) -> ArtifactEntry {
        ArtifactEntry {
            name: "noise".to_string(),
            path: PathBuf::from("noise.wav"),
            samples: Some(2),
            status,
        }
    }

    #[test]
    fn test_counts() {
        let report = ExtractionReport {
            output_dir: PathBuf::from("."),
            short_circuited: false,
            boundary_mismatch: false,
            boundaries: vec![0, 2],
            artifacts: vec![
                entry(ArtifactStatus::Written),
                entry(ArtifactStatus::Skipped),
                entry(ArtifactStatus::Written),
            ],
        };
        assert_eq!(report.written(), 2);
        assert_eq!(report.skipped(), 1);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ArtifactStatus::WouldSkip).unwrap_or_default();
        assert_eq!(json, "\"would_skip\"");
    }
}
