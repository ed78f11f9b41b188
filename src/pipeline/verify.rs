//! Output directory verification.
//!
//! Checks that every expected file is present and is a WAV file in the
//! configured format before the set is copied to the device.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, warn};

use super::PipelineSettings;
use super::coordinator::expected_stems;
use crate::wav::{PcmFormat, WavWriter, read_wav};

/// Why an output file failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerifyProblem {
    /// File does not exist.
    Missing,
    /// File could not be read as WAV.
    Unreadable {
        /// Reader error message.
        reason: String,
    },
    /// File has a different sample layout.
    FormatMismatch {
        /// Format found in the file.
        found: PcmFormat,
    },
    /// Region length differs from the reference table.
    LengthMismatch {
        /// Length implied by the reference boundaries.
        expected: usize,
        /// Length found in the file.
        found: usize,
    },
}

impl fmt::Display for VerifyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Unreadable { reason } => write!(f, "unreadable: {reason}"),
            Self::FormatMismatch { found } => write!(
                f,
                "format {} Hz / {} ch / {} bit",
                found.sample_rate, found.channels, found.bits_per_sample
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "{found} samples, expected {expected}")
            }
        }
    }
}

/// Verification result for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyEntry {
    /// File stem.
    pub name: String,
    /// Full path.
    pub path: PathBuf,
    /// Sample count when the file could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Problem found, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<VerifyProblem>,
}

/// Verification result for the whole output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// One entry per expected file.
    pub entries: Vec<VerifyEntry>,
}

impl VerifyReport {
    /// Number of files with a problem.
    pub fn problems(&self) -> usize {
        self.entries.iter().filter(|e| e.problem.is_some()).count()
    }

    /// True when every expected file passed.
    pub fn is_ok(&self) -> bool {
        self.problems() == 0
    }
}

/// Verify the files a run with `settings` produces.
///
/// The expected set comes from the reference table. With an empty table,
/// consecutive region files starting at index 0 are checked until the first
/// gap.
pub fn verify_outputs(settings: &PipelineSettings) -> VerifyReport {
    let writer = WavWriter::new(settings.output_dir.clone(), settings.format);

    let stems = if settings.expected_region_count() > 0 {
        expected_stems(settings)
    } else {
        discovered_stems(settings, &writer)
    };

    let entries: Vec<VerifyEntry> = stems
        .into_iter()
        .enumerate()
        .map(|(index, stem)| {
            let expected_len = expected_region_len(settings, index, &stem);
            verify_file(&writer, stem, settings.format, expected_len)
        })
        .collect();

    for entry in &entries {
        match &entry.problem {
            Some(problem) => warn!("{}: {problem}", entry.name),
            None => info!("{}: ok", entry.name),
        }
    }

    VerifyReport {
        output_dir: settings.output_dir.clone(),
        entries,
    }
}

fn discovered_stems(settings: &PipelineSettings, writer: &WavWriter) -> Vec<String> {
    (0..)
        .map(|index| settings.region_stem(index))
        .take_while(|stem| writer.path_for(stem).exists())
        .chain(std::iter::once(settings.secondary_name.clone()))
        .collect()
}

fn expected_region_len(settings: &PipelineSettings, index: usize, stem: &str) -> Option<usize> {
    if stem == settings.secondary_name {
        return None;
    }
    let bounds = &settings.expected_boundaries;
    let (start, end) = (*bounds.get(index)?, *bounds.get(index + 1)?);
    Some(end.saturating_sub(start))
}

fn verify_file(
    writer: &WavWriter,
    name: String,
    format: PcmFormat,
    expected_len: Option<usize>,
) -> VerifyEntry {
    let path = writer.path_for(&name);

    if !path.exists() {
        return VerifyEntry {
            name,
            path,
            samples: None,
            problem: Some(VerifyProblem::Missing),
        };
    }

    let (samples, problem) = match read_wav(&path) {
        Err(e) => (
            None,
            Some(VerifyProblem::Unreadable {
                reason: std::error::Error::source(&e)
                    .map_or_else(|| e.to_string(), ToString::to_string),
            }),
        ),
        Ok((found, _)) if found != format => (None, Some(VerifyProblem::FormatMismatch { found })),
        Ok((_, data)) => {
            let found = data.len();
            let problem = expected_len
                .filter(|&expected| expected != found)
                .map(|expected| VerifyProblem::LengthMismatch { expected, found });
            (Some(found), problem)
        }
    };

    VerifyEntry {
        name,
        path,
        samples,
        problem,
    }
}
