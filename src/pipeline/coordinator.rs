//! Output file bookkeeping.

use std::path::{Path, PathBuf};

use super::PipelineSettings;
use crate::wav::WavWriter;

/// Result of checking whether an output file should be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteCheck {
    /// File should be written.
    Write,
    /// Skip - file already exists.
    SkipExists,
}

/// Check whether `path` should be written under the overwrite policy.
pub fn should_write(path: &Path, force: bool) -> WriteCheck {
    if !force && path.exists() {
        WriteCheck::SkipExists
    } else {
        WriteCheck::Write
    }
}

/// Stems of every output the reference table implies, regions first.
pub fn expected_stems(settings: &PipelineSettings) -> Vec<String> {
    (0..settings.expected_region_count())
        .map(|index| settings.region_stem(index))
        .chain(std::iter::once(settings.secondary_name.clone()))
        .collect()
}

/// Paths of every output the reference table implies, regions first.
pub fn expected_outputs(settings: &PipelineSettings, writer: &WavWriter) -> Vec<PathBuf> {
    expected_stems(settings)
        .iter()
        .map(|stem| writer.path_for(stem))
        .collect()
}

/// True when the reference table defines the outputs and all of them exist.
///
/// An empty reference gives no way to know the full set, so this is false.
pub fn all_outputs_present(settings: &PipelineSettings, writer: &WavWriter) -> bool {
    settings.expected_region_count() > 0
        && expected_outputs(settings, writer)
            .iter()
            .all(|path| path.exists())
}
