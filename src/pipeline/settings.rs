//! Resolved settings for one extraction run.

use std::path::PathBuf;

use crate::config::{ArraysConfig, Config};
use crate::wav::PcmFormat;

/// Everything an extraction run needs, resolved from config and CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Source document path.
    pub source: PathBuf,
    /// Directory receiving the WAV files.
    pub output_dir: PathBuf,
    /// Overwrite existing files.
    pub force: bool,
    /// Declared array names.
    pub arrays: ArraysConfig,
    /// Region file prefix.
    pub region_prefix: String,
    /// File stem for the secondary array.
    pub secondary_name: String,
    /// Output format.
    pub format: PcmFormat,
    /// Known-good boundary table. Empty disables the comparison and the
    /// all-outputs-present short-circuit.
    pub expected_boundaries: Vec<usize>,
}

impl PipelineSettings {
    /// Build settings from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: config.source.path.clone(),
            output_dir: config.output.dir.clone(),
            force: false,
            arrays: config.arrays.clone(),
            region_prefix: config.output.region_prefix.clone(),
            secondary_name: config.output.secondary_name.clone(),
            format: config.output.pcm_format(),
            expected_boundaries: config.reference.boundaries.clone(),
        }
    }

    /// Override the source path.
    #[must_use]
    pub fn with_source(mut self, source: PathBuf) -> Self {
        self.source = source;
        self
    }

    /// Override the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Set the overwrite flag.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Replace the reference boundary table.
    #[must_use]
    pub fn with_expected_boundaries(mut self, boundaries: Vec<usize>) -> Self {
        self.expected_boundaries = boundaries;
        self
    }

    /// File stem of region `index`, e.g. `wavetable_03`.
    pub fn region_stem(&self, index: usize) -> String {
        format!("{}_{index:02}", self.region_prefix)
    }

    /// Number of region files implied by the reference table.
    pub fn expected_region_count(&self) -> usize {
        self.expected_boundaries.len().saturating_sub(1)
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
