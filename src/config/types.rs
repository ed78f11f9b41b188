//! Configuration type definitions.

use crate::constants::{
    DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_PATH, EXPECTED_BOUNDARIES, arrays, audio, naming,
};
use crate::wav::PcmFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Source document settings.
    pub source: SourceConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// Declared array names.
    pub arrays: ArraysConfig,

    /// Reference boundary table.
    pub reference: ReferenceConfig,
}

/// Source document settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Path to the C/C++ source containing the arrays.
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE_PATH),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the WAV files.
    pub dir: PathBuf,

    /// Region file prefix (`<prefix>_00.wav`).
    pub region_prefix: String,

    /// File stem for the secondary array.
    pub secondary_name: String,

    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Output channel count.
    pub channels: u16,

    /// Output bit depth.
    pub bits_per_sample: u16,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            region_prefix: naming::REGION_PREFIX.to_string(),
            secondary_name: naming::SECONDARY_NAME.to_string(),
            sample_rate: audio::SAMPLE_RATE,
            channels: audio::CHANNELS,
            bits_per_sample: audio::BITS_PER_SAMPLE,
        }
    }
}

impl OutputConfig {
    /// PCM layout described by this section.
    pub fn pcm_format(&self) -> PcmFormat {
        PcmFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

/// Names of the arrays to extract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArraysConfig {
    /// `size_t` boundary table.
    pub offsets: String,

    /// `int16_t` array split into regions.
    pub primary: String,

    /// `int16_t` array written whole.
    pub secondary: String,
}

impl Default for ArraysConfig {
    fn default() -> Self {
        Self {
            offsets: arrays::OFFSETS.to_string(),
            primary: arrays::PRIMARY.to_string(),
            secondary: arrays::SECONDARY.to_string(),
        }
    }
}

/// Known-good boundary table used as a sanity check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Expected boundaries. Empty disables the comparison.
    pub boundaries: Vec<usize>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            boundaries: EXPECTED_BOUNDARIES.to_vec(),
        }
    }
}
