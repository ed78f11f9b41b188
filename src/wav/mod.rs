//! PCM WAV reading and writing.

mod reader;
mod writer;

pub use reader::read_wav;
pub use writer::{WavWriter, write_wav};

use serde::{Deserialize, Serialize};

use crate::constants::audio;

/// Sample layout of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcmFormat {
    /// Frames per second.
    pub sample_rate: u32,
    /// Interleaved channel count.
    pub channels: u16,
    /// Bits per sample. Only 16 is supported.
    pub bits_per_sample: u16,
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self {
            sample_rate: audio::SAMPLE_RATE,
            channels: audio::CHANNELS,
            bits_per_sample: audio::BITS_PER_SAMPLE,
        }
    }
}

impl PcmFormat {
    fn to_spec(self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        }
    }
}

impl From<hound::WavSpec> for PcmFormat {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}
