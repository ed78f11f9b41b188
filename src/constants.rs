//! Application-wide constants.
//!
//! Built-in defaults for the Elements `resources.cc` layout. Every value
//! here can be overridden through the configuration file or CLI flags.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "sampledump";

/// Default source document, relative to the working directory.
pub const DEFAULT_SOURCE_PATH: &str = "external/mutable-instruments/elements/resources.cc";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "samples/elements";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Output audio format defaults.
pub mod audio {
    /// disting NT native rate.
    pub const SAMPLE_RATE: u32 = 48_000;

    /// Mono.
    pub const CHANNELS: u16 = 1;

    /// Signed 16-bit integer samples.
    pub const BITS_PER_SAMPLE: u16 = 16;
}

/// Declared array names in the source document.
pub mod arrays {
    /// Boundary table (`size_t`).
    pub const OFFSETS: &str = "smp_boundaries";

    /// Concatenated wavetable samples (`int16_t`).
    pub const PRIMARY: &str = "smp_sample_data";

    /// Noise sample (`int16_t`).
    pub const SECONDARY: &str = "smp_noise_sample";
}

/// Output file naming.
pub mod naming {
    /// Prefix for region files (`wavetable_00.wav`, ...).
    pub const REGION_PREFIX: &str = "wavetable";

    /// File stem for the secondary array.
    pub const SECONDARY_NAME: &str = "noise";

    /// Output file extension.
    pub const EXTENSION: &str = "wav";
}

/// Wavetable region start offsets in the upstream Elements `resources.cc`.
pub const EXPECTED_BOUNDARIES: [usize; 10] = [
    0, 17099, 20852, 30369, 63050, 85807, 95952, 106297, 117606, 128013,
];
