//! Error types for sampledump.

use std::path::PathBuf;

/// Result type alias for sampledump operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for sampledump.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Source document does not exist.
    #[error("source file not found: {path}")]
    SourceNotFound {
        /// Configured source path.
        path: PathBuf,
    },

    /// Source document exists but could not be read.
    #[error("failed to read source file '{path}'")]
    SourceRead {
        /// Path to the source file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No declaration with the requested name was found.
    #[error("array '{name}' not found in source file")]
    ArrayNotFound {
        /// Declared array name.
        name: String,
    },

    /// The array body has no matching closing brace.
    #[error("array '{name}' has no closing brace")]
    UnterminatedArray {
        /// Declared array name.
        name: String,
    },

    /// An integer literal does not fit the declared element type.
    #[error("array '{name}' element {index}: literal '{literal}' does not fit the element type")]
    ValueOutOfRange {
        /// Declared array name.
        name: String,
        /// Position of the element within the array.
        index: usize,
        /// Literal text as it appears in the source.
        literal: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write WAV file.
    #[error("failed to write WAV file '{path}'")]
    WavWriteFailed {
        /// Path to the WAV file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to read WAV file.
    #[error("failed to read WAV file '{path}'")]
    WavReadFailed {
        /// Path to the WAV file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Output verification found missing or malformed files.
    #[error("{problems} output file(s) failed verification")]
    VerificationFailed {
        /// Number of problem files.
        problems: usize,
    },
}
