//! Configuration validation.

use crate::config::Config;
use crate::constants::audio;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_output(config)?;
    validate_arrays(config)?;
    Ok(())
}

/// Validate output format and file naming.
fn validate_output(config: &Config) -> Result<()> {
    let output = &config.output;

    if output.sample_rate == 0 {
        return Err(Error::ConfigValidation {
            message: "sample_rate must be greater than 0".to_string(),
        });
    }

    // Source arrays are a single stream of samples
    if output.channels != audio::CHANNELS {
        return Err(Error::ConfigValidation {
            message: format!(
                "channels must be {}, got {}",
                audio::CHANNELS,
                output.channels
            ),
        });
    }

    // Samples are parsed as int16_t, so no other depth can hold them
    if output.bits_per_sample != audio::BITS_PER_SAMPLE {
        return Err(Error::ConfigValidation {
            message: format!(
                "bits_per_sample must be {}, got {}",
                audio::BITS_PER_SAMPLE,
                output.bits_per_sample
            ),
        });
    }

    validate_file_stem("region_prefix", &output.region_prefix)?;
    validate_file_stem("secondary_name", &output.secondary_name)?;

    Ok(())
}

/// Validate that array names are C identifiers.
fn validate_arrays(config: &Config) -> Result<()> {
    let arrays = &config.arrays;

    for (field, name) in [
        ("offsets", &arrays.offsets),
        ("primary", &arrays.primary),
        ("secondary", &arrays.secondary),
    ] {
        if !is_c_identifier(name) {
            return Err(Error::ConfigValidation {
                message: format!("arrays.{field} is not a valid C identifier: '{name}'"),
            });
        }
    }

    Ok(())
}

/// Reject names that would escape the output directory.
fn validate_file_stem(field: &str, stem: &str) -> Result<()> {
    if stem.is_empty() {
        return Err(Error::ConfigValidation {
            message: format!("{field} must not be empty"),
        });
    }

    if stem.contains(['/', '\\']) || stem.contains("..") {
        return Err(Error::ConfigValidation {
            message: format!("{field} must be a plain file name, got '{stem}'"),
        });
    }

    Ok(())
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_sample_rate() {
        let mut config = Config::default();
        config.output.sample_rate = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_channels() {
        let mut config = Config::default();
        config.output.channels = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_stereo_rejected() {
        let mut config = Config::default();
        config.output.channels = 2;
        let result = validate_config(&config);
        assert!(
            matches!(result, Err(Error::ConfigValidation { message }) if message.contains("channels"))
        );
    }

    #[test]
    fn test_validate_unsupported_bit_depth() {
        let mut config = Config::default();
        config.output.bits_per_sample = 24;
        let result = validate_config(&config);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_validate_prefix_path_traversal() {
        let mut config = Config::default();
        config.output.region_prefix = "../escape".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.output.secondary_name = "sub/noise".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_prefix() {
        let mut config = Config::default();
        config.output.region_prefix = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_array_names() {
        let mut config = Config::default();
        config.arrays.primary = "9lives".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.arrays.offsets = "smp boundaries".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.arrays.secondary = "_noise2".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
