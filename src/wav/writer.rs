//! WAV file writing.
//!
//! Writes `i16` sample arrays as integer PCM WAV files.

use std::fs;
use std::path::{Path, PathBuf};

use hound::WavWriter as HoundWriter;

use super::PcmFormat;
use crate::Error;
use crate::constants::naming;

/// Writes named sample arrays into an output directory.
pub struct WavWriter {
    /// Output directory for artifacts.
    output_dir: PathBuf,
    /// Format of every file written.
    format: PcmFormat,
}

impl WavWriter {
    /// Create a new WAV writer for the given output directory.
    #[must_use]
    pub fn new(output_dir: PathBuf, format: PcmFormat) -> Self {
        Self { output_dir, format }
    }

    /// Path an artifact with the given stem would be written to.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{stem}.{ext}", ext = naming::EXTENSION))
    }

    /// Write `samples` as `<output_dir>/<stem>.wav`.
    ///
    /// Creates the output directory if needed and truncates any existing
    /// file.
    pub fn write(&self, stem: &str, samples: &[i16]) -> Result<PathBuf, Error> {
        let path = self.path_for(stem);
        write_wav(&path, samples, self.format)?;
        Ok(path)
    }
}

/// Write samples to a WAV file, creating parent directories as needed.
pub fn write_wav(path: &Path, samples: &[i16], format: PcmFormat) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::OutputDirCreateFailed {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let write_failed = |e: hound::Error| Error::WavWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let mut writer = HoundWriter::create(path, format.to_spec()).map_err(write_failed)?;

    for &sample in samples {
        writer.write_sample(sample).map_err(write_failed)?;
    }

    writer.finalize().map_err(write_failed)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_appends_extension() {
        let writer = WavWriter::new(PathBuf::from("out"), PcmFormat::default());
        assert_eq!(writer.path_for("wavetable_03"), Path::new("out/wavetable_03.wav"));
    }

    #[test]
    fn test_write_creates_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let writer = WavWriter::new(nested.clone(), PcmFormat::default());

        let path = writer.write("noise", &[1, 2, 3]).unwrap();

        assert!(path.exists());
        assert_eq!(path.parent().unwrap(), nested);
    }

    #[test]
    fn test_write_empty_samples() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.wav");

        write_wav(&path, &[], PcmFormat::default()).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn test_output_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("out");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let writer = WavWriter::new(blocker.join("elements"), PcmFormat::default());

        let result = writer.write("noise", &[1]);

        assert!(matches!(result, Err(Error::OutputDirCreateFailed { .. })));
    }
}
