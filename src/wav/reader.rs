//! WAV file reading.

use std::path::Path;

use hound::WavReader;

use super::PcmFormat;
use crate::Error;

/// Read an integer PCM WAV file back into its format and samples.
pub fn read_wav(path: &Path) -> Result<(PcmFormat, Vec<i16>), Error> {
    let read_failed = |e: hound::Error| Error::WavReadFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let mut reader = WavReader::open(path).map_err(read_failed)?;
    let format = PcmFormat::from(reader.spec());

    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_failed)?;

    Ok((format, samples))
}
