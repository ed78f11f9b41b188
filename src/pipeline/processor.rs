//! Extraction pipeline: read source, extract arrays, slice, write WAV files.

use std::fs;

use tracing::{debug, info, warn};

use super::coordinator::{WriteCheck, all_outputs_present, expected_stems, should_write};
use super::{ArtifactEntry, ArtifactStatus, ExtractionReport, PipelineSettings};
use crate::error::{Error, Result};
use crate::extract::{extract_offsets, extract_samples};
use crate::slicer::{check_boundaries, slice_regions};
use crate::wav::WavWriter;

/// Progress notifications emitted while writing.
#[derive(Debug)]
pub enum ProgressEvent<'a> {
    /// Writing is about to start for `total` files.
    Start {
        /// Number of output files.
        total: usize,
    },
    /// One output file was handled.
    Artifact(&'a ArtifactEntry),
    /// All output files were handled.
    Finish,
}

/// Arrays parsed from the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArrays {
    /// Region boundaries.
    pub boundaries: Vec<usize>,
    /// Samples split into regions.
    pub primary: Vec<i16>,
    /// Samples written whole.
    pub secondary: Vec<i16>,
}

/// One-shot extraction of a source document into WAV files.
pub struct Pipeline {
    settings: PipelineSettings,
    writer: WavWriter,
}

impl Pipeline {
    /// Create a pipeline for the given settings.
    pub fn new(settings: PipelineSettings) -> Self {
        let writer = WavWriter::new(settings.output_dir.clone(), settings.format);
        Self { settings, writer }
    }

    /// Settings this pipeline runs with.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run the extraction.
    pub fn run(&self) -> Result<ExtractionReport> {
        self.run_with_progress(|_| {})
    }

    /// Run the extraction, reporting each output file to `on_progress`.
    ///
    /// Returns early without reading the source when every expected output
    /// already exists and `force` is unset. All three arrays are parsed
    /// before anything is written, so a parse failure leaves the output
    /// directory untouched.
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> Result<ExtractionReport>
    where
        F: FnMut(ProgressEvent<'_>),
    {
        self.ensure_source()?;

        if !self.settings.force && all_outputs_present(&self.settings, &self.writer) {
            return Ok(self.short_circuit_report());
        }

        let parsed = self.read_and_parse()?;
        let boundary_mismatch = self.check_reference(&parsed.boundaries);

        let outputs = self.outputs(&parsed);
        on_progress(ProgressEvent::Start {
            total: outputs.len(),
        });

        let mut artifacts = Vec::with_capacity(outputs.len());
        for (stem, samples) in outputs {
            let entry = self.emit(stem, samples)?;
            on_progress(ProgressEvent::Artifact(&entry));
            artifacts.push(entry);
        }

        on_progress(ProgressEvent::Finish);

        Ok(ExtractionReport {
            output_dir: self.settings.output_dir.clone(),
            short_circuited: false,
            boundary_mismatch,
            boundaries: parsed.boundaries,
            artifacts,
        })
    }

    /// Parse the source and report what a run would do, without writing.
    pub fn plan(&self) -> Result<ExtractionReport> {
        self.ensure_source()?;

        let parsed = self.read_and_parse()?;
        let boundary_mismatch = self.check_reference(&parsed.boundaries);

        let artifacts = self
            .outputs(&parsed)
            .into_iter()
            .map(|(stem, samples)| {
                let path = self.writer.path_for(&stem);
                let status = match should_write(&path, self.settings.force) {
                    WriteCheck::Write => ArtifactStatus::WouldWrite,
                    WriteCheck::SkipExists => ArtifactStatus::WouldSkip,
                };
                ArtifactEntry {
                    name: stem,
                    path,
                    samples: Some(samples.len()),
                    status,
                }
            })
            .collect();

        Ok(ExtractionReport {
            output_dir: self.settings.output_dir.clone(),
            short_circuited: false,
            boundary_mismatch,
            boundaries: parsed.boundaries,
            artifacts,
        })
    }

    /// Extract the offsets, primary and secondary arrays, in that order.
    pub fn parse(&self, text: &str) -> Result<ParsedArrays> {
        let arrays = &self.settings.arrays;

        debug!("Parsing {} array", arrays.offsets);
        let boundaries = extract_offsets(text, &arrays.offsets)?;
        info!("Found {} boundary values: {:?}", boundaries.len(), boundaries);

        debug!("Parsing {} array", arrays.primary);
        let primary = extract_samples(text, &arrays.primary)?;
        info!("Found {} samples in {}", primary.len(), arrays.primary);

        debug!("Parsing {} array", arrays.secondary);
        let secondary = extract_samples(text, &arrays.secondary)?;
        info!("Found {} samples in {}", secondary.len(), arrays.secondary);

        Ok(ParsedArrays {
            boundaries,
            primary,
            secondary,
        })
    }

    fn ensure_source(&self) -> Result<()> {
        if self.settings.source.exists() {
            Ok(())
        } else {
            Err(Error::SourceNotFound {
                path: self.settings.source.clone(),
            })
        }
    }

    fn read_and_parse(&self) -> Result<ParsedArrays> {
        let source = &self.settings.source;
        info!("Reading source file: {}", source.display());

        let text = fs::read_to_string(source).map_err(|e| Error::SourceRead {
            path: source.clone(),
            source: e,
        })?;

        self.parse(&text)
    }

    /// Log deviations from the reference table. Returns true on mismatch.
    fn check_reference(&self, boundaries: &[usize]) -> bool {
        for issue in check_boundaries(boundaries) {
            warn!("Boundary table: {issue}");
        }

        let expected = &self.settings.expected_boundaries;
        if expected.is_empty() || boundaries == expected.as_slice() {
            return false;
        }

        warn!("Boundaries differ from expected values");
        warn!("Expected: {expected:?}");
        true
    }

    /// Output stems paired with their samples, regions first.
    fn outputs<'a>(&self, parsed: &'a ParsedArrays) -> Vec<(String, &'a [i16])> {
        slice_regions(&parsed.primary, &parsed.boundaries)
            .into_iter()
            .map(|region| {
                debug!(
                    "Region {}: [{}, {}) {:.3}s",
                    region.index,
                    region.start,
                    region.end,
                    region.duration_secs(self.settings.format.sample_rate)
                );
                (self.settings.region_stem(region.index), region.samples)
            })
            .chain(std::iter::once((
                self.settings.secondary_name.clone(),
                parsed.secondary.as_slice(),
            )))
            .collect()
    }

    fn emit(&self, stem: String, samples: &[i16]) -> Result<ArtifactEntry> {
        let path = self.writer.path_for(&stem);

        let status = match should_write(&path, self.settings.force) {
            WriteCheck::SkipExists => {
                info!("Skipping {stem} (already exists)");
                ArtifactStatus::Skipped
            }
            WriteCheck::Write => {
                self.writer.write(&stem, samples)?;
                #[allow(clippy::cast_precision_loss)]
                let secs = samples.len() as f64 / f64::from(self.settings.format.sample_rate);
                info!("Created {stem}: {} samples ({secs:.3}s)", samples.len());
                ArtifactStatus::Written
            }
        };

        Ok(ArtifactEntry {
            name: stem,
            path,
            samples: Some(samples.len()),
            status,
        })
    }

    fn short_circuit_report(&self) -> ExtractionReport {
        let artifacts: Vec<ArtifactEntry> = expected_stems(&self.settings)
            .into_iter()
            .map(|stem| ArtifactEntry {
                path: self.writer.path_for(&stem),
                name: stem,
                samples: None,
                status: ArtifactStatus::Skipped,
            })
            .collect();

        info!(
            "All {} sample files already exist in {}",
            artifacts.len(),
            self.settings.output_dir.display()
        );
        info!("Use --force to regenerate");

        ExtractionReport {
            output_dir: self.settings.output_dir.clone(),
            short_circuited: true,
            boundary_mismatch: false,
            boundaries: Vec::new(),
            artifacts,
        }
    }
}
