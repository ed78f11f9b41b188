//! Extraction pipeline components.

mod coordinator;
mod processor;
mod report;
mod settings;
mod verify;

pub use coordinator::{
    WriteCheck, all_outputs_present, expected_outputs, expected_stems, should_write,
};
pub use processor::{ParsedArrays, Pipeline, ProgressEvent};
pub use report::{ArtifactEntry, ArtifactStatus, ExtractionReport};
pub use settings::PipelineSettings;
pub use verify::{VerifyEntry, VerifyProblem, VerifyReport, verify_outputs};
