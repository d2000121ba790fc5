pub mod orchestrator;
pub mod outcome;

pub use orchestrator::{Pipeline, PipelineState};
pub use outcome::{
    FailureKind, PipelineError, PipelineFailure, PipelineOutcome, PipelineSuccess, Stage,
};
