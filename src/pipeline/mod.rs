// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod paginator;
mod progress;
mod resolver;

pub use orchestrator::{ReportPipeline, SearchSummary};
pub use paginator::Paginator;
pub use progress::{PipelineStats, ProgressTracker};
pub use resolver::MetadataResolver;
