// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod exporter;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use api::MediaApiClient;
pub use config::{ApiConfig, Config, FilterConfig, PipelineConfig, ReportConfig};
pub use error::{PipelineError, Result};
pub use exporter::{CsvReportWriter, REPORT_HEADER};
pub use filter::{SizeFilter, parse_size_kb};
pub use models::{Asset, AssetFileListing, Item, Link, MetadataDocument, ReportEntry, SearchResult};
pub use pipeline::{
    MetadataResolver, Paginator, PipelineStats, ProgressTracker, ReportPipeline, SearchSummary,
};
pub use utils::Validator;
