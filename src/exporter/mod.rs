// file: src/exporter/mod.rs
// description: report exporter module exports
// reference: internal module structure

pub mod csv;

pub use self::csv::{CsvReportWriter, REPORT_HEADER};
