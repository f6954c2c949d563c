// file: src/exporter/csv.rs
// description: csv report writer for retained image sizes
// reference: https://docs.rs/csv

use crate::error::{PipelineError, Result};
use crate::models::ReportEntry;
use std::fs::{self, File};
use std::path::PathBuf;
use tracing::info;

pub const REPORT_HEADER: [&str; 2] = ["Nasa_id", "kb"];

#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    output_path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Writes the header and one row per entry in the given order,
    /// replacing any existing file. Returns the number of data rows.
    pub fn write(&self, entries: &[ReportEntry]) -> Result<usize> {
        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PipelineError::FileOperation {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(&self.output_path).map_err(|source| {
            PipelineError::FileOperation {
                path: self.output_path.clone(),
                source,
            }
        })?;

        // Header is written by hand so an empty report still carries it.
        let mut writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| self.report_error(e))?;

        for entry in entries {
            writer.serialize(entry).map_err(|e| self.report_error(e))?;
        }

        writer.flush().map_err(|source| PipelineError::FileOperation {
            path: self.output_path.clone(),
            source,
        })?;

        info!(
            "Wrote {} rows to {}",
            entries.len(),
            self.output_path.display()
        );
        Ok(entries.len())
    }

    fn report_error(&self, source: ::csv::Error) -> PipelineError {
        PipelineError::Report {
            path: self.output_path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_write_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nasa_ids.csv");
        let writer = CsvReportWriter::new(&path);

        let entries = vec![
            ReportEntry::new("sts107-s-002", 4200),
            ReportEntry::new("jsc2003e05215", 1200),
            ReportEntry::new("sts107-s-001", 1500),
        ];

        assert_eq!(writer.write(&entries).unwrap(), 3);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Nasa_id,kb\nsts107-s-002,4200\njsc2003e05215,1200\nsts107-s-001,1500\n"
        );
    }

    #[test]
    fn test_empty_report_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        CsvReportWriter::new(&path).write(&[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Nasa_id,kb\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nasa_ids.csv");
        fs::write(&path, "stale contents\nfrom an earlier run\n").unwrap();

        CsvReportWriter::new(&path)
            .write(&[ReportEntry::new("A", 1200)])
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Nasa_id,kb\nA,1200\n");
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");

        CsvReportWriter::new(&path)
            .write(&[ReportEntry::new("odd,id", 2000)])
            .unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Nasa_id,kb\n\"odd,id\",2000\n"
        );
    }

    #[test]
    fn test_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/2003/nasa_ids.csv");

        CsvReportWriter::new(&path).write(&[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened as the output file.
        let err = CsvReportWriter::new(dir.path()).write(&[]).unwrap_err();
        assert!(matches!(err, PipelineError::FileOperation { .. }));
    }
}
