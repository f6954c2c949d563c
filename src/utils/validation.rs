// file: src/utils/validation.rs
// description: input validation utilities and helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PipelineError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_search_term(term: &str) -> Result<()> {
        if term.trim().is_empty() {
            return Err(PipelineError::Validation(
                "Search term is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(PipelineError::Validation(
                "Output path is empty".to_string(),
            ));
        }

        if path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Output path is a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_worker_count(workers: usize) -> Result<()> {
        if workers == 0 {
            return Err(PipelineError::Validation(
                "Worker count must be greater than 0".to_string(),
            ));
        }

        if workers > 64 {
            return Err(PipelineError::Validation(
                "Worker count too large (max 64)".to_string(),
            ));
        }

        Ok(())
    }
}
