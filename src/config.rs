// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub pipeline: PipelineConfig,
    pub filter: FilterConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Zero leaves the transport default in place.
    #[serde(default)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub parallel_workers: usize,
    pub max_pages: usize,
    pub media_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FilterConfig {
    pub threshold_kb: u64,
    pub metadata_suffix: String,
    pub size_field: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub search_term: String,
}

impl Config {
    /// Built-in defaults, then the TOML file (optional), then `NASA_REPORT__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_layered(path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH)), Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("NASA_REPORT")
            .separator("__")
            .try_parsing(true)
    }

    fn load_layered(path: &Path, environment: config::Environment) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::from(path).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://images-api.nasa.gov".to_string(),
                user_agent: concat!("nasa_image_report/", env!("CARGO_PKG_VERSION")).to_string(),
                timeout_secs: 0,
            },
            pipeline: PipelineConfig {
                parallel_workers: 1,
                max_pages: 500,
                media_type: "image".to_string(),
            },
            filter: FilterConfig {
                threshold_kb: 1000,
                metadata_suffix: "metadata.json".to_string(),
                size_field: "File:FileSize".to_string(),
            },
            report: ReportConfig {
                output_path: PathBuf::from("nasa_ids.csv"),
                search_term: "Ilan Ramon".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.pipeline.parallel_workers == 0 {
            return Err(PipelineError::Config(
                "parallel_workers must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.max_pages == 0 {
            return Err(PipelineError::Config(
                "max_pages must be greater than 0".to_string(),
            ));
        }

        Validator::validate_url(&self.api.base_url)
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        if self.filter.metadata_suffix.trim().is_empty() || self.filter.size_field.trim().is_empty()
        {
            return Err(PipelineError::Config(
                "metadata_suffix and size_field must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
