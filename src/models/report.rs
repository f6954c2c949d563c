// file: src/models/report.rs
// description: report row model serialized into the csv output

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(rename = "Nasa_id")]
    pub nasa_id: String,

    pub kb: u64,
}

impl ReportEntry {
    pub fn new(nasa_id: impl Into<String>, kb: u64) -> Self {
        Self {
            nasa_id: nasa_id.into(),
            kb,
        }
    }
}
