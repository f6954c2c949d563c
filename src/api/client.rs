// file: src/api/client.rs
// description: HTTP client for the NASA Image and Video Library search api
// reference: https://images.nasa.gov/docs/images.nasa.gov_api_docs.pdf

use crate::config::ApiConfig;
use crate::error::{PipelineError, Result};
use crate::models::{AssetFileListing, MetadataDocument, SearchEnvelope, SearchResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone)]
pub struct MediaApiClient {
    client: Client,
    config: ApiConfig,
}

impl MediaApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        let client = builder
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    /// Runs the keyword query. Zero hits is an error: there is nothing to report.
    pub async fn search(&self, term: &str) -> Result<SearchResult> {
        let url = self.search_url();
        info!("Searching image library for \"{}\"", term);

        let request = self.client.get(&url).query(&[("q", term)]);
        let envelope: SearchEnvelope = self.get_json(request, &url).await?;
        let result = envelope.collection;

        if result.total_hits() == 0 {
            return Err(PipelineError::EmptyResult {
                term: term.to_string(),
            });
        }

        debug!(
            "Search returned {} hits, {} on first page",
            result.total_hits(),
            result.items.len()
        );
        Ok(result)
    }

    /// Fetches a further result page from a pagination link.
    pub async fn fetch_page(&self, url: &str) -> Result<SearchResult> {
        let envelope: SearchEnvelope = self.get_json(self.client.get(url), url).await?;
        Ok(envelope.collection)
    }

    pub async fn fetch_listing(&self, url: &str) -> Result<AssetFileListing> {
        self.get_json(self.client.get(url), url).await
    }

    pub async fn fetch_metadata(&self, url: &str) -> Result<MetadataDocument> {
        self.get_json(self.client.get(url), url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| PipelineError::network(url, e))?;

        if !response.status().is_success() {
            return Err(PipelineError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::network(url, e))?;

        serde_json::from_str(&body).map_err(|e| PipelineError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
