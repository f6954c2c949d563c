// file: src/pipeline/orchestrator.rs
// description: coordinates search, pagination, metadata resolution, and report writing
// reference: orchestrates the asynchronous report workflow

use crate::api::MediaApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::exporter::CsvReportWriter;
use crate::models::Item;
use crate::pipeline::paginator::Paginator;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::pipeline::resolver::MetadataResolver;
use crate::utils::Validator;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Items gathered by a search once pagination finished.
#[derive(Debug, Clone)]
pub struct SearchSummary {
    pub term: String,
    pub total_hits: usize,
    pub items: Vec<Item>,
}

impl SearchSummary {
    pub fn asset_count(&self, media_type: &str) -> usize {
        self.items
            .iter()
            .map(|item| item.assets_of_type(media_type).count())
            .sum()
    }
}

pub struct ReportPipeline {
    config: Config,
    client: MediaApiClient,
    show_progress: bool,
    colored: bool,
}

impl ReportPipeline {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = MediaApiClient::new(config.api.clone())?;

        Ok(Self {
            config,
            client,
            show_progress: true,
            colored: true,
        })
    }

    pub fn with_progress(mut self, show_progress: bool, colored: bool) -> Self {
        self.show_progress = show_progress;
        self.colored = colored;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Searches for `term` and follows pagination until every hit is collected.
    pub async fn collect(&self, term: &str) -> Result<SearchSummary> {
        Validator::validate_search_term(term)?;

        let initial = self.client.search(term).await?;
        let total_hits = initial.total_hits();
        info!("Total number of items from query: {}", total_hits);

        let items = Paginator::new(&self.client, self.config.pipeline.max_pages)
            .collect_all_items(initial)
            .await?;
        info!("Number of items collected: {}", items.len());

        Ok(SearchSummary {
            term: term.to_string(),
            total_hits,
            items,
        })
    }

    /// Runs the whole pipeline and writes the report to `output`.
    ///
    /// Nothing is written unless every stage before the writer succeeded, so
    /// an earlier report at `output` survives a failed run.
    pub async fn run(&self, term: &str, output: &Path) -> Result<PipelineStats> {
        Validator::validate_output_path(output)?;
        let start_time = Instant::now();

        info!("Starting report for \"{}\"", term);
        let summary = self.collect(term).await?;

        let progress = if self.show_progress {
            ProgressTracker::with_color(summary.items.len(), self.colored)
        } else {
            ProgressTracker::hidden(summary.items.len())
        };

        info!(
            "Resolving metadata with {} concurrent items...",
            self.config.pipeline.parallel_workers
        );
        let resolver = MetadataResolver::new(self.client.clone(), &self.config);
        let entries = resolver.resolve(&summary.items, &progress).await?;
        progress.finish();

        if entries.is_empty() {
            warn!(
                "No images above {} kB; writing header only",
                self.config.filter.threshold_kb
            );
        }

        CsvReportWriter::new(output).write(&entries)?;

        let mut stats = progress.get_stats();
        stats.total_hits = summary.total_hits;
        stats.items_collected = summary.items.len();
        stats.duration_secs = start_time.elapsed().as_secs();

        self.log_final_stats(&stats, output);
        Ok(stats)
    }

    fn log_final_stats(&self, stats: &PipelineStats, output: &Path) {
        info!("=== Report Summary ===");
        info!("Duration: {} seconds", stats.duration_secs);
        info!("Total hits: {}", stats.total_hits);
        info!("Items collected: {}", stats.items_collected);
        info!("Images inspected: {}", stats.images_inspected);
        info!("Assets skipped: {}", stats.assets_skipped);
        info!(
            "Entries above {} kB: {} ({:.2}%)",
            self.config.filter.threshold_kb,
            stats.entries_retained,
            stats.retention_rate()
        );
        info!("Processing speed: {:.2} items/sec", stats.items_per_second());
        info!("Report: {}", output.display());
        info!("======================");
    }
}
