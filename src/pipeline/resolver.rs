// file: src/pipeline/resolver.rs
// description: resolves image metadata documents into filtered report entries
// reference: per-item listing → metadata.json → File:FileSize lookup

use crate::api::MediaApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::filter::SizeFilter;
use crate::models::{Asset, AssetFileListing, Item, ReportEntry};
use crate::pipeline::progress::ProgressTracker;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, warn};

pub struct MetadataResolver {
    client: MediaApiClient,
    filter: SizeFilter,
    media_type: String,
    metadata_suffix: String,
    size_field: String,
    parallel_workers: usize,
}

impl MetadataResolver {
    pub fn new(client: MediaApiClient, config: &Config) -> Self {
        Self {
            client,
            filter: SizeFilter::from_config(&config.filter),
            media_type: config.pipeline.media_type.clone(),
            metadata_suffix: config.filter.metadata_suffix.clone(),
            size_field: config.filter.size_field.clone(),
            parallel_workers: config.pipeline.parallel_workers.max(1),
        }
    }

    /// Resolves every item into report entries, in item order and, within an
    /// item, in asset order. Up to `parallel_workers` items are in flight at
    /// once; output order is unaffected. The first fatal error aborts the run.
    pub async fn resolve(
        &self,
        items: &[Item],
        progress: &ProgressTracker,
    ) -> Result<Vec<ReportEntry>> {
        let per_item: Vec<Vec<ReportEntry>> = stream::iter(items)
            .map(|item| async move {
                let entries = self.resolve_item(item, progress).await;
                progress.inc_items_resolved();
                entries
            })
            .buffered(self.parallel_workers)
            .try_collect()
            .await?;

        Ok(per_item.into_iter().flatten().collect())
    }

    async fn resolve_item(
        &self,
        item: &Item,
        progress: &ProgressTracker,
    ) -> Result<Vec<ReportEntry>> {
        let mut listing: Option<AssetFileListing> = None;
        let mut entries = Vec::new();

        for asset in &item.assets {
            if asset.media_type != self.media_type {
                continue;
            }

            debug!("Inspecting {}", asset.nasa_id);
            progress.inc_images_inspected();

            // One listing per item serves all of its image assets.
            if listing.is_none() {
                listing = Some(self.client.fetch_listing(&item.href).await?);
            }

            let metadata_url = listing
                .as_ref()
                .and_then(|listing| listing.find_containing(&self.metadata_suffix))
                .map(str::to_owned);

            let Some(raw_size) = self.lookup_size(asset, metadata_url.as_deref()).await? else {
                progress.inc_assets_skipped();
                continue;
            };

            match self.filter.classify(&raw_size) {
                Ok(Some(kb)) => {
                    progress.inc_entries_retained();
                    entries.push(ReportEntry::new(asset.nasa_id.clone(), kb));
                }
                Ok(None) => {
                    debug!("{} is {}, not above threshold", asset.nasa_id, raw_size);
                }
                Err(e) => {
                    warn!("{}: {}; skipping", asset.nasa_id, e);
                    progress.inc_assets_skipped();
                }
            }
        }

        Ok(entries)
    }

    /// Raw size string for `asset`, or `None` when the listing has no
    /// metadata document or the document has no size field.
    async fn lookup_size(
        &self,
        asset: &Asset,
        metadata_url: Option<&str>,
    ) -> Result<Option<String>> {
        let Some(metadata_url) = metadata_url else {
            debug!("{} has no {} in its listing", asset.nasa_id, self.metadata_suffix);
            return Ok(None);
        };

        let document = self.client.fetch_metadata(metadata_url).await?;

        match document.field_str(&self.size_field) {
            Some(size) => Ok(Some(size.to_string())),
            None => {
                debug!("{} metadata has no {}", asset.nasa_id, self.size_field);
                Ok(None)
            }
        }
    }
}
