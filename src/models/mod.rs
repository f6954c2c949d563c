// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod collection;
pub mod metadata;
pub mod report;

pub use collection::{Asset, CollectionMetadata, Item, Link, SearchEnvelope, SearchResult};
pub use metadata::{AssetFileListing, MetadataDocument};
pub use report::ReportEntry;
