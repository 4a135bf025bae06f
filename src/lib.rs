//! Ingest ZIP bundles of page-builder design assets, classify and decompose
//! their contents into a flat catalog, and query that catalog with fuzzy
//! search.

pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

pub use services::archive::{ingest, ingest_with_report, IngestReport, IngestWarning, Ingestor};
pub use services::catalog::{AssetCatalog, AssetUpdate, CatalogStore, JsonFileStore};
pub use services::config::IndexerConfig;
pub use services::search::{query, QueryEngine, SearchHit, ALL_CATEGORIES};
pub use types::{Asset, AssetType, IndexerError, IndexerResult};
