//! In-memory catalog management on top of ingest results.
//!
//! The catalog is a plain ordered list. Query and ingest services borrow it
//! or hand it new assets; nothing here is shared or global.

mod storage;

pub use storage::{CatalogStore, JsonFileStore};

use crate::services::archive::Ingestor;
use crate::services::search::QueryEngine;
use crate::types::{Asset, IndexerError, IndexerResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// User-editable fields of an asset. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self { assets }
    }

    /// Load a catalog from a store; an empty store gives an empty catalog.
    pub fn load(store: &dyn CatalogStore) -> IndexerResult<Self> {
        Ok(Self::new(store.load()?))
    }

    pub fn save(&self, store: &dyn CatalogStore) -> IndexerResult<()> {
        store.save(&self.assets)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn add_assets(&mut self, assets: impl IntoIterator<Item = Asset>) {
        self.assets.extend(assets);
    }

    /// Ingest an archive and append its assets. Returns how many were added.
    pub fn ingest_archive(
        &mut self,
        ingestor: &Ingestor,
        archive_bytes: &[u8],
        archive_name: &str,
    ) -> IndexerResult<usize> {
        let assets = ingestor.ingest(archive_bytes, archive_name)?;
        let added = assets.len();
        self.add_assets(assets);
        Ok(added)
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn update_asset(&mut self, id: &str, update: AssetUpdate) -> IndexerResult<&Asset> {
        let asset = self
            .assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| IndexerError::NotFound(format!("asset {id}")))?;

        if let Some(name) = update.name {
            asset.name = name;
        }
        if let Some(description) = update.description {
            asset.description = Some(description);
        }
        if let Some(category) = update.category {
            asset.category = category;
        }
        if let Some(tags) = update.tags {
            asset.tags = tags;
        }
        Ok(asset)
    }

    pub fn delete_asset(&mut self, id: &str) -> IndexerResult<Asset> {
        let index = self
            .assets
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| IndexerError::NotFound(format!("asset {id}")))?;
        Ok(self.assets.remove(index))
    }

    /// Distinct categories, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.assets
            .iter()
            .filter(|a| seen.insert(a.category.as_str()))
            .map(|a| a.category.clone())
            .collect()
    }

    /// Distinct tags, first-seen order.
    pub fn all_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.assets
            .iter()
            .flat_map(|a| a.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    pub fn search(
        &self,
        engine: &QueryEngine,
        term: &str,
        category: &str,
        tags: &[&str],
    ) -> Vec<&Asset> {
        engine.search(&self.assets, term, category, tags)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
