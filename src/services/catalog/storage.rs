use crate::types::{Asset, IndexerResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-catalog persistence. The catalog is saved and loaded as one blob.
pub trait CatalogStore {
    /// Stored assets, or an empty list when nothing was saved yet.
    fn load(&self) -> IndexerResult<Vec<Asset>>;
    fn save(&self, assets: &[Asset]) -> IndexerResult<()>;
}

/// Catalog stored as a single JSON array on disk.
///
/// Preview bytes are not written; a reloaded asset keeps only the handle.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> IndexerResult<Vec<Asset>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let assets: Vec<Asset> = serde_json::from_str(&raw)?;
        log::info!(
            "Loaded {} assets from {}",
            assets.len(),
            self.path.display()
        );
        Ok(assets)
    }

    fn save(&self, assets: &[Asset]) -> IndexerResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write to a sibling temp file first so a crash never leaves half a catalog.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(assets)?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("Saved {} assets to {}", assets.len(), self.path.display());
        Ok(())
    }
}
