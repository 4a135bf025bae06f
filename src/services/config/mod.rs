pub mod models;

pub use models::*;

use crate::types::{IndexerError, IndexerResult};
use std::fs;
use std::path::Path;

impl IndexerConfig {
    /// Parse a (possibly partial) JSON config. Missing keys take defaults.
    pub fn from_json_str(raw: &str) -> IndexerResult<Self> {
        let config: IndexerConfig = serde_json::from_str(raw)
            .map_err(|e| IndexerError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> IndexerResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            IndexerError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_json_str(&raw)?;
        log::info!("Loaded indexer config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> IndexerResult<()> {
        if !(0.0..=1.0).contains(&self.search.min_similarity) {
            return Err(IndexerError::Config(format!(
                "search.min_similarity must be within 0..=1, got {}",
                self.search.min_similarity
            )));
        }
        if self.search.distance == 0 {
            return Err(IndexerError::Config(
                "search.distance must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
