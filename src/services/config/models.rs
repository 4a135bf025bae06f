use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum similarity (0..=1) an asset needs to appear in ranked results.
    pub min_similarity: f64,
    /// Match offset, in characters, that costs one full similarity point.
    pub distance: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_similarity: 0.7,
            distance: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Base names starting with this marker are skipped.
    pub hidden_prefix: String,
    /// Folder names that hold OS metadata (e.g. macOS resource forks).
    pub system_folders: Vec<String>,
    /// Fan entry processing out over the rayon pool.
    pub parallel: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            hidden_prefix: ".".into(),
            system_folders: vec!["__MACOSX".into()],
            parallel: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    /// Version written into the import format when the export has none.
    pub default_version: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_version: "4.0".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct IndexerConfig {
    pub search: SearchConfig,
    pub archive: ArchiveConfig,
    pub import: ImportConfig,
}
