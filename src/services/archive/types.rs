use crate::types::Asset;
use serde::{Deserialize, Serialize};

/// A non-fatal problem with one archive entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestWarning {
    /// Archive-relative path of the entry.
    pub entry: String,
    pub message: String,
}

/// Everything one ingest call produced.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub archive_name: String,
    pub assets: Vec<Asset>,
    pub warnings: Vec<IngestWarning>,
    /// Entries listed in the archive's central directory.
    pub entries_total: usize,
    /// Directories, hidden files and OS metadata that were not processed.
    pub entries_skipped: usize,
}

/// One entry pulled out of the archive, ready for processing.
#[derive(Debug, Clone)]
pub(crate) struct RawEntry {
    pub path: String,
    pub file_name: String,
    pub extension: String,
    pub size: u64,
    pub bytes: Result<Vec<u8>, String>,
}

/// Output of processing one entry; stored in that entry's slot.
#[derive(Debug, Default)]
pub(crate) struct EntryOutcome {
    pub assets: Vec<Asset>,
    pub warnings: Vec<IngestWarning>,
}

impl EntryOutcome {
    pub fn warn(&mut self, entry: &str, message: String) {
        log::warn!("{entry}: {message}");
        self.warnings.push(IngestWarning {
            entry: entry.to_string(),
            message,
        });
    }
}
