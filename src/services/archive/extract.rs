use super::entry::{process_entry, process_primary};
use super::types::{EntryOutcome, IngestReport, RawEntry};
use crate::services::config::{ArchiveConfig, IndexerConfig};
use crate::types::{base_name, extension_of, Asset, IndexerError, IndexerResult};
use rayon::prelude::*;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// Upper bound on buffer preallocation; declared sizes are not trusted.
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

/// Archive ingestion service. Stateless apart from its config.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IndexerConfig,
}

impl Ingestor {
    pub fn new(config: IndexerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Extract, classify and decompose every entry of an archive.
    ///
    /// Fails only when the archive itself cannot be opened; per-entry
    /// problems are logged and the entry falls back to name-based
    /// classification.
    pub fn ingest(&self, archive_bytes: &[u8], archive_name: &str) -> IndexerResult<Vec<Asset>> {
        self.ingest_with_report(archive_bytes, archive_name)
            .map(|report| report.assets)
    }

    /// Like [`Ingestor::ingest`], also returning warnings and entry counts.
    ///
    /// Steps:
    /// 1. Open the archive (fatal on failure)
    /// 2. Read every non-skipped entry in enumeration order
    /// 3. Pick the first JSON entry as the primary document
    /// 4. Process entries (in parallel when enabled) into order-indexed slots
    /// 5. Flatten the slots into the asset list
    pub fn ingest_with_report(
        &self,
        archive_bytes: &[u8],
        archive_name: &str,
    ) -> IndexerResult<IngestReport> {
        let mut archive = ZipArchive::new(Cursor::new(archive_bytes)).map_err(|e| {
            IndexerError::ArchiveOpen(format!("Failed to read ZIP '{archive_name}': {e}"))
        })?;

        let entries_total = archive.len();
        let entries = read_entries(&mut archive, &self.config.archive);
        let entries_skipped = entries_total - entries.len();
        let primary = entries.iter().position(|e| e.extension == "json");
        if let Some(slot) = primary {
            log::debug!("Primary document: {}", entries[slot].path);
        }

        let config = &self.config;
        let process = |(slot, entry): (usize, RawEntry)| -> EntryOutcome {
            if Some(slot) == primary {
                process_primary(entry, archive_name, config)
            } else {
                process_entry(entry, archive_name, config)
            }
        };

        let outcomes: Vec<EntryOutcome> = if config.archive.parallel {
            entries.into_par_iter().enumerate().map(process).collect()
        } else {
            entries.into_iter().enumerate().map(process).collect()
        };

        let mut report = IngestReport {
            archive_name: archive_name.to_string(),
            entries_total,
            entries_skipped,
            ..IngestReport::default()
        };
        for outcome in outcomes {
            report.assets.extend(outcome.assets);
            report.warnings.extend(outcome.warnings);
        }

        log::info!(
            "Ingested '{}': {} assets from {} entries ({} skipped, {} warnings)",
            archive_name,
            report.assets.len(),
            entries_total,
            entries_skipped,
            report.warnings.len()
        );
        Ok(report)
    }
}

/// Directories, hidden files and OS metadata folders are not catalogued.
/// An empty hidden prefix disables the hidden-file rule.
fn should_skip(path: &str, config: &ArchiveConfig) -> bool {
    if path.ends_with('/') {
        return true;
    }
    let name = base_name(path);
    let hidden = &config.hidden_prefix;
    if name.is_empty() || (!hidden.is_empty() && name.starts_with(hidden.as_str())) {
        return true;
    }
    path.split('/')
        .any(|part| config.system_folders.iter().any(|f| f == part))
}

/// Read all catalogue-worthy entries in enumeration order.
fn read_entries<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    config: &ArchiveConfig,
) -> Vec<RawEntry> {
    let mut entries = Vec::new();

    for i in 0..archive.len() {
        let Some(path) = archive.name_for_index(i).map(str::to_string) else {
            continue;
        };
        if should_skip(&path, config) {
            log::debug!("Skipping {path}");
            continue;
        }

        let file_name = base_name(&path).to_string();
        let extension = extension_of(&file_name);

        let (size, bytes) = match archive.by_index(i) {
            Ok(mut file) => {
                if file.is_dir() {
                    continue;
                }
                let size = file.size();
                let mut buf = Vec::with_capacity(size.min(MAX_PREALLOC) as usize);
                let bytes = file
                    .read_to_end(&mut buf)
                    .map(|_| buf)
                    .map_err(|e| e.to_string());
                (size, bytes)
            }
            Err(e) => (0, Err(e.to_string())),
        };

        entries.push(RawEntry {
            path,
            file_name,
            extension,
            size,
            bytes,
        });
    }

    entries
}

/// Ingest with the default configuration.
pub fn ingest(archive_bytes: &[u8], archive_name: &str) -> IndexerResult<Vec<Asset>> {
    Ingestor::default().ingest(archive_bytes, archive_name)
}

/// Ingest with the default configuration, keeping warnings and counts.
pub fn ingest_with_report(archive_bytes: &[u8], archive_name: &str) -> IndexerResult<IngestReport> {
    Ingestor::default().ingest_with_report(archive_bytes, archive_name)
}
