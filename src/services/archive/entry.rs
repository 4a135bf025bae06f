//! Per-entry processing. Failures here never escape: the entry still yields
//! an asset classified from its name and extension alone.

use super::types::{EntryOutcome, IngestWarning, RawEntry};
use crate::services::classifier::{self, classify, classify_fallback, EntryContent};
use crate::services::config::IndexerConfig;
use crate::services::copyable::build_copyable;
use crate::services::decomposer::{decompose, DocumentContext};
use crate::services::metadata::document_metadata;
use crate::types::{Asset, PreviewHandle};
use serde_json::Value;

fn base_asset(entry: &RawEntry, archive_name: &str) -> Asset {
    let mut asset = Asset::new(
        entry.file_name.as_str(),
        entry.file_name.as_str(),
        entry.path.as_str(),
        archive_name,
    );
    asset.size_bytes = entry.size;
    asset
}

fn apply_fallback(asset: &mut Asset, file_name: &str, extension: &str) {
    let fallback = classify_fallback(file_name, extension);
    asset.category = fallback.category;
    asset.tags = fallback.tags;
}

/// UTF-8 text without NUL bytes; anything else is treated as binary.
fn as_text(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok().filter(|t| !t.contains('\0'))
}

fn parse_json(bytes: &[u8]) -> Result<(&str, Value), String> {
    let text = std::str::from_utf8(bytes).map_err(|e| format!("JSON is not valid UTF-8: {e}"))?;
    let value = serde_json::from_str(text).map_err(|e| format!("Failed to parse JSON: {e}"))?;
    Ok((text, value))
}

/// The primary document: decomposed into sub-assets.
pub(super) fn process_primary(
    entry: RawEntry,
    archive_name: &str,
    config: &IndexerConfig,
) -> EntryOutcome {
    let mut outcome = EntryOutcome::default();

    let bytes = match &entry.bytes {
        Ok(bytes) => bytes,
        Err(e) => {
            outcome.warn(&entry.path, format!("Failed to read entry: {e}"));
            let mut asset = base_asset(&entry, archive_name);
            apply_fallback(&mut asset, &entry.file_name, &entry.extension);
            outcome.assets.push(asset);
            return outcome;
        }
    };

    match parse_json(bytes) {
        Ok((_, document)) => {
            let ctx = DocumentContext {
                archive_name,
                document_path: &entry.path,
                document_name: &entry.file_name,
                import_version: &config.import.default_version,
            };
            let decomposition = decompose(&document, &ctx);
            outcome.assets = decomposition.assets;
            outcome
                .warnings
                .extend(decomposition.warnings.into_iter().map(|message| IngestWarning {
                    entry: entry.path.clone(),
                    message,
                }));
        }
        Err(e) => {
            outcome.warn(&entry.path, e);
            let mut asset = base_asset(&entry, archive_name);
            asset.content = as_text(bytes).map(str::to_string);
            apply_fallback(&mut asset, &entry.file_name, &entry.extension);
            outcome.assets.push(asset);
        }
    }
    outcome
}

/// Any entry other than the primary document.
pub(super) fn process_entry(
    entry: RawEntry,
    archive_name: &str,
    config: &IndexerConfig,
) -> EntryOutcome {
    let mut outcome = EntryOutcome::default();
    let mut asset = base_asset(&entry, archive_name);
    let RawEntry {
        path,
        file_name,
        extension,
        bytes,
        ..
    } = entry;

    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => {
            outcome.warn(&path, format!("Failed to read entry: {e}"));
            apply_fallback(&mut asset, &file_name, &extension);
            outcome.assets.push(asset);
            return outcome;
        }
    };

    let ext = extension.as_str();
    if ext == "json" {
        match parse_json(&bytes) {
            Ok((text, value)) => {
                let result = classify(&file_name, ext, EntryContent::Json(&value));
                asset.category = result.category;
                asset.tags = result.tags;
                asset.metadata = document_metadata(&value);
                asset.copyable_content =
                    Some(build_copyable(&value, &config.import.default_version));
                asset.content = Some(text.to_string());
                asset.json_content = Some(value);
            }
            Err(e) => {
                outcome.warn(&path, e);
                asset.content = as_text(&bytes).map(str::to_string);
                apply_fallback(&mut asset, &file_name, ext);
            }
        }
    } else if classifier::is_image_extension(ext) {
        let result = classify(&file_name, ext, EntryContent::Binary);
        asset.category = result.category;
        asset.tags = result.tags;
        asset.preview = Some(PreviewHandle::new(ext, bytes));
    } else {
        let content = match as_text(&bytes) {
            Some(text) => EntryContent::Text(text),
            None => {
                log::debug!("{path}: treating as binary");
                EntryContent::Binary
            }
        };
        let result = classify(&file_name, ext, content);
        asset.category = result.category;
        asset.tags = result.tags;
        if let EntryContent::Text(text) = content {
            asset.content = Some(text.to_string());
        }
    }

    outcome.assets.push(asset);
    outcome
}
