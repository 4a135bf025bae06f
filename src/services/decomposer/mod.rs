//! Structured content decomposition.
//!
//! Turns one top-level JSON document into catalog entries: collection
//! documents yield one asset per item, page-builder exports yield one asset
//! per section (or module) plus a full-layout asset.

mod export;
mod item;

use crate::services::copyable::{build_copyable, pretty};
use crate::services::metadata::serialize_compact;
use crate::types::{Asset, AssetMetadata};
use serde_json::Value;
use std::collections::BTreeSet;

/// Keys whose presence marks a page-builder export.
const EXPORT_KEYS: &[&str] = &["content", "layouts", "sections"];
/// Keys holding the item array of a collection document.
const COLLECTION_KEYS: &[&str] = &["items", "assets"];

/// Where the document being decomposed came from.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    pub archive_name: &'a str,
    /// Archive-relative path of the document entry.
    pub document_path: &'a str,
    /// Base name of the document entry.
    pub document_name: &'a str,
    /// Version written into import formats lacking one.
    pub import_version: &'a str,
}

/// Assets produced from one document, plus non-fatal problems met on the way.
#[derive(Debug, Clone, Default)]
pub struct Decomposition {
    pub assets: Vec<Asset>,
    pub warnings: Vec<String>,
}

impl Decomposition {
    fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.warnings.push(message);
    }
}

/// Decompose a parsed top-level document according to its shape.
pub fn decompose(document: &Value, ctx: &DocumentContext<'_>) -> Decomposition {
    let mut out = Decomposition::default();

    match document {
        Value::Array(items) => item::decompose_items(items, ctx, &mut out),
        Value::Object(map) => {
            if EXPORT_KEYS.iter().any(|k| map.contains_key(*k)) {
                export::decompose_export(document, ctx, &mut out);
            } else if let Some(items) = COLLECTION_KEYS
                .iter()
                .find_map(|k| map.get(*k).and_then(Value::as_array))
            {
                item::decompose_items(items, ctx, &mut out);
            } else if let Some(asset) = item::item_asset(document, 0, ctx) {
                out.assets.push(asset);
            }
        }
        _ => out.warn(format!(
            "{}: top-level JSON is neither an object nor an array",
            ctx.document_name
        )),
    }

    log::debug!(
        "Decomposed {} into {} assets",
        ctx.document_name,
        out.assets.len()
    );
    out
}

/// A derived JSON asset that lives inside `ctx`'s document.
pub(crate) fn json_sub_asset(
    ctx: &DocumentContext<'_>,
    name: String,
    original_name: String,
    value: Value,
    category: String,
    tags: BTreeSet<String>,
    metadata: AssetMetadata,
) -> Asset {
    let mut asset = Asset::with_extension(
        name,
        original_name,
        ctx.document_path,
        ctx.archive_name,
        "json",
    );
    asset.size_bytes = serialize_compact(&value).len() as u64;
    asset.category = category;
    asset.tags = tags;
    asset.metadata = metadata;
    asset.content = Some(pretty(&value));
    asset.copyable_content = Some(build_copyable(&value, ctx.import_version));
    asset.json_content = Some(value);
    asset
}

#[cfg(test)]
#[path = "tests/decomposer_tests.rs"]
mod tests;
