//! Catalog data model.
//!
//! An [`Asset`] is created exactly once while an archive is ingested and is
//! treated as immutable by the indexing pipeline afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Coarse asset type, derived purely from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Document,
    Code,
    Font,
    Archive,
    Design,
    Other,
}

impl AssetType {
    /// Map a lower-cased extension (without the dot) to its type.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" | "bmp" | "tiff" => Self::Image,
            "pdf" | "doc" | "docx" | "txt" | "md" | "rtf" => Self::Document,
            "json" | "css" | "js" | "html" | "php" | "xml" | "scss" | "sass" => Self::Code,
            "woff" | "woff2" | "ttf" | "otf" => Self::Font,
            "zip" | "rar" | "7z" => Self::Archive,
            "psd" | "ai" | "sketch" | "fig" => Self::Design,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Code => "code",
            Self::Font => "font",
            Self::Archive => "archive",
            Self::Design => "design",
            Self::Other => "other",
        }
    }
}

/// Lower-cased extension of a file name, or an empty string when it has none.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Last path component of an archive-relative path.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Opaque reference to binary preview data (images).
///
/// The bytes live only in memory; a serialized handle keeps its id, mime type
/// and length so a UI layer can tell a preview existed. Releasing any view
/// created from the bytes is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewHandle {
    pub id: Uuid,
    pub mime_type: String,
    pub byte_len: usize,
    #[serde(skip)]
    data: Option<Arc<[u8]>>,
}

impl PreviewHandle {
    pub fn new(extension: &str, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mime_type: mime_for_extension(extension).to_string(),
            byte_len: bytes.len(),
            data: Some(Arc::from(bytes)),
        }
    }

    /// Preview bytes, `None` once the handle went through serialization.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Ready-to-paste renderings of a JSON asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyableContent {
    pub raw: String,
    pub minified: String,
    pub import_format: Value,
}

/// Flags derived from an export's `settings` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsAnalysis {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub responsive: bool,
    #[serde(rename = "hasCustomCSS", skip_serializing_if = "std::ops::Not::not")]
    pub has_custom_css: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_animations: bool,
}

/// Design attributes pulled out of an asset. Every key is omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetMetadata {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<String>,
    #[serde(rename = "customCSS", skip_serializing_if = "Vec::is_empty")]
    pub custom_css: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_count: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unique_modules: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub module_distribution: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AssetMetadata {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub original_name: String,
    pub path: String,
    pub size_bytes: u64,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub category: String,
    pub tags: BTreeSet<String>,
    pub upload_date: DateTime<Utc>,
    pub source_archive_name: String,
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_content: Option<Value>,
    #[serde(
        rename = "previewReference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub preview: Option<PreviewHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyable_content: Option<CopyableContent>,
    #[serde(default, skip_serializing_if = "AssetMetadata::is_empty")]
    pub metadata: AssetMetadata,
}

impl Asset {
    /// Fresh asset with a new id and timestamp. Type and extension are taken
    /// from `original_name`; the category starts as `"unknown"` until a
    /// classifier assigns one.
    pub fn new(
        name: impl Into<String>,
        original_name: impl Into<String>,
        path: impl Into<String>,
        source_archive_name: impl Into<String>,
    ) -> Self {
        let original_name = original_name.into();
        let extension = extension_of(&original_name);
        Self::with_extension(name, original_name, path, source_archive_name, extension)
    }

    /// Like [`Asset::new`], for assets whose original name is synthetic and
    /// carries no usable extension (decomposed sub-assets).
    pub fn with_extension(
        name: impl Into<String>,
        original_name: impl Into<String>,
        path: impl Into<String>,
        source_archive_name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        let extension = extension.into().to_lowercase();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            asset_type: AssetType::from_extension(&extension),
            original_name: original_name.into(),
            path: path.into(),
            size_bytes: 0,
            category: "unknown".to_string(),
            tags: BTreeSet::new(),
            upload_date: Utc::now(),
            source_archive_name: source_archive_name.into(),
            extension,
            description: None,
            content: None,
            json_content: None,
            preview: None,
            copyable_content: None,
            metadata: AssetMetadata::default(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
#[path = "tests/asset_tests.rs"]
mod tests;
