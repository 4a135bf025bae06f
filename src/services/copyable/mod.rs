//! Copy-ready renderings of JSON assets.

use crate::types::CopyableContent;
use serde_json::{Map, Value};

/// Reduced `{version, content, settings}` shape for re-import into the page
/// builder. Documents without a `content` field are returned unchanged.
pub fn import_format(value: &Value, default_version: &str) -> Value {
    let Some(content) = value.get("content") else {
        return value.clone();
    };

    let version = value
        .get("version")
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::String(default_version.to_string()));
    let settings = value
        .get("settings")
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let mut reduced = Map::new();
    reduced.insert("version".into(), version);
    reduced.insert("content".into(), content.clone());
    reduced.insert("settings".into(), settings);
    Value::Object(reduced)
}

/// Pretty, minified and import-ready text of a JSON value.
pub fn build_copyable(value: &Value, default_version: &str) -> CopyableContent {
    CopyableContent {
        raw: pretty(value),
        minified: value.to_string(),
        import_format: import_format(value, default_version),
    }
}

/// Two-space indented JSON.
pub fn pretty(value: &Value) -> String {
    // Serializing a `Value` into a String cannot fail.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
#[path = "tests/copyable_tests.rs"]
mod tests;
