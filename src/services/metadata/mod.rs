//! Design-attribute extraction from JSON-bearing content.
//!
//! Every scan runs over the compact serialized form of the document, so a
//! pattern matches no matter how deep in the tree it sits. Nothing here
//! fails: a missing attribute is an empty collection.

use crate::services::rules::MODULE_MARKER_PREFIX;
use crate::types::{AssetMetadata, SettingsAnalysis};
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static RE_HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(?:[a-fA-F0-9]{6}|[a-fA-F0-9]{3})").expect("valid hex color regex")
});

static RE_RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*(?:,\s*[\d.]+)?\s*\)")
        .expect("valid rgb color regex")
});

static RE_FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"font[_-]?family":\s*"([^"]+)""#).expect("valid font regex")
});

static RE_CUSTOM_CSS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#""custom_css[^"]*":\s*"([^"]+)""#).expect("valid custom css regex"),
        Regex::new(r#""before":\s*"([^"]*<style[^>]*>.*?</style>[^"]*)""#)
            .expect("valid inline style regex"),
    ]
});

static RE_ANIMATION: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#""animation[^"]*":\s*"([^"]+)""#).expect("valid animation regex"),
        Regex::new(r#""entrance_animation":\s*"([^"]+)""#).expect("valid entrance regex"),
    ]
});

static RE_MODULE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}\w+", regex::escape(MODULE_MARKER_PREFIX)))
        .expect("valid module marker regex")
});

/// Animation values that mean "no animation".
const ANIMATION_SENTINELS: &[&str] = &["off", "none"];

/// Counts of page-builder module markers in a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleStats {
    pub count: usize,
    pub unique: Vec<String>,
    pub distribution: BTreeMap<String, usize>,
}

/// Compact serialized form used by every text scan.
pub fn serialize_compact(value: &Value) -> String {
    value.to_string()
}

/// JavaScript-style truthiness, used to read optional export fields.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field of an object if it exists and is truthy.
pub fn truthy_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_truthy(v))
}

/// Scalar rendered as plain text (strings unquoted).
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, item: &str) {
    if seen.insert(item.to_string()) {
        out.push(item.to_string());
    }
}

/// Hex (`#abc`, `#aabbcc`) and `rgb()/rgba()` colors, distinct, first-seen order.
pub fn extract_colors(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for m in RE_HEX_COLOR.find_iter(text) {
        push_unique(&mut colors, &mut seen, m.as_str());
    }
    for m in RE_RGB_COLOR.find_iter(text) {
        push_unique(&mut colors, &mut seen, m.as_str());
    }
    colors
}

pub fn extract_fonts(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut fonts = Vec::new();
    for caps in RE_FONT_FAMILY.captures_iter(text) {
        push_unique(&mut fonts, &mut seen, &caps[1]);
    }
    fonts
}

/// Custom CSS values and inline `<style>` blocks. Blank values are dropped.
pub fn extract_custom_css(text: &str) -> Vec<String> {
    RE_CUSTOM_CSS
        .iter()
        .flat_map(|re| re.captures_iter(text))
        .map(|caps| caps[1].to_string())
        .filter(|css| !css.trim().is_empty())
        .collect()
}

pub fn extract_animations(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut animations = Vec::new();
    for caps in RE_ANIMATION.iter().flat_map(|re| re.captures_iter(text)) {
        let name = &caps[1];
        if !ANIMATION_SENTINELS.contains(&name) {
            push_unique(&mut animations, &mut seen, name);
        }
    }
    animations
}

pub fn module_stats(text: &str) -> ModuleStats {
    let mut stats = ModuleStats::default();
    for m in RE_MODULE_MARKER.find_iter(text) {
        let marker = m.as_str();
        stats.count += 1;
        let entry = stats.distribution.entry(marker.to_string()).or_insert(0);
        if *entry == 0 {
            stats.unique.push(marker.to_string());
        }
        *entry += 1;
    }
    stats
}

fn apply_module_stats(metadata: &mut AssetMetadata, text: &str) {
    let stats = module_stats(text);
    if stats.count > 0 {
        metadata.module_count = Some(stats.count);
        metadata.unique_modules = stats.unique;
        metadata.module_distribution = stats.distribution;
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Colors, fonts and module statistics of a fragment (section or item body).
pub fn fragment_metadata(value: &Value) -> AssetMetadata {
    let text = serialize_compact(value);
    let mut metadata = AssetMetadata {
        colors: extract_colors(&text),
        fonts: extract_fonts(&text),
        ..AssetMetadata::default()
    };
    apply_module_stats(&mut metadata, &text);
    metadata
}

/// Fragment metadata plus the identifying fields of a collection item.
pub fn item_metadata(item: &Value) -> AssetMetadata {
    let mut metadata = fragment_metadata(item);
    metadata.version = truthy_field(item, "version").map(scalar_text);
    metadata.title = string_field(item, "title");
    metadata.description = string_field(item, "description");
    metadata
}

/// Flags of an export's `settings` object; `None` when nothing is set.
pub fn analyze_settings(settings: &Value) -> Option<SettingsAnalysis> {
    let analysis = SettingsAnalysis {
        responsive: truthy_field(settings, "responsive").is_some(),
        has_custom_css: truthy_field(settings, "custom_css").is_some(),
        has_animations: truthy_field(settings, "animations").is_some(),
    };
    (analysis != SettingsAnalysis::default()).then_some(analysis)
}

/// Full metadata of a page-builder document.
pub fn document_metadata(document: &Value) -> AssetMetadata {
    let text = serialize_compact(document);
    let mut metadata = AssetMetadata {
        colors: extract_colors(&text),
        fonts: extract_fonts(&text),
        custom_css: extract_custom_css(&text),
        animations: extract_animations(&text),
        version: truthy_field(document, "version").map(scalar_text),
        title: string_field(document, "title"),
        description: string_field(document, "description"),
        settings: truthy_field(document, "settings").and_then(analyze_settings),
        ..AssetMetadata::default()
    };
    if let Some(content) = truthy_field(document, "content") {
        metadata.has_content = Some(true);
        metadata.content_length = Some(serialize_compact(content).len());
    }
    apply_module_stats(&mut metadata, &text);
    metadata
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
