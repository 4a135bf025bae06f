use super::filename_tags;
use crate::services::metadata::{module_stats, serialize_compact};
use crate::services::rules::{
    all_matches, first_match, COLUMN_MARKER, DOCUMENT_TAG_RULES, FALLBACK_JSON_CATEGORY,
    ITEM_CATEGORY_RULES, ITEM_TAG_RULES, JSON_FILENAME_CATEGORY_RULES, MODULE_MARKER_PREFIX,
    ROW_MARKER, SECTION_MARKER, SECTION_TAG_RULES,
};
use serde_json::Value;
use std::collections::BTreeSet;

fn lowered(value: &Value) -> String {
    serialize_compact(value).to_lowercase()
}

fn collect_tags<'a>(tags: impl Iterator<Item = &'a str>) -> BTreeSet<String> {
    tags.map(str::to_string).collect()
}

/// Category implied by structural markers, if any are present.
fn content_signature(text: &str) -> Option<String> {
    if text.contains(SECTION_MARKER) {
        let full_grid = text.contains(ROW_MARKER) && text.contains(COLUMN_MARKER);
        return Some(if full_grid { "layout" } else { "section" }.to_string());
    }
    if text.contains(ROW_MARKER) {
        return Some("row".to_string());
    }

    let stats = module_stats(text);
    match stats.unique.as_slice() {
        [] => None,
        [only] => Some(format!(
            "module-{}",
            only.strip_prefix(MODULE_MARKER_PREFIX).unwrap_or(only)
        )),
        _ => Some("multi-module".to_string()),
    }
}

/// Category of a standalone JSON document.
pub fn categorize_document(value: &Value, file_name: &str) -> String {
    if let Some(category) = content_signature(&lowered(value)) {
        return category;
    }
    let name = file_name.to_lowercase();
    first_match(JSON_FILENAME_CATEGORY_RULES, &name)
        .unwrap_or(FALLBACK_JSON_CATEGORY)
        .to_string()
}

pub fn document_tags(value: &Value, file_name: &str) -> BTreeSet<String> {
    let text = lowered(value);
    let mut tags = filename_tags(file_name);
    tags.extend(collect_tags(all_matches(DOCUMENT_TAG_RULES, &text)));
    tags
}

/// Category of one element of a collection document.
pub fn categorize_item(item: &Value) -> String {
    first_match(ITEM_CATEGORY_RULES, &lowered(item))
        .unwrap_or(FALLBACK_JSON_CATEGORY)
        .to_string()
}

pub fn item_tags(item: &Value) -> BTreeSet<String> {
    collect_tags(all_matches(ITEM_TAG_RULES, &lowered(item)))
}

pub fn section_tags(section: &Value) -> BTreeSet<String> {
    collect_tags(all_matches(SECTION_TAG_RULES, &lowered(section)))
}
