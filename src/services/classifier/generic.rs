use super::filename_tags;
use crate::services::rules::{
    all_matches, category_for_extension, content_rules_for_extension, first_match,
    GENERIC_CONTENT_TAG_RULES,
};
use std::collections::BTreeSet;

/// Category of a readable non-JSON text file.
pub fn categorize_text(extension: &str, content: &str) -> String {
    match content_rules_for_extension(extension) {
        Some(family) => {
            let body = content.to_lowercase();
            first_match(family.rules, &body)
                .unwrap_or(family.fallback)
                .to_string()
        }
        None => category_for_extension(extension).to_string(),
    }
}

pub fn text_tags(file_name: &str, content: &str) -> BTreeSet<String> {
    let mut tags = filename_tags(file_name);
    if !content.is_empty() {
        let body = content.to_lowercase();
        tags.extend(all_matches(GENERIC_CONTENT_TAG_RULES, &body).map(str::to_string));
    }
    tags
}
