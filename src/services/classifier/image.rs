use super::filename_tags;
use crate::services::rules::{
    all_matches, first_match, GENERIC_IMAGE_CATEGORY, IMAGE_CATEGORY_RULES, IMAGE_TAG_RULES,
};
use std::collections::BTreeSet;

/// Image category from file name keywords only.
pub fn categorize_image(file_name: &str) -> String {
    let name = file_name.to_lowercase();
    first_match(IMAGE_CATEGORY_RULES, &name)
        .unwrap_or(GENERIC_IMAGE_CATEGORY)
        .to_string()
}

pub fn image_tags(file_name: &str) -> BTreeSet<String> {
    let name = file_name.to_lowercase();
    let mut tags = filename_tags(file_name);
    tags.extend(all_matches(IMAGE_TAG_RULES, &name).map(str::to_string));
    tags
}
