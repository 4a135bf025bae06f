//! Category and tag assignment for extracted items.
//!
//! Content signatures are consulted before file name keywords; tags are the
//! union of every rule that fires.

mod generic;
mod image;
mod json;

pub use generic::{categorize_text, text_tags};
pub use image::{categorize_image, image_tags};
pub use json::{categorize_document, categorize_item, document_tags, item_tags, section_tags};

use crate::services::rules::{
    self, category_for_extension, FILENAME_TAG_RULES, GENERIC_IMAGE_CATEGORY, IMAGE_EXTENSIONS,
    UNKNOWN_JSON_CATEGORY,
};
use serde_json::Value;
use std::collections::BTreeSet;

/// What the classifier could see of an entry.
#[derive(Debug, Clone, Copy)]
pub enum EntryContent<'a> {
    Json(&'a Value),
    Text(&'a str),
    /// Bytes that could not be inspected as text.
    Binary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub tags: BTreeSet<String>,
}

pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

/// Tags that can be read off a file name alone.
pub fn filename_tags(file_name: &str) -> BTreeSet<String> {
    let name = file_name.to_lowercase();
    rules::all_matches(FILENAME_TAG_RULES, &name)
        .map(str::to_string)
        .collect()
}

/// Category used when an entry's content could not be processed.
pub fn fallback_category(extension: &str) -> &'static str {
    if extension == "json" {
        UNKNOWN_JSON_CATEGORY
    } else if is_image_extension(extension) {
        GENERIC_IMAGE_CATEGORY
    } else {
        category_for_extension(extension)
    }
}

/// Deterministic classification from name and extension only.
pub fn classify_fallback(file_name: &str, extension: &str) -> Classification {
    Classification {
        category: fallback_category(extension).to_string(),
        tags: filename_tags(file_name),
    }
}

/// Classify one entry by name, extension and whatever content is available.
pub fn classify(file_name: &str, extension: &str, content: EntryContent<'_>) -> Classification {
    if is_image_extension(extension) {
        return Classification {
            category: categorize_image(file_name),
            tags: image_tags(file_name),
        };
    }
    match content {
        EntryContent::Json(value) => Classification {
            category: categorize_document(value, file_name),
            tags: document_tags(value, file_name),
        },
        EntryContent::Text(text) => Classification {
            category: categorize_text(extension, text),
            tags: text_tags(file_name, text),
        },
        EntryContent::Binary => Classification {
            category: category_for_extension(extension).to_string(),
            tags: filename_tags(file_name),
        },
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
