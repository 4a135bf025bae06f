//! Pattern rule tables and their evaluation.
//!
//! Rules are immutable `(keywords → label)` pairs. Category tables are
//! ordered (first match wins); tag tables are unordered (every match
//! contributes). Haystacks are expected to be lower-cased by the caller.

mod tables;

pub use tables::*;

/// A label that applies when any of its keywords occurs in the haystack.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub fn matches(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|kw| haystack.contains(kw))
    }
}

/// Category rules for one text-file family, e.g. stylesheets.
#[derive(Debug, Clone, Copy)]
pub struct ContentCategoryRule {
    pub extensions: &'static [&'static str],
    pub rules: &'static [KeywordRule],
    pub fallback: &'static str,
}

/// Ordered cascade: label of the first matching rule.
pub fn first_match(rules: &[KeywordRule], haystack: &str) -> Option<&'static str> {
    rules.iter().find(|r| r.matches(haystack)).map(|r| r.label)
}

/// Union semantics: labels of every matching rule, in table order.
pub fn all_matches<'a>(
    rules: &'a [KeywordRule],
    haystack: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    rules.iter().filter(|r| r.matches(haystack)).map(|r| r.label)
}

/// Category for files that could not be inspected beyond their extension.
pub fn category_for_extension(ext: &str) -> &'static str {
    EXTENSION_CATEGORIES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, category)| *category)
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Content-aware category rule set for a text file extension, if any.
pub fn content_rules_for_extension(ext: &str) -> Option<&'static ContentCategoryRule> {
    TEXT_CONTENT_CATEGORY_RULES
        .iter()
        .find(|r| r.extensions.contains(&ext))
}

#[cfg(test)]
#[path = "tests/rules_tests.rs"]
mod tests;
