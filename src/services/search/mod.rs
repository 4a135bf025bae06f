//! Catalog query engine: category filter, tag filter, fuzzy rank.

mod fuzzy;
mod query;

pub use fuzzy::similarity;
pub use query::{query, QueryEngine, SearchHit, ALL_CATEGORIES};

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
