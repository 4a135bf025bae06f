//! Archive ingestion: open a ZIP bundle, catalogue every entry.
//!
//! The first JSON entry is the primary document and is decomposed into
//! sub-assets; every other entry becomes one asset. Output order follows
//! the archive's enumeration order.

mod entry;
mod extract;
mod types;

pub use extract::{ingest, ingest_with_report, Ingestor};
pub use types::{IngestReport, IngestWarning};

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
