use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    /// The archive itself could not be opened or decoded. Fatal to the call.
    #[error("Archive open error: {0}")]
    ArchiveOpen(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<std::io::Error> for IndexerError {
    fn from(error: std::io::Error) -> Self {
        IndexerError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for IndexerError {
    fn from(error: serde_json::Error) -> Self {
        IndexerError::Serialization(error.to_string())
    }
}

impl Serialize for IndexerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type IndexerResult<T> = Result<T, IndexerError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
