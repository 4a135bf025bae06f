pub mod asset;
pub mod errors;

pub use asset::*;
pub use errors::{IndexerError, IndexerResult};
