pub mod archive;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod copyable;
pub mod decomposer;
pub mod metadata;
pub mod rules;
pub mod search;
