//! Shared types, error model, configuration, and the book catalog for the
//! MorphGNT corpus builder.
//!
//! This crate is the foundation depended on by all other morphcorpus crates.
//! It provides:
//! - [`CorpusError`] — the unified error type
//! - Domain types ([`Token`], [`BookText`], [`ManifestEntry`])
//! - The static book catalog ([`BookDescriptor`], [`SBLGNT_BOOKS`])
//! - Configuration ([`AppConfig`], config loading)

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use catalog::{BookDescriptor, SBLGNT_BOOKS, find_book};
pub use config::{
    AppConfig, LogFormat, LoggingConfig, OutputConfig, SourceConfig, config_dir,
    config_file_path, load_config, load_config_from,
};
pub use error::{CorpusError, Result};
pub use types::{BookText, ManifestEntry, Token, VerseMap};
