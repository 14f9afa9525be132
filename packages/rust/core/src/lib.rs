//! Build orchestration and persistence for the MorphGNT corpus.
//!
//! This crate ties the catalog, fetcher, and parser together into a single
//! resumable build (`build_corpus`) writing through a [`store::DocumentStore`].

pub mod builder;
pub mod store;

pub use builder::{
    BookFailure, BookOutcome, BuildConfig, BuildReport, ProgressReporter, SilentProgress,
    build_corpus,
};
pub use store::{DirStore, DocumentStore};
