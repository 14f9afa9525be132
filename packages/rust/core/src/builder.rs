//! End-to-end corpus build: catalog → fetch → parse → persist → manifest.
//!
//! Books are processed one at a time in catalog order. A book that fails to
//! fetch or parse is recorded and skipped; it never stops the run. The run as
//! a whole only reports failure at the end, through [`BuildReport`].

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};
use url::Url;

use morphcorpus_fetcher::{Fetcher, source_url};
use morphcorpus_shared::{BookDescriptor, CorpusError, ManifestEntry, Result};

use crate::store::DocumentStore;

/// Configuration for a build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Base URL each book's source filename is joined onto.
    pub base_url: Url,
    /// Rebuild every book even when its document already exists.
    pub force: bool,
}

/// What happened to a book that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOutcome {
    /// Fetched, parsed, and persisted in this run.
    Built { chapters: usize, tokens: usize },
    /// Already persisted; chapter count read back from the existing document.
    Skipped { chapters: usize },
}

impl BookOutcome {
    pub fn chapters(&self) -> usize {
        match self {
            Self::Built { chapters, .. } | Self::Skipped { chapters } => *chapters,
        }
    }
}

/// A book that could not be built.
#[derive(Debug, Clone)]
pub struct BookFailure {
    pub code: String,
    pub name: String,
    pub message: String,
}

/// Result of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// One entry per built or skipped book, in catalog order.
    pub manifest: Vec<ManifestEntry>,
    /// Books fetched and persisted in this run.
    pub built: usize,
    /// Books reused from a previous run.
    pub skipped: usize,
    /// Books that failed, in catalog order.
    pub failures: Vec<BookFailure>,
    /// Whether the manifest was persisted (only when at least one book succeeded).
    pub manifest_written: bool,
    /// Total elapsed time.
    pub elapsed: Duration,
}

impl BuildReport {
    /// Books that ended up in the manifest.
    pub fn succeeded(&self) -> usize {
        self.manifest.len()
    }

    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// A run succeeds only when no book failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Progress callback for reporting build status.
pub trait ProgressReporter: Send + Sync {
    /// Called before a book is checked.
    fn book_started(&self, book: &BookDescriptor, current: usize, total: usize);
    /// Called when a book was built or skipped.
    fn book_finished(&self, book: &BookDescriptor, outcome: &BookOutcome);
    /// Called when a book failed.
    fn book_failed(&self, book: &BookDescriptor, error: &CorpusError);
    /// Called once the manifest step is over.
    fn done(&self, report: &BuildReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn book_started(&self, _book: &BookDescriptor, _current: usize, _total: usize) {}
    fn book_finished(&self, _book: &BookDescriptor, _outcome: &BookOutcome) {}
    fn book_failed(&self, _book: &BookDescriptor, _error: &CorpusError) {}
    fn done(&self, _report: &BuildReport) {}
}

/// Run the full build over `books`.
///
/// 1. Per book: skip if persisted (unless forced), else fetch, parse, persist
/// 2. Collect a manifest entry for every book that succeeded or was skipped
/// 3. Persist the manifest if it is non-empty
///
/// Per-book errors end up in [`BuildReport::failures`]. The returned `Err` is
/// reserved for the manifest write itself.
#[instrument(skip_all, fields(books = books.len(), force = config.force))]
pub async fn build_corpus<F, S>(
    config: &BuildConfig,
    books: &[BookDescriptor],
    fetcher: &F,
    store: &S,
    progress: &dyn ProgressReporter,
) -> Result<BuildReport>
where
    F: Fetcher,
    S: DocumentStore,
{
    let start = Instant::now();
    let mut report = BuildReport::default();
    let total = books.len();

    info!(base_url = %config.base_url, "starting corpus build");

    for (i, book) in books.iter().enumerate() {
        progress.book_started(book, i + 1, total);

        match process_book(config, book, fetcher, store).await {
            Ok(outcome) => {
                match outcome {
                    BookOutcome::Built { .. } => report.built += 1,
                    BookOutcome::Skipped { .. } => report.skipped += 1,
                }
                report.manifest.push(ManifestEntry {
                    code: book.code.to_string(),
                    name: book.name.to_string(),
                    chapter_count: outcome.chapters(),
                });
                progress.book_finished(book, &outcome);
            }
            Err(e) => {
                warn!(code = book.code, book = book.name, error = %e, "book failed");
                progress.book_failed(book, &e);
                report.failures.push(BookFailure {
                    code: book.code.to_string(),
                    name: book.name.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    if !report.manifest.is_empty() {
        store.save_manifest(&report.manifest)?;
        report.manifest_written = true;
        info!(books = report.manifest.len(), "manifest written");
    } else {
        warn!("no book succeeded, manifest not written");
    }

    report.elapsed = start.elapsed();
    progress.done(&report);

    info!(
        built = report.built,
        skipped = report.skipped,
        errors = report.error_count(),
        elapsed_ms = report.elapsed.as_millis(),
        "corpus build complete"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Per-book pipeline
// ---------------------------------------------------------------------------

/// Skip check, then fetch → parse → persist for a single book.
#[instrument(skip_all, fields(code = book.code))]
async fn process_book<F, S>(
    config: &BuildConfig,
    book: &BookDescriptor,
    fetcher: &F,
    store: &S,
) -> Result<BookOutcome>
where
    F: Fetcher,
    S: DocumentStore,
{
    if !config.force {
        if let Some(chapters) = existing_chapter_count(store, book) {
            info!(chapters, "document exists, skipping");
            return Ok(BookOutcome::Skipped { chapters });
        }
    }

    let url = source_url(&config.base_url, book)?;
    let raw = fetcher.fetch(&url).await?;

    let text = morphcorpus_parser::parse_book(&raw).map_err(|e| match e {
        CorpusError::Parse { message } => CorpusError::parse(format!("{}: {message}", book.source)),
        other => other,
    })?;

    store.save_book(book.code, &text)?;

    info!(
        chapters = text.chapter_count(),
        verses = text.verse_count(),
        tokens = text.token_count(),
        "book built"
    );

    Ok(BookOutcome::Built {
        chapters: text.chapter_count(),
        tokens: text.token_count(),
    })
}

/// Chapter count of an already persisted document, if one exists and reads
/// back cleanly. An unreadable document is rebuilt rather than trusted.
fn existing_chapter_count<S: DocumentStore>(store: &S, book: &BookDescriptor) -> Option<usize> {
    if !store.exists(book.code) {
        return None;
    }

    match store.load_book(book.code) {
        Ok(text) => Some(text.chapter_count()),
        Err(e) => {
            warn!(error = %e, "existing document unreadable, rebuilding");
            None
        }
    }
}
