//! Retrieval of raw MorphGNT source documents.
//!
//! The [`Fetcher`] trait is the I/O boundary of the build: given a location,
//! return the document text or a transfer error. [`HttpFetcher`] is the
//! production implementation on top of `reqwest`. Fetchers never retry;
//! a failed book is reported and picked up again on the next run.

use std::future::Future;
use std::time::Duration;

use morphcorpus_shared::{BookDescriptor, CorpusError, Result};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest document accepted (32 MB). The biggest SBLGNT book is under 2 MB.
const MAX_RESPONSE_SIZE: u64 = 32 * 1024 * 1024;

/// User-Agent string for source requests.
const USER_AGENT: &str = concat!("morphcorpus/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Fetcher trait
// ---------------------------------------------------------------------------

/// Source of raw document text.
pub trait Fetcher {
    /// Retrieve the full text at `url`.
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}

/// Compose the location of a book's source file under `base`.
pub fn source_url(base: &Url, book: &BookDescriptor) -> Result<Url> {
    base.join(book.source).map_err(|e| {
        CorpusError::validation(format!("cannot join '{}' onto {base}: {e}", book.source))
    })
}

// ---------------------------------------------------------------------------
// HTTP fetcher
// ---------------------------------------------------------------------------

/// Configuration for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Timeout for each request in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Fetches documents over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with a configured `reqwest` client.
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| CorpusError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| CorpusError::transfer(url.as_str(), None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorpusError::transfer(
                url.as_str(),
                Some(status.as_u16()),
                status
                    .canonical_reason()
                    .unwrap_or("unsuccessful response")
                    .to_string(),
            ));
        }

        // Check content-length if available
        if let Some(len) = response.content_length() {
            if len > MAX_RESPONSE_SIZE {
                return Err(CorpusError::validation(format!(
                    "{url}: response too large ({len} bytes, max {MAX_RESPONSE_SIZE})"
                )));
            }
        }

        let body = response.text().await.map_err(|e| {
            CorpusError::transfer(
                url.as_str(),
                Some(status.as_u16()),
                format!("failed to read body: {e}"),
            )
        })?;

        debug!(bytes = body.len(), "fetched source document");
        Ok(body)
    }
}
