//! CLI definition, tracing setup, and the build command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use morphcorpus_core::{
    BookOutcome, BuildConfig, BuildReport, DirStore, ProgressReporter, build_corpus,
};
use morphcorpus_fetcher::{FetchOptions, HttpFetcher};
use morphcorpus_shared::{AppConfig, BookDescriptor, CorpusError, LogFormat, SBLGNT_BOOKS};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Build per-book JSON documents from the MorphGNT SBLGNT corpus.
///
/// Books whose document already exists are skipped; run again after a
/// partial failure to fetch only what is missing.
#[derive(Parser, Debug)]
#[command(name = "morphcorpus", version, long_about = None)]
pub(crate) struct Cli {
    /// Re-fetch and overwrite every book, even those already built.
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing. `RUST_LOG` overrides the default filter.
pub(crate) fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("morphcorpus=info,warn"));

    match format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Build command
// ---------------------------------------------------------------------------

/// Run the build over the full catalog.
pub(crate) async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let build_config = BuildConfig {
        base_url: config.source.base_url()?,
        force: cli.force,
    };
    let output_dir = PathBuf::from(&config.output.dir);
    let store = DirStore::new(&output_dir, &config.output.manifest_file);
    let fetcher = HttpFetcher::new(&FetchOptions {
        timeout_secs: config.source.timeout_secs,
    })?;

    info!(
        output = %output_dir.display(),
        force = cli.force,
        books = SBLGNT_BOOKS.len(),
        "building corpus"
    );

    let reporter = CliProgress::new(SBLGNT_BOOKS.len());
    let report = build_corpus(&build_config, SBLGNT_BOOKS, &fetcher, &store, &reporter).await?;

    print_summary(&report, &store);

    if report.is_success() {
        Ok(())
    } else {
        Err(eyre!(
            "{} of {} books failed; re-run to retry the missing ones",
            report.error_count(),
            SBLGNT_BOOKS.len()
        ))
    }
}

fn print_summary(report: &BuildReport, store: &DirStore) {
    println!();
    println!("  Built:    {}", report.built);
    println!("  Skipped:  {}", report.skipped);
    println!("  Failed:   {}", report.error_count());
    if report.manifest_written {
        println!(
            "  Manifest: {} ({} books)",
            store.manifest_path().display(),
            report.succeeded()
        );
    } else {
        println!("  Manifest: not written");
    }
    println!("  Time:     {:.1}s", report.elapsed.as_secs_f64());

    for failure in &report.failures {
        println!("  ✗ {} ({}): {}", failure.name, failure.code, failure.message);
    }
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Progress bar over the catalog using indicatif.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(style);
        Self { bar }
    }
}

impl ProgressReporter for CliProgress {
    fn book_started(&self, book: &BookDescriptor, _current: usize, _total: usize) {
        self.bar.set_message(book.name.to_string());
    }

    fn book_finished(&self, book: &BookDescriptor, outcome: &BookOutcome) {
        let verb = match outcome {
            BookOutcome::Built { .. } => "built",
            BookOutcome::Skipped { .. } => "skipped",
        };
        self.bar
            .set_message(format!("{} {verb} ({} chapters)", book.name, outcome.chapters()));
        self.bar.inc(1);
    }

    fn book_failed(&self, book: &BookDescriptor, error: &CorpusError) {
        self.bar.println(format!("  ✗ {}: {error}", book.name));
        self.bar.inc(1);
    }

    fn done(&self, _report: &BuildReport) {
        self.bar.finish_and_clear();
    }
}
