//! morphcorpus — builds per-book JSON documents from the MorphGNT SBLGNT
//! morphological corpus, plus a manifest of the books built.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = morphcorpus_shared::load_config()?;
    commands::init_tracing(config.logging.format);
    commands::run(cli, &config).await
}
