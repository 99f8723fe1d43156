//! rustpubmed - PubMed Non-Academic Author Finder
//!
//! Queries PubMed for articles matching a search term, flags authors whose
//! affiliation looks non-academic, and writes the results to stdout or CSV.
//!
//! ## Usage
//!
//! ```bash
//! rustpubmed "crispr gene therapy"
//! rustpubmed "crispr gene therapy" --file results.csv --debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rustpubmed::eutils::{ClientConfig, PubmedClient};
use rustpubmed::{record, sink};
use std::path::PathBuf;
use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// PubMed Non-Academic Author Finder
#[derive(Parser)]
#[command(name = "rustpubmed")]
#[command(version, about, long_about = None)]
struct Cli {
    /// PubMed search query
    query: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Output CSV filename (prints to console if omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging verbosity is fixed at startup from the CLI flag
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        error!(error = %e, "An error occurred");
        std::process::exit(1);
    }
}

/// Run the full pipeline: resolve IDs, fetch summaries, assemble, emit.
async fn run(cli: Cli) -> Result<()> {
    let client = PubmedClient::new(ClientConfig::default())
        .context("Failed to create PubMed client")?;

    info!(query = %cli.query, "Fetching PubMed IDs");
    let ids = client
        .search(&cli.query)
        .await
        .context("PubMed search failed")?;

    if ids.is_empty() {
        warn!("No papers found.");
        return Ok(());
    }

    info!("Fetching paper details");
    let summaries = client
        .summaries(&ids)
        .await
        .context("PubMed summary fetch failed")?;

    let records = record::assemble_all(&ids, summaries);

    match cli.file {
        Some(path) => {
            info!(path = %path.display(), "Saving results");
            sink::write_csv(&path, &records)
                .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
        }
        None => {
            sink::print_records(&records).context("Failed to print records")?;
        }
    }

    Ok(())
}
