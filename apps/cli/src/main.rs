use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_settings, MovieCard, MovieClient, MovieSource};
use tracing_subscriber::EnvFilter;

/// Fetch the featured movie once and print its card.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file (defaults to ./movie_card.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `debug` or `client_core=trace`.
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;

    let filter = match args.log_filter.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = MovieClient::from_settings(&settings)?;
    tracing::debug!(base_url = %client.base_url(), "fetching featured movie");
    let record = client
        .fetch_movie()
        .await
        .with_context(|| format!("failed to fetch movie {}", client.query().imdb_id))?;

    for line in MovieCard::from_record(&record).text_lines() {
        println!("{line}");
    }
    Ok(())
}
