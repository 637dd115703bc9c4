use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod media;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::{load_settings, MovieClient, MovieSource};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::ViewController;
use crate::ui::MovieCardApp;

const APP_NAME: &str = "Movie Card";

#[derive(Parser, Debug)]
#[command(about = "Desktop card for the featured movie")]
struct Args {
    /// Settings file (defaults to ./movie_card.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `debug` or `desktop_gui=trace`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref()).context("failed to load settings")?;

    let filter = match args.log_filter.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let source: Arc<dyn MovieSource> = Arc::new(MovieClient::from_settings(&settings)?);
    tracing::info!(
        base_url = %settings.api_base_url,
        imdb_id = %settings.imdb_id,
        "starting movie card"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(source, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MovieCardApp::new(ViewController::new(
                cmd_tx, ui_rx,
            ))))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
