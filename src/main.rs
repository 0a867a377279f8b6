// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ads;
mod app;
mod cli;
mod clipboard;
mod config;
mod gate;
mod github;
mod links;
mod page;
mod platform;
mod state;
mod task;
mod timer;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "floorp_portal=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    if let Some(command) = cli.command {
        return cli::run(command, &cli.output).await;
    }

    tracing::info!("Starting Floorp portal");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration, using defaults: {}", e);
        Config::default()
    });

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 860.0])
        .with_min_inner_size([720.0, 560.0])
        .with_title(page::PAGE_TITLE);

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    eframe::run_native(
        "Floorp Portal",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::PortalApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
