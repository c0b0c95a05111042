//! Campus CLI Application
//!
//! Command-line interface for managing university activities.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use campus_core::{params::ListActivities, CatalogBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let mut builder = CatalogBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let catalog = builder
        .build()
        .await
        .context("Failed to initialize activity catalog")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Campus started with {}", catalog.database_path().display());

    let cli = Cli::new(catalog, renderer);
    match command {
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        None => cli.list_activities(&ListActivities::default(), false).await,
    }
}
