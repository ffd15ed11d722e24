// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Filmboard - a film catalog board
//!
//! A cross-platform desktop application for browsing a film catalog:
//! filter and sort films, mark them for the watchlist, as watched or as
//! favorites, and read, post or delete comments.

mod app;
mod config;
mod io;
mod models;
mod presenter;
mod ui;
mod util;
mod view;

use anyhow::Result;
use app::FilmBoardApp;
use clap::Parser;
use config::BoardConfig;
use models::Catalog;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "filmboard", version, about = "Browse and comment on a film catalog")]
struct Args {
    /// Catalog file to open (JSON or YAML)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Board configuration file (YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => io::catalog::import(path)?,
        None => Catalog::default(),
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Filmboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Filmboard",
        options,
        Box::new(move |_cc| Ok(Box::new(FilmBoardApp::new(config, catalog)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
