#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use patchnotes_core::logging::setup_logging;
use patchnotes_core::{builtin_bundle, load_bundle, load_config, PatchBundle};

use crate::context::PageData;

/// Patch Notes - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "patchnotes-desktop")]
#[command(about = "Patch Notes - browse release notes in a desktop window")]
struct Args {
    /// Notes document (JSON array of records, or {"config", "notes"} bundle)
    #[arg(short, long)]
    notes: Option<PathBuf>,

    /// Config file overriding the document's config
    /// (default: <config dir>/patchnotes/config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Per-user config file location
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("patchnotes").join("config.json"))
}

fn load_page_data(notes: Option<&Path>, config: Option<&Path>) -> Result<PatchBundle> {
    let bundle = match notes {
        Some(path) => load_bundle(path)
            .with_context(|| format!("Failed to load notes from {}", path.display()))?,
        None => builtin_bundle(),
    };

    let config_path = config
        .map(Path::to_path_buf)
        .or_else(|| default_config_path().filter(|p| p.exists()));

    match config_path {
        Some(path) => {
            let config = load_config(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            Ok(bundle.with_config(config))
        }
        None => Ok(bundle),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let bundle = load_page_data(args.notes.as_deref(), args.config.as_deref())?;
    tracing::info!(
        "Starting with {} release entries (locale {:?})",
        bundle.notes.len(),
        bundle.config.locale
    );

    let title = bundle.config.default_title.clone();
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(PageData::from(bundle))
        .launch(app::App);

    Ok(())
}
