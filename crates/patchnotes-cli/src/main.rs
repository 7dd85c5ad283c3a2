//! Patch Notes CLI
//!
//! Thin wrapper around patchnotes-core for rendering and inspecting release
//! notes from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Render the built-in notes as an HTML fragment
//! patchnotes render
//!
//! # Render a notes file with a config override into a file
//! patchnotes --notes notes.json --config config.json render --output list.html
//!
//! # Print a text summary
//! patchnotes --notes notes.json list
//!
//! # Report records that will fall back to defaults
//! patchnotes --notes notes.json check
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patchnotes_core::logging::setup_logging;
use patchnotes_core::{
    builtin_bundle, check_notes, load_bundle, load_config, DisclosureListRenderer, HtmlPage,
    PatchBundle, PatchNotesError, DEFAULT_CONTAINER_ID,
};

/// Patch Notes - render and inspect release notes
#[derive(Parser)]
#[command(name = "patchnotes")]
#[command(version = "0.1.0")]
#[command(about = "Patch Notes - render and inspect release notes")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Notes document (JSON array of records, or {"config", "notes"} bundle).
    /// Defaults to the built-in release notes.
    #[arg(short, long, global = true)]
    notes: Option<PathBuf>,

    /// Config file overriding the document's config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the notes as an HTML list fragment
    Render {
        /// Id of the container to render into
        #[arg(long, default_value = DEFAULT_CONTAINER_ID)]
        container: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a one-line summary per release with its details
    List,

    /// Check records for fields that will fall back to defaults
    Check,
}

fn load(notes: Option<&Path>, config: Option<&Path>) -> Result<PatchBundle> {
    let bundle = match notes {
        Some(path) => load_bundle(path)
            .with_context(|| format!("Failed to load notes from {}", path.display()))?,
        None => builtin_bundle(),
    };

    match config {
        Some(path) => {
            let config = load_config(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            Ok(bundle.with_config(config))
        }
        None => Ok(bundle),
    }
}

fn render(bundle: &PatchBundle, container: &str, output: Option<&Path>) -> Result<()> {
    // The page only has the standard list container.
    let mut page = HtmlPage::new(DEFAULT_CONTAINER_ID);
    let renderer = DisclosureListRenderer::new(bundle.config.clone()).with_container_id(container);
    let count = match renderer.render(&mut page, &bundle.notes) {
        Ok(count) => count,
        // The renderer has already logged it; exit without a second report.
        Err(PatchNotesError::MissingContainer(_)) => std::process::exit(1),
        Err(e) => return Err(e.into()),
    };

    let html = page.fragment();
    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Rendered {} release entries to {}", count, path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}

fn list(bundle: &PatchBundle) {
    let renderer = DisclosureListRenderer::new(bundle.config.clone());
    let items = renderer.build_items(&bundle.notes);

    if items.is_empty() {
        println!("No release notes.");
        return;
    }

    for item in items {
        println!("{}", item.head.summary());
        if item.panel.has_highlights() {
            println!("  * {}", item.panel.highlights.join(", "));
        }
        for group in &item.panel.groups {
            println!("  [{}]", group.label);
            for entry in &group.entries {
                println!("    - {}", entry);
            }
        }
    }
}

fn check(bundle: &PatchBundle) {
    let warnings = check_notes(&bundle.notes);

    println!("Records: {}", bundle.notes.len());
    if warnings.is_empty() {
        println!("No warnings.");
        return;
    }

    println!("Warnings: {}", warnings.len());
    for warning in warnings {
        println!("  {}", warning);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let bundle = load(cli.notes.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Render { container, output } => render(&bundle, &container, output.as_deref())?,
        Commands::List => list(&bundle),
        Commands::Check => check(&bundle),
    }

    Ok(())
}
