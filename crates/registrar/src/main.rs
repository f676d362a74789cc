//! Registrar inspection tool.
//!
//! Resolves a content type configuration file and prints the argument bags
//! that would be handed to the host, without registering anything.
//!
//! Usage:
//!   registrar content-types.yml --type movie_review

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use content_registrar::{Registrar, inspect, load_config_file};

/// Print resolved content type and taxonomy arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (.yml, .yaml, .toml or .json).
    config: PathBuf,

    /// Only print this content type.
    #[arg(long = "type")]
    type_key: Option<String>,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let file = load_config_file(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let registrar =
        Registrar::from_value(&file.types, file.settings).context("invalid configuration")?;
    info!(types = registrar.len(), "configuration resolved");

    let rendered = inspect::render(&registrar, args.type_key.as_deref(), args.compact)
        .context("failed to render resolved configuration")?;
    println!("{rendered}");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
