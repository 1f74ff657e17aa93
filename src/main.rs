//! marker — find and remove images that no Markdown document references.
//!
//! Thin binary entry point. All indexing and resolution logic lives in
//! the `marker-core` crate.

mod cli;

use anyhow::Context as _;
use clap::Parser as _;
use cli::{Cli, Command, OutputFormat};
use marker_core::removal::remove_images;
use marker_core::{build_tree, get_useless_images, Config, DiskSource};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Machine-readable result of one `remove` run.
#[derive(Debug, Serialize)]
struct Report<'a> {
    root: &'a Path,
    images: &'a [String],
    removed: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    match cli.command {
        Command::Remove { yes, format } => {
            run_remove(&cli.root, cli.config.as_deref(), yes, format)
        }
    }
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn load_config(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => Config::from_path(path)?,
        None => Config::load(root)?,
    };
    Ok(config)
}

fn run_remove(
    root: &Path,
    config_path: Option<&Path>,
    yes: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let config = load_config(root, config_path).context("load config")?;

    let mut tree = build_tree(root, config.skip_predicate()).context("build tree")?;
    let images = get_useless_images(&mut tree, &DiskSource::new(root), &config.image_types())
        .context("get useless images")?;

    let text = format == OutputFormat::Text;
    if text && images.is_empty() {
        println!("Well done, your images are all used.");
        return Ok(());
    }

    if !yes {
        if text {
            println!("These images are useless, you can remove them with --yes flag.");
            for image in &images {
                println!("{image}");
            }
        } else {
            print_json(root, &images, false)?;
        }
        return Ok(());
    }

    let removed = remove_images(root, &images, |path| {
        if text {
            println!("[removed] {}", path.display());
        }
    })
    .context("remove useless images")?;
    debug!("Removed {removed} images");

    if !text {
        print_json(root, &images, true)?;
    }
    Ok(())
}

fn print_json(root: &Path, images: &[String], removed: bool) -> anyhow::Result<()> {
    let report = Report {
        root,
        images,
        removed,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
