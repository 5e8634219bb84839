//! Command-line access to the exercise catalog.
//!
//! Scans a notation directory (`exercise_<N>.mxl` files) and prints what the
//! server would serve: the full catalog, today's exercise, or a consistency
//! check against the rendered images.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use sightread::core::selector;
use sightread::core::types::Piece;
use sightread::exit_codes;
use sightread::io::catalog::{missing_images, read_catalog};
use sightread::logging;

#[derive(Parser)]
#[command(
    name = "sightread",
    version,
    about = "Inspect the daily sight-reading exercise catalog"
)]
struct Cli {
    /// Directory containing `exercise_<N>.mxl` notation files.
    #[arg(long, global = true, env = "MUSICXML_DIR", default_value = "musicxml")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog as JSON (`exercises`, `count`, `range`).
    List,
    /// Print today's exercise as JSON.
    Today,
    /// Report catalog entries that have no `exercise_<N>.png` image.
    Check {
        /// Directory containing rendered `exercise_<N>.png` images.
        #[arg(long, default_value = "public/images")]
        images: PathBuf,
    },
}

#[derive(Serialize)]
struct ListOutput<'a> {
    exercises: &'a [u32],
    count: usize,
    range: Option<(u32, u32)>,
}

fn main() {
    logging::init("warn");
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::List => cmd_list(&cli.dir),
        Command::Today => cmd_today(&cli.dir),
        Command::Check { images } => cmd_check(&cli.dir, &images),
    }
}

fn cmd_list(dir: &Path) -> Result<i32> {
    let catalog = read_catalog(dir)?;
    let output = ListOutput {
        exercises: catalog.as_slice(),
        count: catalog.len(),
        range: catalog.range(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(exit_codes::OK)
}

fn cmd_today(dir: &Path) -> Result<i32> {
    let catalog = read_catalog(dir)?;
    let date = Local::now().date_naive();
    let piece = Piece::describe(&catalog, selector::for_date(&catalog, date), date);
    println!("{}", serde_json::to_string_pretty(&piece)?);
    Ok(exit_codes::OK)
}

fn cmd_check(dir: &Path, images: &Path) -> Result<i32> {
    let catalog = read_catalog(dir)?;
    if catalog.is_empty() {
        bail!("no exercise_<N>.mxl files found in {}", dir.display());
    }

    let missing = missing_images(&catalog, images);
    if missing.is_empty() {
        info!(count = catalog.len(), "all exercises have images");
        println!("ok: {} exercises", catalog.len());
        return Ok(exit_codes::OK);
    }

    for n in &missing {
        println!("missing image for exercise {n}");
    }
    Ok(exit_codes::MISSING_IMAGES)
}
