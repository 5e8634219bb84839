//! Startup scan of the notation directory into a [`Catalog`].

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, warn};

use crate::core::types::{Catalog, ExerciseNumber, image_file_name};

static NOTATION_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^exercise_(\d+)\.mxl$").unwrap());

/// Scan `dir`, degrading to an empty catalog if it cannot be read.
pub fn load_catalog(dir: &Path) -> Catalog {
    match read_catalog(dir) {
        Ok(catalog) => {
            debug!(dir = %dir.display(), count = catalog.len(), "loaded exercise catalog");
            catalog
        }
        Err(err) => {
            warn!(dir = %dir.display(), error = %format!("{err:#}"), "failed to scan exercise directory");
            Catalog::default()
        }
    }
}

/// Scan `dir` for `exercise_<N>.mxl` files and collect their numbers.
pub fn read_catalog(dir: &Path) -> Result<Catalog> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read exercise directory {}", dir.display()))?;

    let mut numbers = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str()
            && let Some(number) = parse_exercise_number(name)
        {
            numbers.push(number);
        }
    }

    Ok(Catalog::new(numbers))
}

/// Extract `N` from a file name of the form `exercise_<N>.mxl`.
///
/// Digit strings that do not fit an [`ExerciseNumber`] are rejected.
pub fn parse_exercise_number(file_name: &str) -> Option<ExerciseNumber> {
    let caps = NOTATION_FILE_RE.captures(file_name)?;
    caps[1].parse().ok()
}

/// Catalog entries with no rendered image under `images_dir`.
pub fn missing_images(catalog: &Catalog, images_dir: &Path) -> Vec<ExerciseNumber> {
    catalog
        .as_slice()
        .iter()
        .copied()
        .filter(|&n| !images_dir.join(image_file_name(n)).is_file())
        .collect()
}
