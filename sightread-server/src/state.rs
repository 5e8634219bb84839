//! Shared application state for the exercise server.

use std::path::PathBuf;
use std::sync::Arc;

use sightread::core::types::Catalog;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exercise catalog scanned once at startup; never mutated afterwards.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Filesystem layout served by the static handlers.
#[derive(Debug, Clone)]
pub struct AssetDirs {
    /// Root of the public site (`index.html`, scripts, stylesheets, `images/`).
    pub public_dir: PathBuf,
    /// Directory of `exercise_<N>.mxl` files, served under `/musicxml`.
    pub musicxml_dir: PathBuf,
}

impl AssetDirs {
    /// Path to the rendered score images.
    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join("images")
    }

    /// Path to the HTML entry page.
    pub fn index_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}
