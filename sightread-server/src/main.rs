//! Sight-reading exercise server - daily exercise selection over HTTP.

mod app;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sightread::io::catalog::{load_catalog, missing_images};
use tracing::{info, warn};

use crate::state::{AppState, AssetDirs};

#[derive(Parser)]
#[command(name = "sightread-server")]
#[command(about = "Serve the daily sight-reading exercise and its assets")]
struct Args {
    /// Address to bind the server to
    #[arg(long, env = "BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Public asset directory (index.html, scripts, stylesheets, images/)
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Directory of exercise_<N>.mxl notation files, served under /musicxml
    #[arg(long, env = "MUSICXML_DIR", default_value = "musicxml")]
    musicxml_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sightread_server=info".parse()?)
                .add_directive("sightread=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let dirs = AssetDirs {
        public_dir: args.public_dir,
        musicxml_dir: args.musicxml_dir,
    };

    let catalog = load_catalog(&dirs.musicxml_dir);
    match catalog.range() {
        Some((min, max)) => {
            info!(count = catalog.len(), min, max, "exercise catalog ready");
        }
        None => warn!(
            musicxml_dir = %dirs.musicxml_dir.display(),
            "no exercises found, serving fallback exercise 1"
        ),
    }

    let missing = missing_images(&catalog, &dirs.images_dir());
    if !missing.is_empty() {
        warn!(count = missing.len(), first = missing[0], "exercises without rendered images");
    }

    if !dirs.index_path().exists() {
        warn!(public_dir = %dirs.public_dir.display(), "index.html not found in public directory");
    }

    let app = app::build_app(AppState::new(catalog), &dirs);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", args.bind, args.port))?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
