//! Router assembly: JSON API plus the static asset collaborators.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::{AppState, AssetDirs};

/// Build the full application router.
///
/// `/api/*` is handled by [`routes::api_router`], notation files are served
/// under `/musicxml`, and everything else falls through to the public dir
/// (so `/` resolves to `index.html`).
pub fn build_app(state: AppState, dirs: &AssetDirs) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", routes::api_router())
        .nest_service("/musicxml", ServeDir::new(&dirs.musicxml_dir))
        .fallback_service(
            ServeDir::new(&dirs.public_dir).append_index_html_on_directories(true),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::net::SocketAddr;

    use sightread::io::catalog::load_catalog;
    use sightread::test_support::{write_image_files, write_notation_files};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;

    struct Fixture {
        _temp: tempfile::TempDir,
        addr: SocketAddr,
    }

    async fn serve(numbers: &[u32]) -> Fixture {
        let temp = tempfile::tempdir().expect("tempdir");
        let dirs = AssetDirs {
            public_dir: temp.path().join("public"),
            musicxml_dir: temp.path().join("musicxml"),
        };
        write_notation_files(&dirs.musicxml_dir, numbers);
        write_image_files(&dirs.images_dir(), numbers);
        fs::write(dirs.index_path(), "<html>sight reading</html>").expect("write index");

        let app = build_app(AppState::new(load_catalog(&dirs.musicxml_dir)), &dirs);
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        Fixture { _temp: temp, addr }
    }

    /// Issue a bare HTTP/1.1 GET and return (status, body).
    async fn get(addr: SocketAddr, path: &str) -> (u16, String) {
        let mut stream = TcpStream::connect(addr).await.expect("connect");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.expect("write");
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.expect("read");

        let status = raw
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .expect("status code");
        let body = raw
            .split_once("\r\n\r\n")
            .map(|(_, body)| body.to_string())
            .unwrap_or_default();
        (status, body)
    }

    #[tokio::test]
    async fn root_serves_index_page() {
        let fixture = serve(&[1]).await;
        let (status, body) = get(fixture.addr, "/").await;
        assert_eq!(status, 200);
        assert!(body.contains("sight reading"));
    }

    #[tokio::test]
    async fn notation_and_image_files_are_served() {
        let fixture = serve(&[3]).await;
        let (status, _) = get(fixture.addr, "/musicxml/exercise_3.mxl").await;
        assert_eq!(status, 200);
        let (status, _) = get(fixture.addr, "/images/exercise_3.png").await;
        assert_eq!(status, 200);
        let (status, _) = get(fixture.addr, "/musicxml/exercise_4.mxl").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn api_piece_lookup_over_http() {
        let fixture = serve(&[1, 2, 5, 8]).await;

        let (status, body) = get(fixture.addr, "/api/piece/5").await;
        assert_eq!(status, 200);
        assert!(body.contains("\"pieceNumber\":5"));

        let (status, body) = get(fixture.addr, "/api/piece/not-a-number").await;
        assert_eq!(status, 404);
        assert!(body.contains("\"availableExercises\":[1,2,5,8]"));
    }

    #[tokio::test]
    async fn api_available_over_http() {
        let fixture = serve(&[3, 1, 2]).await;
        let (status, body) = get(fixture.addr, "/api/available").await;
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"exercises":[1,2,3],"count":3,"range":"1 - 3"}"#);
    }
}
