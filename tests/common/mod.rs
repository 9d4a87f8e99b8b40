//! Shared utilities for integration tests.

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use stillness_serve::config::ServeConfig;
use stillness_serve::http::build_router;

/// Build a scratch site root with a typical PWA layout.
pub fn site_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><title>Stillness</title>",
    )
    .unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('breathe');").unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0 }").unwrap();
    std::fs::create_dir(dir.path().join("icons")).unwrap();
    std::fs::write(dir.path().join("icons/icon-192.png"), b"\x89PNG\r\n\x1a\n").unwrap();
    std::fs::create_dir(dir.path().join("notes")).unwrap();
    std::fs::write(dir.path().join("notes/readme.txt"), "hello").unwrap();
    dir
}

/// Router serving the given root with the full middleware stack.
pub fn router_for(root: &Path) -> Router {
    let config = ServeConfig {
        root: root.to_path_buf(),
        ..ServeConfig::default()
    };
    build_router(&config)
}

/// Drive one request through the router without binding a socket.
pub async fn send(router: &Router, method: Method, path: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Shorthand for a GET request.
pub async fn get(router: &Router, path: &str) -> Response {
    send(router, Method::GET, path).await
}

/// Collect a response body into a string.
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
