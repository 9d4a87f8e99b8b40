//! Integration tests for the secure static server.
//!
//! Requests are driven through the full middleware stack with `oneshot`;
//! no socket is bound and no TLS handshake is involved.

mod common;

use axum::http::{Method, StatusCode};

use stillness_serve::security::SECURITY_HEADERS;

use common::{body_string, get, router_for, send, site_root};

#[tokio::test]
async fn serves_index_with_inferred_content_type() {
    let root = site_root();
    let router = router_for(root.path());

    let response = get(&router, "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("Stillness"));
}

#[tokio::test]
async fn root_path_resolves_to_index_file() {
    let root = site_root();
    let router = router_for(root.path());

    let response = get(&router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Stillness"));
}

#[tokio::test]
async fn content_types_follow_extensions() {
    let root = site_root();
    let router = router_for(root.path());

    let cases = [
        ("/app.js", "javascript"),
        ("/style.css", "text/css"),
        ("/icons/icon-192.png", "image/png"),
    ];
    for (path, expected) in cases {
        let response = get(&router, path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(
            content_type.contains(expected),
            "{path}: unexpected content type {content_type}"
        );
    }
}

#[tokio::test]
async fn blocked_path_is_forbidden_even_without_file() {
    let root = site_root();
    let router = router_for(root.path());

    // No app.py exists on disk; the blocklist fires regardless.
    let response = get(&router, "/app.py").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn blocked_path_with_existing_file_is_forbidden() {
    let root = site_root();
    std::fs::write(root.path().join("serve.py"), "print('secret')").unwrap();
    let router = router_for(root.path());

    let response = get(&router, "/serve.py").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_string(response).await;
    assert!(!body.contains("secret"));
}

#[tokio::test]
async fn certificate_material_is_never_served() {
    let root = site_root();
    let certs = root.path().join(".certs");
    std::fs::create_dir(&certs).unwrap();
    std::fs::write(certs.join("key.pem"), "PRIVATE KEY").unwrap();
    let router = router_for(root.path());

    for path in ["/.certs/key.pem", "/.certs/", "/.git/config", "/generate_icons.sh"] {
        let response = get(&router, path).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{path}");
    }
}

#[tokio::test]
async fn security_headers_present_on_every_outcome() {
    let root = site_root();
    let router = router_for(root.path());

    // Served, blocked, and missing all carry the full header set.
    let outcomes = [
        ("/index.html", StatusCode::OK),
        ("/app.py", StatusCode::FORBIDDEN),
        ("/missing.html", StatusCode::NOT_FOUND),
    ];
    for (path, expected_status) in outcomes {
        let response = get(&router, path).await;
        assert_eq!(response.status(), expected_status, "{path}");
        for (name, value) in SECURITY_HEADERS {
            assert_eq!(
                response
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("{path}: missing header {name}"))
                    .to_str()
                    .unwrap(),
                value,
                "{path}: wrong value for {name}"
            );
        }
    }
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let root = site_root();
    let router = router_for(root.path());

    let response = get(&router, "/no-such-file.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn traversal_attempts_never_escape_the_root() {
    let root = site_root();
    let router = router_for(root.path());

    for path in [
        "/../Cargo.toml",
        "/../../etc/passwd",
        "/notes/../../outside.txt",
        "/%2e%2e/Cargo.toml",
    ] {
        let response = get(&router, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn directory_without_index_renders_listing() {
    let root = site_root();
    let router = router_for(root.path());

    let response = get(&router, "/notes/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("readme.txt"));
}

#[tokio::test]
async fn head_gets_headers_without_body() {
    let root = site_root();
    let router = router_for(root.path());

    let response = send(&router, Method::HEAD, "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("content-length"));

    let body = body_string(response).await;
    assert!(body.is_empty());
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let root = site_root();
    let router = router_for(root.path());

    let response = send(&router, Method::POST, "/index.html").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    // Rejections still carry the security header set.
    assert_eq!(
        response.headers().get("x-frame-options").unwrap(),
        "DENY"
    );
}
