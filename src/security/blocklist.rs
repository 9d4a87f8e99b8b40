//! Sensitive path blocklist.
//!
//! # Responsibilities
//! - Reject requests whose path touches server internals (source files,
//!   certificate material, VCS metadata, build tooling)
//!
//! # Design Decisions
//! - Substring match on the raw, undecoded request path, evaluated before
//!   any file access
//! - Defense-in-depth on top of root-confined file resolution, never the
//!   sole traversal guard

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Path fragments that must never be served.
pub const BLOCKED_PATH_FRAGMENTS: [&str; 4] = [".py", ".certs", ".git", "generate_icons"];

/// Whether a raw request path touches a blocked fragment.
pub fn is_blocked(path: &str) -> bool {
    BLOCKED_PATH_FRAGMENTS
        .iter()
        .any(|fragment| path.contains(fragment))
}

/// Middleware rejecting blocked paths with 403 before any file access.
pub async fn enforce_blocklist(request: Request, next: Next) -> Response {
    // The raw path, before percent-decoding.
    let path = request.uri().path();
    if is_blocked(path) {
        warn!(path, "blocked request");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }
    next.run(request).await
}
