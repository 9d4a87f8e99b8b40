//! Security response headers.
//!
//! # Responsibilities
//! - Define the fixed header set carried by every response
//! - Apply it as an Axum middleware layer
//!
//! # Design Decisions
//! - Headers are applied on the response path, so blocked (403) and
//!   missing (404) responses carry them as well as served files
//! - The CSP restricts all sources to self, with data: URIs allowed for
//!   images (app icons inlined by the service worker)
//! - Cache-Control disables caching entirely: this server exists for
//!   development, stale assets cost more than bandwidth

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// The header set applied to every response, blocked or served.
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "no-referrer"),
    (
        "permissions-policy",
        "camera=(), microphone=(), geolocation=()",
    ),
    (
        "content-security-policy",
        "default-src 'self'; script-src 'self'; style-src 'self'; img-src 'self' data:; \
         media-src 'self'; connect-src 'self'",
    ),
    ("cache-control", "no-cache, no-store, must-revalidate"),
];

/// Middleware adding the security header set to the response.
pub async fn apply_security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
