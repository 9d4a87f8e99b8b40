//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Emit one quiet access line per request
//!
//! # Design Decisions
//! - All log output goes to stderr so the stdout banner stays clean
//! - Access lines are a single terse field (`status method path`), not the
//!   verbose default access-log format; nothing is persisted
//! - Level configurable via config and RUST_LOG

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("stillness_serve={log_level}"))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Middleware emitting one quiet access line per request.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!("{} {} {}", response.status().as_u16(), method, path);
    response
}
