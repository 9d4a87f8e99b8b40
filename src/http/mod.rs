//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TLS connection
//!     → server.rs (Axum setup, middleware stack)
//!     → security layers (blocklist, response headers)
//!     → static_files.rs (root-confined resolution, streaming bodies)
//!     → Send to client
//! ```

pub mod server;
pub mod static_files;

pub use server::{build_router, AppState, HttpServer};
