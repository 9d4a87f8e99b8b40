//! Local HTTPS static file server library.

pub mod cert;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod security;

pub use config::ServeConfig;
pub use http::HttpServer;
