//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     lan.rs (detect LAN-visible address, fallback "localhost")
//!         → certificate SAN list + banner URLs
//!     tls.rs (load PEM cert/key, build rustls config, TLS 1.2 floor)
//!         → axum-server listener
//! ```
//!
//! # Design Decisions
//! - LAN detection never fails the process; it degrades to `localhost`
//! - TLS setup failure is fatal: a misconfigured server must not silently
//!   serve plain HTTP or broken TLS

pub mod lan;
pub mod tls;

pub use lan::HostAddr;
pub use tls::TlsError;
