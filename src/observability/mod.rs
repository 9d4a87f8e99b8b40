//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, stderr)
//!
//! Per request:
//!     → logging.rs access middleware (one quiet line: status method path)
//! ```
//!
//! # Design Decisions
//! - stderr only; stdout is reserved for the operator banner
//! - No access-log persistence; this is a development tool

pub mod logging;

pub use logging::access_log;
