//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → blocklist.rs (reject sensitive paths with 403)
//!     → static file resolution (root-confined)
//!
//! Outgoing response:
//!     → headers.rs (fixed security header set on every response)
//! ```
//!
//! # Design Decisions
//! - Defense in depth: the blocklist layers on top of root-confined
//!   resolution; neither is the sole guard
//! - Fail closed: a blocked path never reaches the filesystem
//! - No trust in client input

pub mod blocklist;
pub mod headers;

pub use blocklist::{enforce_blocklist, is_blocked, BLOCKED_PATH_FRAGMENTS};
pub use headers::{apply_security_headers, SECURITY_HEADERS};
