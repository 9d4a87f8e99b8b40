//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Resolve config → Provision certificate → Load TLS → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight → Exit 0
//! ```
//!
//! # Design Decisions
//! - Ordered startup: the listener binds last, after TLS material is ready
//! - Fail fast: any startup error is fatal
//! - Shutdown drain is bounded; the process never hangs on a stuck client

pub mod shutdown;
