//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (merge optional TOML file)
//!     → loader.rs (apply CLI overrides)
//!     → validation.rs (semantic checks)
//!     → ServeConfig (validated, immutable)
//!     → passed to provisioner and server at startup
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value built once at startup, never ambient
//!   global state
//! - All fields have defaults so the server runs with zero arguments
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{FileConfig, Overrides, ServeConfig};
