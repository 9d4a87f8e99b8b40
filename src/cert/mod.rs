//! Certificate provisioning subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     provisioner.rs (cert + key already on disk? → reuse)
//!         → request.rs (render OpenSSL request config with SAN list)
//!         → generator.rs (CertificateGenerator produces cert + key files)
//!         → server loads the pair via net::tls
//! ```
//!
//! # Design Decisions
//! - Provisioning runs synchronously to completion before the listener
//!   binds; generation failure is fatal with no retry
//! - The generator is a capability trait so the external `openssl`
//!   invocation can be swapped for a native implementation
//! - An existing cert/key pair is reused without expiry checking; stale
//!   certificates are cleared by deleting the cert directory

use std::path::PathBuf;

use thiserror::Error;

pub mod generator;
pub mod provisioner;
pub mod request;

pub use generator::{CertPaths, CertificateGenerator, OpensslCommand};
pub use provisioner::{Provisioned, Provisioner};
pub use request::CertRequest;

/// Error type for certificate provisioning. Any variant is fatal.
#[derive(Debug, Error)]
pub enum CertError {
    #[error("failed to create certificate directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write certificate request config {path}: {source}")]
    WriteRequestConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("certificate generation failed ({status}): {stderr}")]
    Generation { status: String, stderr: String },
}
