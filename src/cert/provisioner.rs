//! Certificate provisioning.
//!
//! Guarantees a usable TLS certificate and private key are present on disk
//! before the server binds. An existing pair is reused as-is; otherwise the
//! request config is rendered and the generator invoked.

use std::fs;

use tracing::debug;

use crate::cert::generator::{CertPaths, CertificateGenerator};
use crate::cert::request::CertRequest;
use crate::cert::CertError;
use crate::net::lan::HostAddr;

/// Outcome of a provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    /// A new certificate/key pair was generated.
    Generated,
    /// An existing pair was found and reused untouched.
    Reused,
}

/// Ensures certificate material exists before the server starts.
pub struct Provisioner {
    paths: CertPaths,
    request: CertRequest,
}

impl Provisioner {
    /// Build a provisioner for the given paths and LAN identifier.
    ///
    /// The LAN identifier is captured here, at startup; it ends up in the
    /// certificate's SAN list only when a new pair is generated.
    pub fn new(paths: CertPaths, lan: HostAddr) -> Self {
        Self {
            paths,
            request: CertRequest::new(lan),
        }
    }

    /// The certificate paths this provisioner manages.
    pub fn paths(&self) -> &CertPaths {
        &self.paths
    }

    /// Ensure a certificate/key pair exists, generating one if needed.
    ///
    /// Existing files are reused without expiry or key-match validation;
    /// the second run after a successful generation is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if the certificate directory or request config cannot be
    /// written, or if the generator reports failure. There is no retry.
    pub fn ensure(&self, generator: &dyn CertificateGenerator) -> Result<Provisioned, CertError> {
        if self.paths.cert.exists() && self.paths.key.exists() {
            println!("Using existing certificate.");
            debug!(cert = %self.paths.cert.display(), "reusing certificate pair");
            return Ok(Provisioned::Reused);
        }

        println!("Generating self-signed certificate for local HTTPS...");

        fs::create_dir_all(&self.paths.dir).map_err(|source| CertError::CreateDir {
            path: self.paths.dir.clone(),
            source,
        })?;

        let rendered = self.request.render_openssl_config();
        fs::write(&self.paths.config, rendered).map_err(|source| {
            CertError::WriteRequestConfig {
                path: self.paths.config.clone(),
                source,
            }
        })?;

        generator.generate(&self.request, &self.paths)?;

        println!("Certificate generated.");
        debug!(
            cert = %self.paths.cert.display(),
            key = %self.paths.key.display(),
            "certificate pair generated"
        );
        Ok(Provisioned::Generated)
    }
}
