//! Certificate generation capability.
//!
//! # Responsibilities
//! - Define the [`CertificateGenerator`] trait the provisioner depends on
//! - Provide the production implementation shelling out to `openssl`
//!
//! # Design Decisions
//! - The provisioner holds the trait, not the tool: swapping in a native
//!   crypto implementation requires no provisioner changes
//! - The external tool runs non-interactively and its stderr is captured
//!   into the error on failure

use std::path::PathBuf;
use std::process::Command;

use crate::cert::request::CertRequest;
use crate::cert::CertError;
use crate::config::ServeConfig;

/// Filesystem locations of the certificate material.
#[derive(Debug, Clone)]
pub struct CertPaths {
    /// Directory holding all certificate files.
    pub dir: PathBuf,
    /// PEM certificate.
    pub cert: PathBuf,
    /// PEM private key (unencrypted).
    pub key: PathBuf,
    /// Rendered OpenSSL request config.
    pub config: PathBuf,
}

impl CertPaths {
    /// Derive the certificate paths from the server configuration.
    pub fn from_config(config: &ServeConfig) -> Self {
        Self {
            dir: config.cert_dir(),
            cert: config.cert_file(),
            key: config.key_file(),
            config: config.openssl_config_file(),
        }
    }
}

/// Capability to produce a certificate/key pair from a request.
///
/// Implementations read the rendered request config at `paths.config` and
/// write the certificate to `paths.cert` and the private key to
/// `paths.key`.
pub trait CertificateGenerator {
    fn generate(&self, request: &CertRequest, paths: &CertPaths) -> Result<(), CertError>;
}

/// Production generator: invokes the `openssl` binary found on `PATH`.
#[derive(Debug, Clone)]
pub struct OpensslCommand {
    program: String,
}

impl OpensslCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OpensslCommand {
    fn default() -> Self {
        Self::new("openssl")
    }
}

impl CertificateGenerator for OpensslCommand {
    fn generate(&self, request: &CertRequest, paths: &CertPaths) -> Result<(), CertError> {
        let output = Command::new(&self.program)
            .arg("req")
            .arg("-x509")
            .arg("-newkey")
            .arg(format!("rsa:{}", request.rsa_bits))
            .arg("-keyout")
            .arg(&paths.key)
            .arg("-out")
            .arg(&paths.cert)
            .arg("-days")
            .arg(request.days.to_string())
            .arg("-nodes")
            .arg("-config")
            .arg(&paths.config)
            .output()
            .map_err(|source| CertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CertError::Generation {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::lan::HostAddr;

    #[test]
    fn missing_tool_surfaces_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CertPaths {
            dir: dir.path().to_path_buf(),
            cert: dir.path().join("cert.pem"),
            key: dir.path().join("key.pem"),
            config: dir.path().join("openssl.cnf"),
        };
        let request = CertRequest::new(HostAddr::Dns("localhost".to_string()));

        let generator = OpensslCommand::new("definitely-not-a-real-binary");
        let err = generator.generate(&request, &paths).unwrap_err();
        assert!(matches!(err, CertError::Spawn { .. }));
    }
}
