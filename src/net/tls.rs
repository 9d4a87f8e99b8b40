//! TLS configuration and certificate loading.
//!
//! Builds the rustls server configuration from the PEM files written by the
//! certificate provisioner. The protocol floor is TLS 1.2: older clients
//! fail at the handshake layer.

use std::path::Path;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use rustls::ServerConfig;
use thiserror::Error;

/// Error type for TLS setup. Any variant is fatal at startup.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("certificate file not found: {0}")]
    CertNotFound(std::path::PathBuf),

    #[error("private key file not found: {0}")]
    KeyNotFound(std::path::PathBuf),

    #[error("failed to read certificate material: {0}")]
    Io(#[from] std::io::Error),

    #[error("no certificates found in PEM data")]
    NoCertificates,

    #[error("no private key found in PEM data")]
    NoPrivateKey,

    #[error("TLS configuration rejected: {0}")]
    Rustls(#[from] rustls::Error),
}

/// Load TLS configuration from certificate and key files.
///
/// # Errors
///
/// Returns an error if either file is missing or unparsable, or if rustls
/// rejects the certificate/key pair.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig, TlsError> {
    if !cert_path.exists() {
        return Err(TlsError::CertNotFound(cert_path.to_path_buf()));
    }
    if !key_path.exists() {
        return Err(TlsError::KeyNotFound(key_path.to_path_buf()));
    }

    let cert_pem = tokio::fs::read(cert_path).await?;
    let key_pem = tokio::fs::read(key_path).await?;

    let config = build_server_config(&cert_pem, &key_pem)?;
    Ok(RustlsConfig::from_config(Arc::new(config)))
}

/// Build a [`rustls::ServerConfig`] from PEM-encoded certificate and private
/// key bytes, restricted to TLS 1.2 and 1.3.
pub fn build_server_config(cert_pem: &[u8], key_pem: &[u8]) -> Result<ServerConfig, TlsError> {
    let certs = rustls_pemfile::certs(&mut std::io::BufReader::new(cert_pem))
        .collect::<Result<Vec<_>, _>>()?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificates);
    }

    let key = rustls_pemfile::private_key(&mut std::io::BufReader::new(key_pem))?
        .ok_or(TlsError::NoPrivateKey)?;

    let config = ServerConfig::builder_with_protocol_versions(&[
        &rustls::version::TLS12,
        &rustls::version::TLS13,
    ])
    .with_no_client_auth()
    .with_single_cert(certs, key)?;

    Ok(config)
}
