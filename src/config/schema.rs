//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! File-based settings derive Serde traits; the resolved [`ServeConfig`] is
//! built once at startup and passed to every subsystem.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the directory holding the generated certificate material,
/// created under the serve root.
pub const CERT_DIR_NAME: &str = ".certs";

/// Resolved server configuration.
///
/// Constructed once at startup from defaults, an optional config file, and
/// CLI overrides (in that order). Immutable afterwards.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Port the HTTPS listener binds on all interfaces.
    pub port: u16,

    /// Directory tree served to clients. Also the parent of the
    /// certificate directory.
    pub root: PathBuf,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log level for the tracing subscriber (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ServeConfig {
    /// Socket address the listener binds: all interfaces on the
    /// configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// Directory holding certificate material (`<root>/.certs`).
    pub fn cert_dir(&self) -> PathBuf {
        self.root.join(CERT_DIR_NAME)
    }

    /// Path of the PEM certificate.
    pub fn cert_file(&self) -> PathBuf {
        self.cert_dir().join("cert.pem")
    }

    /// Path of the PEM private key.
    pub fn key_file(&self) -> PathBuf {
        self.cert_dir().join("key.pem")
    }

    /// Path of the rendered OpenSSL request config.
    pub fn openssl_config_file(&self) -> PathBuf {
        self.cert_dir().join("openssl.cnf")
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            root: default_root(),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
        }
    }
}

/// File-based configuration, all fields optional.
///
/// Anything left unset falls back to the built-in default; CLI arguments
/// override file values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    /// Port the HTTPS listener binds.
    pub port: Option<u16>,

    /// Directory tree to serve.
    pub root: Option<PathBuf>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,

    /// Log level for the tracing subscriber.
    pub log_level: Option<String>,
}

/// Settings supplied on the command line, overriding file values.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub root: Option<PathBuf>,
    pub verbose: bool,
}

pub(crate) fn default_port() -> u16 {
    8443
}

pub(crate) fn default_request_timeout() -> u64 {
    30
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// Default serve root: the directory containing the executable, falling
/// back to the current working directory.
pub(crate) fn default_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
