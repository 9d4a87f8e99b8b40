//! Self-signed certificate request description.
//!
//! Renders the OpenSSL request config used to generate the local HTTPS
//! certificate. The SAN list always covers `localhost` and `127.0.0.1`;
//! the third entry is the LAN address detected at generation time.

use crate::net::lan::HostAddr;

/// Common name on the generated certificate.
pub const COMMON_NAME: &str = "Stillness Local";

/// RSA key size in bits.
pub const RSA_BITS: u32 = 2048;

/// Certificate validity in days.
pub const VALIDITY_DAYS: u32 = 365;

/// Description of the self-signed certificate to generate.
#[derive(Debug, Clone)]
pub struct CertRequest {
    /// Subject common name.
    pub common_name: String,

    /// RSA key size.
    pub rsa_bits: u32,

    /// Validity period in days.
    pub days: u32,

    /// LAN identifier included in the SAN list alongside `localhost`
    /// and `127.0.0.1`.
    pub lan: HostAddr,
}

impl CertRequest {
    /// A request with the standard parameters (RSA-2048, SHA-256,
    /// 365 days) for the given LAN identifier.
    pub fn new(lan: HostAddr) -> Self {
        Self {
            common_name: COMMON_NAME.to_string(),
            rsa_bits: RSA_BITS,
            days: VALIDITY_DAYS,
            lan,
        }
    }

    /// Render the OpenSSL request config for this certificate.
    ///
    /// A numeric LAN address becomes an `IP.2` SAN entry; the `localhost`
    /// fallback becomes a `DNS.2` entry so the config never carries an
    /// invalid IP line.
    pub fn render_openssl_config(&self) -> String {
        let lan_entry = match &self.lan {
            HostAddr::Ip(ip) => format!("IP.2 = {ip}"),
            HostAddr::Dns(name) => format!("DNS.2 = {name}"),
        };

        format!(
            "[req]\n\
             default_bits = {bits}\n\
             prompt = no\n\
             default_md = sha256\n\
             x509_extensions = v3_req\n\
             distinguished_name = dn\n\
             \n\
             [dn]\n\
             CN = {cn}\n\
             \n\
             [v3_req]\n\
             subjectAltName = @alt_names\n\
             \n\
             [alt_names]\n\
             DNS.1 = localhost\n\
             IP.1 = 127.0.0.1\n\
             {lan_entry}\n",
            bits = self.rsa_bits,
            cn = self.common_name,
        )
    }
}
