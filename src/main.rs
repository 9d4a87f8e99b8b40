//! Local HTTPS static file server.
//!
//! Serves a web application directory over TLS so browsers grant it a
//! secure context (service workers, wake locks, installable web apps) when
//! opened from other devices on the LAN.
//!
//! # Startup sequence
//!
//! ```text
//! resolve config (defaults ← file ← CLI)
//!     → init logging (stderr)
//!     → detect LAN address
//!     → provision certificate (generate once, reuse after)   [Provisioning]
//!     → load TLS config (fatal on failure)
//!     → print banner (stdout)
//!     → serve until interrupted                              [Serving]
//!     → graceful drain, exit 0                               [Stopped]
//! ```

use std::path::PathBuf;

use clap::Parser;

use stillness_serve::cert::{CertPaths, OpensslCommand, Provisioner};
use stillness_serve::config::{loader, FileConfig, Overrides};
use stillness_serve::http::HttpServer;
use stillness_serve::net::lan::{self, HostAddr};
use stillness_serve::net::tls;
use stillness_serve::observability::logging;

#[derive(Parser, Debug)]
#[command(name = "stillness-serve")]
#[command(about = "Local HTTPS static file server for testing PWAs on LAN devices")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(value_name = "PORT")]
    port: Option<u16>,

    /// Directory tree to serve (defaults to the executable's directory)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raise the log level to debug
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => loader::load_file(path)?,
        None => FileConfig::default(),
    };
    let config = loader::resolve(
        file,
        Overrides {
            port: cli.port,
            root: cli.root,
            verbose: cli.verbose,
        },
    )?;

    logging::init(&config.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        root = %config.root.display(),
        "stillness-serve starting"
    );

    let lan_addr = lan::detect();

    let provisioner = Provisioner::new(CertPaths::from_config(&config), lan_addr.clone());
    provisioner.ensure(&OpensslCommand::default())?;

    let tls = tls::load_tls_config(&config.cert_file(), &config.key_file()).await?;

    print_banner(&lan_addr, config.port);

    let server = HttpServer::new(config);
    server.run(tls).await?;

    Ok(())
}

/// Print the operator banner with the reachable URLs to stdout.
fn print_banner(lan: &HostAddr, port: u16) {
    let title = "Stillness is running".to_string();
    let urls = [
        format!("Local:   https://localhost:{port}"),
        format!("Network: https://{lan}:{port}"),
    ];
    let help = [
        "Open the Network URL on your phone.".to_string(),
        "Accept the certificate warning, then".to_string(),
        "add the app to your home screen.".to_string(),
    ];

    let inner = urls
        .iter()
        .chain(help.iter())
        .chain(std::iter::once(&title))
        .map(String::len)
        .max()
        .unwrap_or(0)
        + 4;
    let bar = "═".repeat(inner);

    println!();
    println!("  ╔{bar}╗");
    println!("  ║{title:^inner$}║");
    println!("  ╠{bar}╣");
    for line in &urls {
        println!("  ║  {line:<width$}║", width = inner - 2);
    }
    println!("  ╠{bar}╣");
    for line in &help {
        println!("  ║  {line:<width$}║", width = inner - 2);
    }
    println!("  ╚{bar}╝");
    println!();
    println!("  Press Ctrl+C to stop.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_argument_is_optional() {
        let cli = Cli::try_parse_from(["stillness-serve"]).unwrap();
        assert_eq!(cli.port, None);
    }

    #[test]
    fn positional_port_is_parsed() {
        let cli = Cli::try_parse_from(["stillness-serve", "3000"]).unwrap();
        assert_eq!(cli.port, Some(3000));
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Cli::try_parse_from(["stillness-serve", "not-a-port"]).is_err());
    }

    #[test]
    fn flags_are_recognised() {
        let cli =
            Cli::try_parse_from(["stillness-serve", "8443", "--root", "/srv/app", "--verbose"])
                .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/app")));
        assert!(cli.verbose);
    }
}
