use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::viewport::DESKTOP_WIDTH;

/// Estatein - real estate brochure site
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host to bind to
    #[arg(long, env = "ESTATEIN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ESTATEIN_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Maximum number of worker threads
    #[arg(long, env = "ESTATEIN_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Directory served under /static
    #[arg(long, env = "ESTATEIN_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Viewport width assumed when the browser sends no client hint
    #[arg(long, env = "ESTATEIN_VIEWPORT_WIDTH", default_value_t = DESKTOP_WIDTH)]
    pub default_viewport_width: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Default `RUST_LOG` directive when the environment sets none.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "estatein=debug"
        } else {
            "estatein=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_without_arguments() {
        let config = Config::try_parse_from(["estatein"]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.workers, 8);
        assert_eq!(config.default_viewport_width, DESKTOP_WIDTH);
        assert_eq!(config.log_filter(), "estatein=info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "estatein",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--static-dir",
            "public",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.log_filter(), "estatein=debug");
    }
}
