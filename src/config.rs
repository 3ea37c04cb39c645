use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_RUBRIC_PATH: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCOUTING_PORT must be a valid u16")]
    InvalidPort,

    #[error("SCOUTING_HOST must parse to an IPv4 or IPv6 address")]
    InvalidHost {
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON scoring configuration, re-read on every scoring request.
    pub rubric_path: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let host = env::var("SCOUTING_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("SCOUTING_PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let rubric_path = env::var("SCOUTING_RUBRIC_PATH")
            .unwrap_or_else(|_| DEFAULT_RUBRIC_PATH.to_string())
            .into();

        Ok(Self {
            host,
            port,
            rubric_path,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
