//! Listen address resolution and constants.
//!
//! There is no configuration file. The bind host and port come from CLI
//! arguments with the `PORT` environment variable as a fallback, matching
//! how container platforms inject the listen port.

use std::net::SocketAddr;

/// Default interface: all interfaces, for container deployments
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable consulted for the listen port when no CLI flag is given
pub const PORT_ENV_VAR: &str = "PORT";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "shiftx_web=debug,axum=info";

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the listen address with precedence: CLI > `PORT` env var > default.
    pub fn resolve(host: Option<String>, port: Option<u16>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(port) => port,
            None => Self::port_from_env()?.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Read the `PORT` environment variable, if set.
    fn port_from_env() -> Result<Option<u16>, ConfigError> {
        match std::env::var(PORT_ENV_VAR) {
            Ok(value) => Self::parse_port(&value).map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Parse a port value taken from the environment.
    fn parse_port(value: &str) -> Result<u16, ConfigError> {
        value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_string()))
    }

    /// The socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.host.clone(), self.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT environment variable: {0}")]
    InvalidPort(String),
    #[error("Invalid listen address: {0}:{1}")]
    InvalidAddress(String, u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        // Safe as long as no test in this module sets PORT
        let config = ServerConfig::resolve(None, None).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn cli_values_win() {
        let config = ServerConfig::resolve(Some("127.0.0.1".to_string()), Some(9090)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn socket_addr_parses_for_valid_config() {
        let config = ServerConfig::resolve(None, Some(8080)).unwrap();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn port_parsing_rejects_garbage() {
        assert!(matches!(
            ServerConfig::parse_port("not-a-port"),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            ServerConfig::parse_port("99999"),
            Err(ConfigError::InvalidPort(_))
        ));
        assert_eq!(ServerConfig::parse_port("8080").unwrap(), 8080);
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let config = ServerConfig::resolve(Some("not a host".to_string()), Some(8080)).unwrap();
        assert!(matches!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress(_, 8080))
        ));
    }
}
