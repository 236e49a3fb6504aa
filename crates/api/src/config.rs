//! Application configuration

use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`, default 8000)
    pub port: u16,
    /// Environment name reported by `GET /api/status`
    /// (`ENVIRONMENT`, default "development")
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Socket address to bind the listener to
    pub fn bind_address(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        env::remove_var("PORT");
        env::remove_var("ENVIRONMENT");
        let config = Config::from_env();
        assert_eq!(config.port, 8000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_bind_address_uses_port() {
        let config = Config {
            port: 9000,
            environment: "test".to_string(),
        };
        assert_eq!(config.bind_address().port(), 9000);
    }
}
