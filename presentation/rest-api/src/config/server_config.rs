use std::env;

const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080, also used when unparseable)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
