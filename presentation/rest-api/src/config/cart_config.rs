use std::env;
use std::time::Duration;

const DEFAULT_IDLE_MINUTES: i64 = 30;

/// Lifetime settings for in-memory cart sessions
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub max_idle: chrono::Duration,
    pub purge_interval: Duration,
}

impl CartConfig {
    /// Load cart session configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_SESSION_IDLE_MINUTES: Minutes without activity before a session is discarded (default: 30)
    /// - CART_PURGE_INTERVAL_SECONDS: How often idle sessions are swept (default: 60)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CART_SESSION_IDLE_MINUTES").ok().as_deref(),
            env::var("CART_PURGE_INTERVAL_SECONDS").ok().as_deref(),
        )
    }

    fn from_values(idle_minutes: Option<&str>, purge_seconds: Option<&str>) -> Self {
        let max_idle = idle_minutes
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .and_then(chrono::Duration::try_minutes)
            .unwrap_or_else(|| chrono::Duration::minutes(DEFAULT_IDLE_MINUTES));
        let purge_seconds = purge_seconds
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(60);

        Self {
            max_idle,
            purge_interval: Duration::from_secs(purge_seconds),
        }
    }
}
