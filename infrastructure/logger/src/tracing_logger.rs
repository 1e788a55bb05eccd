use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Bridges the domain `Logger` port onto `tracing` events.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pos", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pos", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pos", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pos", "{}", message);
    }
}
