/// Logging port for use cases. The rest API wires a `tracing` adapter; tests
/// plug in mocks.
pub trait Logger: Send + Sync {
    /// Business events: sessions started, products scanned, checkouts.
    fn info(&self, message: &str);
    /// Rejected requests such as unknown codes or negative prices.
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
