use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Forwards domain log lines to the process-wide `tracing` subscriber.
struct TracingBridge;

impl DomainLogger for TracingBridge {
    fn info(&self, msg: &str) { tracing::info!(target: "alife_viewer::client", "{}", msg); }
    fn warn(&self, msg: &str) { tracing::warn!(target: "alife_viewer::client", "{}", msg); }
    fn error(&self, msg: &str) { tracing::error!(target: "alife_viewer::client", "{}", msg); }
}

/// Console-backed DomainLogger; also the fallback when the file logger fails.
pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(TracingBridge {})
}
