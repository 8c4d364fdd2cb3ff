use crate::domains::logger::{DomainLogger, FileLogger};
use std::sync::Arc;

/// Initialize the `fast_log` file appender and return a logger the client can inject.
pub fn init_file_logger(path: &str, level: log::LevelFilter) -> Result<Arc<dyn DomainLogger>, String> {
    FileLogger::init(path, level).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(FileLogger))
}
