use alife_viewer::adapters::outbound::{init_combined_logger, init_console_logger, init_noop_logger};

#[test]
fn test_console_and_noop_loggers_accept_messages() {
    let console = init_console_logger();
    console.info("frame drawn");
    console.warn("agent count mismatch");
    console.error("poll failed");

    let noop = init_noop_logger();
    noop.info("ignored");
    noop.error("ignored-err");

    let fallback = init_combined_logger(None, log::LevelFilter::Info);
    fallback.info("console only");
}

#[test]
fn test_combined_logger_creates_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewer.log");

    let logger = init_combined_logger(path.to_str(), log::LevelFilter::Info);
    logger.info("simulation started");
    log::logger().flush();

    assert!(path.exists());
}
