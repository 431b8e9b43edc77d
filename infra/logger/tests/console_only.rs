use whub_logger::{ConsoleTarget, LevelFilter, Logger};

#[test]
fn stderr_console_logger_has_no_file_worker() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(Some(ConsoleTarget::Stderr))
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output(), "console-only logger should not spawn a file worker");
    tracing::info!(product_type = "mug", "catalog lookup");
}
