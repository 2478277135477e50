//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production
//! environments. Production gets JSON lines, development gets plain text.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (info level, plain text, stdout)
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional level, JSON output, and file output.
///
/// `log_level` takes an `EnvFilter` directive string ("debug",
/// "roster_server=debug,info", ...); unset falls back to `RUST_LOG`, then
/// to "info".
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let filter = match log_level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let json = json.unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Daily-rolling file output if log_dir is provided and exists
    if let Some(dir) = log_dir
        && Path::new(dir).exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "roster-server");
        if json {
            builder.json().with_writer(file_appender).init();
        } else {
            builder.with_writer(file_appender).init();
        }
        return;
    }

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
