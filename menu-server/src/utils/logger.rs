//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. `json` switches to one JSON
/// object per line (production).
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>, json: bool) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match (file_appender(log_dir), json) {
        (Some(appender), true) => subscriber.json().with_writer(appender).init(),
        (Some(appender), false) => subscriber.with_writer(appender).init(),
        (None, true) => subscriber.json().init(),
        (None, false) => subscriber.init(),
    }
}

/// Daily rolling file in `log_dir`, only when the directory exists
fn file_appender(log_dir: Option<&str>) -> Option<RollingFileAppender> {
    let dir = Path::new(log_dir?);
    dir.exists().then(|| rolling::daily(dir, "menu-server"))
}
