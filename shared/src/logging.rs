//! Shared logging utilities for consistent tracing across the workspace

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Build the filter directive used when `RUST_LOG` is not set
pub fn default_filter(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("catalog={base_level},shared={base_level},reqwest=warn")
}

/// Initialize tracing subscriber with an optional log level.
///
/// `RUST_LOG` wins over the computed filter when present. Calling this more
/// than once is a no-op.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Initialize tracing subscriber at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for refused operations
pub fn log_rejection(operation: &str, reason: &dyn std::fmt::Display) {
    warn!(
        operation = operation,
        timestamp = format_timestamp(),
        reason = %reason,
        "{} rejected: {}",
        operation,
        reason
    );
}

/// Contextual logging helper for completed operations
pub fn log_success(operation: &str, details: &str) {
    debug!(
        operation = operation,
        timestamp = format_timestamp(),
        "{} completed: {}",
        operation,
        details
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(None), "catalog=info,shared=info,reqwest=warn");
        assert_eq!(default_filter(Some("debug")), "catalog=debug,shared=debug,reqwest=warn");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let stamp = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
        assert_eq!(&stamp[8..9], ".");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing_with_level(Some("debug"));
        init_tracing();
        log_success("test", "tracing initialised twice");
    }
}
