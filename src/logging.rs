// src/logging.rs

//! Logging setup for `learnmap` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `LEARNMAP_LOG` environment variable (e.g. "info", "debug")
//! 2. default to `info`
//!
//! The library only emits events (`warn!` on recovered signal corruption and
//! tier-table fallback, `debug!` on evaluation passes); hosts that already
//! install their own subscriber should skip this entirely.

use crate::errors::Result;
use tracing_subscriber::fmt;

/// Initialise a global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging() -> Result<()> {
    let level = std::env::var("LEARNMAP_LOG")
        .ok()
        .and_then(|s| parse_level_str(&s))
        .unwrap_or(tracing::Level::INFO);

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
