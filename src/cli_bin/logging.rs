//! Logger initialization
//!
//! The level comes from `LOG_LEVEL`; values that do not parse leave the
//! default in place. `--verbose` and `--quiet` win over the environment.

use log::{warn, LevelFilter};

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parse a level name such as `debug` or `WARN`
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(LevelFilter::Warn),
        "fatal" | "panic" => Some(LevelFilter::Error),
        other => other.parse().ok(),
    }
}

/// Pick the effective level from the flags and the raw environment value
pub fn resolve_level(env_value: Option<&str>, verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    if quiet {
        return LevelFilter::Error;
    }
    env_value.and_then(parse_level).unwrap_or(DEFAULT_LEVEL)
}

/// Install the global logger. Call once, before any processing.
pub fn init(verbose: bool, quiet: bool) {
    let env_value = std::env::var(LOG_LEVEL_ENV).ok();
    let level = resolve_level(env_value.as_deref(), verbose, quiet);

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    if let Some(raw) = env_value.as_deref() {
        if parse_level(raw).is_none() {
            warn!("ignoring invalid {}={:?}", LOG_LEVEL_ENV, raw);
        }
    }
}
