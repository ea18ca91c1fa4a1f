//! Stderr logging using env_logger
//!
//! The logger is installed before the config file is read so config-load
//! messages are not lost. RUST_LOG wins when set; otherwise records are
//! gated at `warn` until [`apply_config_level`] raises or lowers the level.
//! Logs go to stderr so stdout only carries command output.

use env_logger::{Env, Target, DEFAULT_FILTER_ENV};
use log::LevelFilter;

const STARTUP_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the logger. Returns true when RUST_LOG controls filtering.
pub fn init() -> bool {
    let from_env = std::env::var_os(DEFAULT_FILTER_ENV).is_some();

    // Without RUST_LOG the env_logger filter lets everything through and the
    // global max level does the gating, so it can be changed after init.
    let env = Env::default().default_filter_or("trace");
    let result = env_logger::Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if !from_env {
        log::set_max_level(STARTUP_LEVEL);
    }
    from_env
}

/// Parse a configured level name, falling back to `warn`.
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        log::warn!("Unknown log level '{}', using warn", level);
        STARTUP_LEVEL
    })
}

/// Apply the config file's level unless RUST_LOG is in charge.
pub fn apply_config_level(level: &str, from_env: bool) {
    if from_env {
        return;
    }
    log::set_max_level(parse_level(level));
}
