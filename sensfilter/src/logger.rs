// sensfilter/src/logger.rs
//! Logger setup for the sensfilter binary.
//!
//! `RUST_LOG` is honored (default `warn`); `--quiet` and `--debug` override it.
//! Logs always go to stderr so they never mix with command output.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. A `level_override` replaces the default level
/// taken from `RUST_LOG`. Calling this more than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}

/// Maps the `--quiet` and `--debug` flags to a level override.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(level_from_flags(true, false), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
