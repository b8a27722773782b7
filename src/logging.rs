//! Logger bootstrap for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Maps a `-v` repetition count to a log level.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence; otherwise the level derived from
/// `verbosity` applies.
pub fn init(verbosity: u8) {
    let env = Env::default().default_filter_or(level_for(verbosity).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::Info)]
    #[case(1, LevelFilter::Debug)]
    #[case(4, LevelFilter::Trace)]
    fn verbosity_maps_to_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[test]
    fn init_is_idempotent() {
        init(0);
        init(2);
    }
}
