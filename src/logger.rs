use std::env;
use std::io::Write;
use std::process;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::Config;

/// Filter string that overrides the configured level, e.g. `debug`.
pub const LOG_ENV: &str = "MINI_SHELL_LOG";

pub fn level_from(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Warn)
}

/// Sends log records to stderr, tagged with the PID since forked children
/// log too.
pub fn init_logger(config: &Config) {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[PID:{}][{}] {}",
                process::id(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Stderr)
        .filter_level(level_from(&config.log_level));

    if let Ok(filters) = env::var(LOG_ENV) {
        builder.parse_filters(&filters);
    }

    // A second call (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    log::debug!("log level set to {}", log::max_level());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names() {
        assert_eq!(level_from("debug"), LevelFilter::Debug);
        assert_eq!(level_from("ERROR"), LevelFilter::Error);
        assert_eq!(level_from("off"), LevelFilter::Off);
        assert_eq!(level_from("chatty"), LevelFilter::Warn);
    }
}
