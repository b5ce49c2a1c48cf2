//! Logging of statistics of the search process.

use std::fmt::Display;

use once_cell::sync::OnceCell;

static STATISTIC_OPTIONS: OnceCell<StatisticOptions> = OnceCell::new();

#[derive(Debug)]
struct StatisticOptions {
    prefix: &'static str,
    log_statistics: bool,
}

/// Configures the logging of statistics. Statistics are only logged after
/// this has been called with `log_statistics` set to true; calls after the
/// first are ignored.
pub fn configure(log_statistics: bool, prefix: &'static str) {
    let _ = STATISTIC_OPTIONS.set(StatisticOptions {
        prefix,
        log_statistics,
    });
}

/// Logs the provided statistic name and value on a line of its own, preceded
/// by the configured prefix.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if let Some(options) = STATISTIC_OPTIONS.get() {
        if options.log_statistics {
            println!("{}{name}={value}", options.prefix);
        }
    }
}

/// Returns true if statistics are currently being logged.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS
        .get()
        .is_some_and(|options| options.log_statistics)
}
