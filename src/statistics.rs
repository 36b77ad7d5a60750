//! Logging of solver statistics in a machine-parseable format.
//!
//! Statistics are written as `key=value` pairs behind a configurable prefix
//! through the [`log`] facade, so that a consumer can grep them out of the
//! regular log output.

use std::fmt::Display;

use log::info;
use once_cell::sync::OnceCell;

const DEFAULT_STATISTIC_PREFIX: &str = "%%%hitset-stat";

static STATISTIC_PREFIX: OnceCell<&'static str> = OnceCell::new();

/// Configure the prefix which is used when logging statistics. The prefix can
/// be set once; calls after the first are ignored.
pub fn configure_statistic_prefix(prefix: &'static str) {
    let _ = STATISTIC_PREFIX.set(prefix);
}

fn statistic_prefix() -> &'static str {
    STATISTIC_PREFIX
        .get()
        .copied()
        .unwrap_or(DEFAULT_STATISTIC_PREFIX)
}

/// Logs the provided statistic as a `key=value` pair.
pub fn log_statistic(name: impl Display, value: impl Display) {
    info!("{}: {name}={value}", statistic_prefix());
}

/// Signals the end of a block of statistics.
pub fn log_statistic_postfix() {
    info!("{}-end", statistic_prefix());
}
