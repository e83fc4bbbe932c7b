#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Global level from a `RUST_LOG`-style directive list such as
/// `"info,sea_battle=debug"`. Module-scoped entries are skipped since the
/// logger has a single level; the last bare level wins.
fn parse_directives(spec: &str) -> Option<LevelFilter> {
    spec.split(',')
        .map(str::trim)
        .filter(|d| !d.contains('='))
        .filter_map(|d| d.parse().ok())
        .last()
}

/// Pick the log level: `primary` (`SEA_BATTLE_LOG`) first, then
/// `fallback` (`RUST_LOG`), then `warn`.
pub fn level_from(primary: Option<&str>, fallback: Option<&str>) -> LevelFilter {
    primary
        .and_then(|lvl| lvl.trim().parse().ok())
        .or_else(|| fallback.and_then(parse_directives))
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging from `SEA_BATTLE_LOG`, falling back to `RUST_LOG`.
/// Defaults to `warn` so the board display is not interleaved with engine chatter.
pub fn init_logging() {
    let primary = env::var("SEA_BATTLE_LOG").ok();
    let fallback = env::var("RUST_LOG").ok();
    let level = level_from(primary.as_deref(), fallback.as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
