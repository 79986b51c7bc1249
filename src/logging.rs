use std::sync::OnceLock;

use log::{LevelFilter, Log, Metadata, Record};

use crate::format::Location;
use crate::global::logger;
use crate::level::Level;
use crate::logger::Logger;

static INIT: OnceLock<()> = OnceLock::new();

/// Initialize global logging (idempotent).
///
/// Reads `LOG_LEVEL` into the process-wide logger and routes the `log`
/// crate's macros to it, so `log::warn!` from any dependency lands in the
/// same sinks as `log_warn!`.
#[track_caller]
pub fn init_logging() {
    let caller = Location::from(std::panic::Location::caller());
    INIT.get_or_init(|| {
        let logger = logger();
        logger.init_at(caller, |name| std::env::var(name).ok());
        // ignore error if another logger was registered first
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Logger::enabled(self, Level::from(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        let location = Location::new(record.file().unwrap_or("?"), record.line().unwrap_or(0));
        Logger::log(self, Level::from(record.level()), location, *record.args());
    }

    fn flush(&self) {}
}
