//! Process-wide default logger and the free functions that drive it.
//!
//! The default instance is created on first use with [`Logger::new`]'s
//! settings. Code that wants isolation (tests, embedded components) builds
//! its own [`Logger`] instead.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::error::LevelError;
use crate::format::Location;
use crate::level::Level;
use crate::lock::LockProvider;
use crate::logger::{EnvInit, Logger};
use crate::sink::FileSink;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by the `log_*!` macros.
pub fn logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Replace the defaults of the process-wide logger.
///
/// Only effective before anything has touched the default instance; returns
/// the rejected logger otherwise.
pub fn install(logger: Logger) -> Result<(), Logger> {
    DEFAULT.set(logger)
}

pub fn get_level() -> Level {
    logger().level()
}

pub fn get_level_name() -> &'static str {
    logger().level_name()
}

pub fn set_level(level: Level) {
    logger().set_level(level);
}

#[track_caller]
pub fn set_level_value(value: i32) -> Result<Level, LevelError> {
    logger().set_level_value(value)
}

#[track_caller]
pub fn set_level_by_name(name: &str) -> Result<Level, LevelError> {
    logger().set_level_by_name(name)
}

#[track_caller]
pub fn set_level_from_string(input: &str) -> Result<Level, LevelError> {
    logger().set_level_from_string(input)
}

pub fn get_quiet() -> bool {
    logger().quiet()
}

pub fn set_quiet(quiet: bool) {
    logger().set_quiet(quiet);
}

pub fn get_file_sink() -> Option<FileSink> {
    logger().file_sink()
}

pub fn set_file_sink(sink: Option<FileSink>) -> Option<FileSink> {
    logger().set_file_sink(sink)
}

pub fn set_lock(provider: Option<Arc<dyn LockProvider>>) {
    logger().set_lock(provider);
}

#[track_caller]
pub fn init_from_environment() {
    logger().init_from_environment();
}

pub fn env_init_state() -> EnvInit {
    logger().env_init_state()
}

/// Emission entry point behind the macros.
pub fn emit(level: Level, location: Location<'_>, args: fmt::Arguments<'_>) {
    logger().log(level, location, args);
}
