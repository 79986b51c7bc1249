//! Small leveled logger: one line per message to stderr and, optionally, to a
//! caller-owned file.
//!
//! ```
//! use loglite::{Level, log_info, log_warn};
//!
//! loglite::set_level(Level::Info);
//! log_info!("listening on {}", "127.0.0.1:8080");
//! log_warn!("disk {}% full", 87);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod global;
pub mod level;
pub mod lock;
pub mod logger;
pub mod logging;
mod macros;
pub mod sink;

pub use config::LoggerConfig;
pub use error::LevelError;
pub use format::Location;
pub use global::{
    env_init_state, get_file_sink, get_level, get_level_name, get_quiet, init_from_environment,
    install, logger, set_file_sink, set_level, set_level_by_name, set_level_from_string,
    set_level_value, set_lock, set_quiet,
};
#[cfg(feature = "color")]
pub use level::level_to_color;
pub use level::{
    LEVEL_NAME_WIDTH, Level, is_valid_level, level_strings, level_to_name, level_to_string,
    name_to_level, parse_level,
};
pub use lock::{BlockingLock, CallbackLock, LockProvider};
pub use logger::{EnvInit, LEVEL_ENV_VAR, Logger, LoggerBuilder};
pub use logging::init_logging;
pub use sink::{Console, FileSink, file_sink};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
