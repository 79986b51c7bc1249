//! Call-site macros, one per level.
//!
//! Each macro records `file!()` and `line!()` and forwards `format!`-style
//! arguments. Without a target they log through the process-wide logger;
//! a leading `logger: <expr>,` sends the message to that instance instead.
//!
//! ```
//! use loglite::{Level, Logger, log_info, log_warn};
//!
//! log_warn!("disk {}% full", 87);
//!
//! let local = Logger::builder().level(Level::Info).quiet(true).build();
//! log_info!(logger: &local, "started {} workers", 4);
//! ```

/// Log at an explicit level.
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            $crate::Location::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::global::emit(
            $level,
            $crate::Location::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! log_trace {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Trace, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! log_warn {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Warn, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::log_at!(logger: $logger, $crate::Level::Fatal, $($arg)+) };
    ($($arg:tt)+) => { $crate::log_at!($crate::Level::Fatal, $($arg)+) };
}
