use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI8, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::Local;
use parking_lot::RwLock;

use crate::error::LevelError;
use crate::format::{Location, write_console_line, write_file_line};
use crate::level::{Level, name_to_level, parse_level};
use crate::lock::{HeldLock, LockProvider};
use crate::sink::{Console, FileSink};

/// Name of the level variable, before any prefix.
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Prefix baked in at build time through `LOG_ENV_VAR_PREFIX`, empty if unset.
pub const DEFAULT_ENV_PREFIX: &str = match option_env!("LOG_ENV_VAR_PREFIX") {
    Some(prefix) => prefix,
    None => "",
};

/// Progress of the one-shot environment initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvInit {
    Uninitialized,
    Initialized,
}

/// Leveled logger writing to the console and, optionally, a file.
///
/// All state sits behind atomics or slot locks so a `Logger` can be shared
/// freely, but emissions from different threads are only serialized when a
/// [`LockProvider`] is installed.
pub struct Logger {
    level: AtomicI8,
    quiet: AtomicBool,
    file: RwLock<Option<FileSink>>,
    lock: RwLock<Option<Arc<dyn LockProvider>>>,
    console: Console,
    env_prefix: String,
    report_invalid_levels: bool,
    env_init: OnceLock<()>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("quiet", &self.quiet())
            .field("file", &self.file.read().is_some())
            .field("lock", &self.lock.read().is_some())
            .field("env_prefix", &self.env_prefix)
            .field("env_init", &self.env_init_state())
            .finish()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Current threshold; messages below it are dropped.
    pub fn level(&self) -> Level {
        Level::from_value(i32::from(self.level.load(Ordering::Relaxed))).unwrap_or_default()
    }

    /// Name of the current threshold.
    pub fn level_name(&self) -> &'static str {
        self.level().name()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level as i8, Ordering::Relaxed);
    }

    /// Set the threshold from a raw ordinal.
    #[track_caller]
    pub fn set_level_value(&self, value: i32) -> Result<Level, LevelError> {
        let resolved = Level::try_from(value);
        self.apply(resolved, Location::from(std::panic::Location::caller()))
    }

    /// Set the threshold from a level name, ignoring ASCII case.
    #[track_caller]
    pub fn set_level_by_name(&self, name: &str) -> Result<Level, LevelError> {
        let resolved = name_to_level(name);
        self.apply(resolved, Location::from(std::panic::Location::caller()))
    }

    /// Set the threshold from an ordinal string such as `"0"` or a level name.
    #[track_caller]
    pub fn set_level_from_string(&self, input: &str) -> Result<Level, LevelError> {
        let resolved = parse_level(input);
        self.apply(resolved, Location::from(std::panic::Location::caller()))
    }

    fn apply(
        &self,
        resolved: Result<Level, LevelError>,
        location: Location<'_>,
    ) -> Result<Level, LevelError> {
        match resolved {
            Ok(level) => {
                self.set_level(level);
                Ok(level)
            }
            Err(err) => {
                if self.report_invalid_levels {
                    self.log(Level::Error, location, format_args!("{err}"));
                }
                Err(err)
            }
        }
    }

    /// Whether the console sink is suppressed. The file sink ignores this.
    pub fn quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn file_sink(&self) -> Option<FileSink> {
        self.file.read().clone()
    }

    /// Replace the file sink, handing back the previous one.
    pub fn set_file_sink(&self, sink: Option<FileSink>) -> Option<FileSink> {
        std::mem::replace(&mut *self.file.write(), sink)
    }

    /// Install or remove the provider called around each emission.
    pub fn set_lock(&self, provider: Option<Arc<dyn LockProvider>>) {
        *self.lock.write() = provider;
    }

    /// Full name of the level variable, e.g. `MYAPP_LOG_LEVEL`.
    pub fn env_var_name(&self) -> String {
        format!("{}{LEVEL_ENV_VAR}", self.env_prefix)
    }

    pub fn env_init_state(&self) -> EnvInit {
        match self.env_init.get() {
            Some(()) => EnvInit::Initialized,
            None => EnvInit::Uninitialized,
        }
    }

    /// Apply the level variable from the process environment, once.
    ///
    /// Later calls do nothing, even if the environment has changed.
    #[track_caller]
    pub fn init_from_environment(&self) {
        self.init_from_lookup(|name| std::env::var(name).ok());
    }

    /// Same as [`init_from_environment`](Self::init_from_environment) with
    /// `lookup` standing in for the environment.
    #[track_caller]
    pub fn init_from_lookup<F>(&self, lookup: F)
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.init_at(Location::from(std::panic::Location::caller()), lookup);
    }

    /// One-shot environment read; a rejected value is reported at `location`.
    pub(crate) fn init_at<F>(&self, location: Location<'_>, lookup: F)
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.env_init.get_or_init(|| {
            let name = self.env_var_name();
            if let Some(value) = lookup(&name).filter(|value| !value.is_empty()) {
                let _ = self.apply(parse_level(&value), location);
            }
        });
    }

    /// Whether a message at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Write one message to every enabled sink.
    ///
    /// Never fails: write errors on either sink are dropped.
    pub fn log(&self, level: Level, location: Location<'_>, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let provider = self.lock.read().clone();
        let _held = provider.as_deref().map(HeldLock::acquire);

        let now = Local::now();

        if !self.quiet() {
            let _ = self
                .console
                .with_writer(|out| write_console_line(out, &now, level, location, args));
        }

        if let Some(sink) = self.file_sink() {
            let _ = write_file_line(&mut *sink.lock(), &now, level, location, args);
        }
    }
}

/// Construction-time settings for a [`Logger`].
pub struct LoggerBuilder {
    level: Level,
    quiet: bool,
    file: Option<FileSink>,
    lock: Option<Arc<dyn LockProvider>>,
    console: Console,
    env_prefix: String,
    report_invalid_levels: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            level: Level::default(),
            quiet: false,
            file: None,
            lock: None,
            console: Console::Stderr,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            report_invalid_levels: true,
        }
    }
}

impl LoggerBuilder {
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn file_sink(mut self, sink: FileSink) -> Self {
        self.file = Some(sink);
        self
    }

    pub fn lock(mut self, provider: Arc<dyn LockProvider>) -> Self {
        self.lock = Some(provider);
        self
    }

    /// Send console lines to `console` instead of stderr.
    pub fn console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Whether rejected level input is reported as an ERROR line.
    pub fn report_invalid_levels(mut self, report: bool) -> Self {
        self.report_invalid_levels = report;
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            level: AtomicI8::new(self.level as i8),
            quiet: AtomicBool::new(self.quiet),
            file: RwLock::new(self.file),
            lock: RwLock::new(self.lock),
            console: self.console,
            env_prefix: self.env_prefix,
            report_invalid_levels: self.report_invalid_levels,
            env_init: OnceLock::new(),
        }
    }
}
