//! Severity levels and the conversions between ordinals, names and colors.
//!
//! Ordinals line up with Ruby's `Logger::Severity` (DEBUG is `0`), which puts
//! TRACE at `-1`. The enum is the only source of truth for ordering: derived
//! `Ord` follows declaration order, [`Level::ALL`] lists every level in
//! ascending severity, and [`Level::succ`] / [`Level::pred`] step through it.

use std::fmt;
use std::str::FromStr;

use crate::error::LevelError;

/// Width of the longest level name; names are left-justified to this width.
pub const LEVEL_NAME_WIDTH: usize = 5;

/// Message severity, least to most critical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Level {
    Trace = -1,
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

const NAMES: [&str; 6] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR", "FATAL"];
const ORDINALS: [&str; 6] = ["-1", "0", "1", "2", "3", "4"];

#[cfg(feature = "color")]
const COLORS: [&str; 6] = [
    "\x1b[94m", "\x1b[36m", "\x1b[32m", "\x1b[33m", "\x1b[31m", "\x1b[35m",
];

impl Level {
    /// Every level in ascending severity.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub const MIN: Level = Level::Trace;
    pub const MAX: Level = Level::Fatal;

    /// Ordinal value of the level.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Position of the level in [`Level::ALL`].
    const fn index(self) -> usize {
        (self.value() - Level::MIN.value()) as usize
    }

    /// Level whose ordinal is `value`, if any.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Level> {
        if value < Level::MIN.value() || value > Level::MAX.value() {
            return None;
        }
        Some(Level::ALL[(value - Level::MIN.value()) as usize])
    }

    /// Canonical uppercase name, e.g. `"WARN"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Decimal form of the ordinal, e.g. `"-1"` for TRACE.
    #[must_use]
    pub const fn ordinal_str(self) -> &'static str {
        ORDINALS[self.index()]
    }

    /// ANSI foreground color used for the level name on the console.
    #[cfg(feature = "color")]
    #[must_use]
    pub const fn color(self) -> &'static str {
        COLORS[self.index()]
    }

    /// Next more severe level; `None` after FATAL.
    #[must_use]
    pub const fn succ(self) -> Option<Level> {
        Level::from_value(self.value() + 1)
    }

    /// Next less severe level; `None` before TRACE.
    #[must_use]
    pub const fn pred(self) -> Option<Level> {
        Level::from_value(self.value() - 1)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<i32> for Level {
    type Error = LevelError;

    fn try_from(value: i32) -> Result<Self, LevelError> {
        Level::from_value(value).ok_or(LevelError::InvalidLevel(value))
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_level(s)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }
}

/// Whether `level` lies within TRACE..=FATAL.
#[must_use]
pub fn is_valid_level(level: i32) -> bool {
    Level::from_value(level).is_some()
}

/// Canonical name for a raw ordinal, `None` when out of range.
#[must_use]
pub fn level_to_name(level: i32) -> Option<&'static str> {
    Level::from_value(level).map(Level::name)
}

/// Decimal string for a raw ordinal, `None` when out of range.
#[must_use]
pub fn level_to_string(level: i32) -> Option<&'static str> {
    Level::from_value(level).map(Level::ordinal_str)
}

/// Decimal strings of every ordinal, TRACE first.
#[must_use]
pub fn level_strings() -> &'static [&'static str] {
    &ORDINALS
}

/// Console color for a raw ordinal, `None` when out of range.
#[cfg(feature = "color")]
#[must_use]
pub fn level_to_color(level: i32) -> Option<&'static str> {
    Level::from_value(level).map(Level::color)
}

/// Resolve a level name, ignoring ASCII case.
///
/// Pure lookup: nothing is logged on failure.
pub fn name_to_level(name: &str) -> Result<Level, LevelError> {
    Level::ALL
        .into_iter()
        .find(|level| level.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| LevelError::UnknownLevelName(name.to_string()))
}

/// Resolve either an ordinal string (`"-1"`..`"4"`) or a level name.
///
/// Ordinals are matched exactly before names are tried, so `"0"` is DEBUG.
pub fn parse_level(input: &str) -> Result<Level, LevelError> {
    if input.is_empty() {
        return Err(LevelError::EmptyInput);
    }
    if let Some(level) = Level::ALL
        .into_iter()
        .find(|level| level.ordinal_str() == input)
    {
        return Ok(level);
    }
    name_to_level(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_matches_the_enumeration_bounds() {
        for value in -10..10 {
            let expected = (-1..=4).contains(&value);
            assert_eq!(is_valid_level(value), expected, "value {value}");
            assert_eq!(level_to_name(value).is_some(), expected, "value {value}");
        }
        assert!(!is_valid_level(i32::MIN));
        assert!(!is_valid_level(i32::MAX));
    }

    #[test]
    fn all_is_contiguous_and_ascending() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].value() + 1, pair[1].value());
            assert_eq!(pair[0].succ(), Some(pair[1]));
            assert_eq!(pair[1].pred(), Some(pair[0]));
        }
        assert_eq!(Level::MIN.pred(), None);
        assert_eq!(Level::MAX.succ(), None);
    }

    #[test]
    fn names_round_trip_for_every_level() {
        for level in Level::ALL {
            let name = level_to_name(level.value()).expect("valid level has a name");
            assert_eq!(name_to_level(name), Ok(level));
        }
    }

    #[test]
    fn name_lookup_ignores_case() {
        assert_eq!(name_to_level("debug"), Ok(Level::Debug));
        assert_eq!(name_to_level("DEBUG"), Ok(Level::Debug));
        assert_eq!(name_to_level("DeBuG"), Ok(Level::Debug));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            name_to_level(""),
            Err(LevelError::UnknownLevelName(String::new()))
        );
        assert_eq!(
            name_to_level("bogus"),
            Err(LevelError::UnknownLevelName("bogus".into()))
        );
        assert!(name_to_level("warning").is_err());
    }

    #[test]
    fn parse_prefers_ordinals_then_names() {
        assert_eq!(parse_level("0"), Ok(Level::Debug));
        assert_eq!(parse_level("debug"), Ok(Level::Debug));
        assert_eq!(parse_level("DEBUG"), Ok(Level::Debug));
        assert_eq!(parse_level("-1"), Ok(Level::Trace));
        assert_eq!(parse_level("4"), Ok(Level::Fatal));
        assert_eq!(parse_level(""), Err(LevelError::EmptyInput));
        assert!(matches!(
            parse_level("5"),
            Err(LevelError::UnknownLevelName(_))
        ));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warn));
    }

    #[test]
    fn ordinal_strings_cover_every_level() {
        assert_eq!(level_strings(), &["-1", "0", "1", "2", "3", "4"]);
        assert_eq!(level_to_string(-1), Some("-1"));
        assert_eq!(level_to_string(5), None);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(Level::try_from(2), Ok(Level::Warn));
        assert_eq!(Level::try_from(999), Err(LevelError::InvalidLevel(999)));
    }

    #[test]
    fn display_pads_to_requested_width() {
        assert_eq!(format!("{:<5}|", Level::Warn), "WARN |");
        assert_eq!(format!("{:<5}|", Level::Error), "ERROR|");
        assert_eq!(Level::Info.to_string(), "INFO");
        assert!(Level::ALL.iter().all(|l| l.name().len() <= LEVEL_NAME_WIDTH));
    }

    #[test]
    fn log_crate_levels_map_onto_ours() {
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(log::Level::from(Level::Fatal), log::Level::Error);
        assert_eq!(log::Level::from(Level::Trace), log::Level::Trace);
    }

    #[cfg(feature = "color")]
    #[test]
    fn colors_exist_only_for_valid_levels() {
        assert_eq!(level_to_color(-1), Some("\x1b[94m"));
        assert_eq!(level_to_color(2), Some("\x1b[33m"));
        assert_eq!(level_to_color(5), None);
    }
}
