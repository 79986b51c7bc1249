//! Line rendering for the two sinks.
//!
//! Console: `HH:MM:SS LEVEL file:line: message`. With the `color` feature the
//! level name is wrapped in its color and the location is dimmed.
//! File: `YYYY-MM-DD HH:MM:SS LEVEL file:line: message`, never colored.

use std::fmt;
use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::level::{LEVEL_NAME_WIDTH, Level};

pub const CONSOLE_TIME_FORMAT: &str = "%H:%M:%S";
pub const FILE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(feature = "color")]
const RESET: &str = "\x1b[0m";
#[cfg(feature = "color")]
const DIM: &str = "\x1b[90m";

/// Source position cited in a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> Location<'a> {
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }
}

impl From<&'static std::panic::Location<'static>> for Location<'static> {
    fn from(caller: &'static std::panic::Location<'static>) -> Self {
        Self::new(caller.file(), caller.line())
    }
}

pub(crate) fn write_console_line(
    out: &mut dyn Write,
    now: &DateTime<Local>,
    level: Level,
    location: Location<'_>,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    write_console_prefix(out, &now.format(CONSOLE_TIME_FORMAT), level, location)?;
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(feature = "color")]
fn write_console_prefix(
    out: &mut dyn Write,
    time: &dyn fmt::Display,
    level: Level,
    location: Location<'_>,
) -> io::Result<()> {
    write!(
        out,
        "{time} {}{:<width$}{RESET} {DIM}{}:{}:{RESET} ",
        level.color(),
        level,
        location.file,
        location.line,
        width = LEVEL_NAME_WIDTH,
    )
}

#[cfg(not(feature = "color"))]
fn write_console_prefix(
    out: &mut dyn Write,
    time: &dyn fmt::Display,
    level: Level,
    location: Location<'_>,
) -> io::Result<()> {
    write!(
        out,
        "{time} {:<width$} {}:{}: ",
        level,
        location.file,
        location.line,
        width = LEVEL_NAME_WIDTH,
    )
}

pub(crate) fn write_file_line(
    out: &mut dyn Write,
    now: &DateTime<Local>,
    level: Level,
    location: Location<'_>,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    write!(
        out,
        "{} {:<width$} {}:{}: ",
        now.format(FILE_TIME_FORMAT),
        level,
        location.file,
        location.line,
        width = LEVEL_NAME_WIDTH,
    )?;
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 3)
            .earliest()
            .expect("unambiguous local time")
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        write(&mut buf).expect("write to vec");
        String::from_utf8(buf).expect("utf-8")
    }

    #[cfg(not(feature = "color"))]
    #[test]
    fn console_line_pads_level_and_cites_location() {
        let line = render(|out| {
            write_console_line(
                out,
                &fixed_time(),
                Level::Warn,
                Location::new("disk.c", 42),
                format_args!("disk {}% full", 87),
            )
        });
        assert_eq!(line, "07:05:03 WARN  disk.c:42: disk 87% full\n");
    }

    #[cfg(feature = "color")]
    #[test]
    fn console_line_colors_level_and_dims_location() {
        let line = render(|out| {
            write_console_line(
                out,
                &fixed_time(),
                Level::Warn,
                Location::new("disk.c", 42),
                format_args!("disk {}% full", 87),
            )
        });
        assert_eq!(
            line,
            "07:05:03 \x1b[33mWARN \x1b[0m \x1b[90mdisk.c:42:\x1b[0m disk 87% full\n"
        );
    }

    #[test]
    fn file_line_carries_the_date_and_no_color() {
        let line = render(|out| {
            write_file_line(
                out,
                &fixed_time(),
                Level::Error,
                Location::new("src/main.rs", 7),
                format_args!("boom"),
            )
        });
        assert_eq!(line, "2024-03-09 07:05:03 ERROR src/main.rs:7: boom\n");
    }

    #[test]
    fn caller_location_converts() {
        let here = Location::from(std::panic::Location::caller());
        assert!(here.file.ends_with("format.rs"));
        assert!(here.line > 0);
    }
}
