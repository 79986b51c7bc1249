use thiserror::Error;

/// Why a level could not be resolved or applied.
///
/// Setters that fail with one of these leave the logger's threshold as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Integer outside the contiguous TRACE..=FATAL range.
    #[error("tried to set bad log level {0}")]
    InvalidLevel(i32),

    /// Name that matches no canonical level name, ignoring ASCII case.
    #[error("level name '{0}' not found")]
    UnknownLevelName(String),

    /// Empty string passed where a level ordinal or name was expected.
    #[error("received empty level string")]
    EmptyInput,
}
