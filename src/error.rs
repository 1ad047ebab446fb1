//! Library error type.

use thiserror::Error;

/// Errors produced by generation, metering and settings persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// Password length is zero or above the configured maximum.
    #[error("invalid password length {0}")]
    InvalidLength(usize),

    /// A strength meter needs at least one bar.
    #[error("strength meter needs at least one bar")]
    NoBars,

    /// No platform configuration directory could be resolved.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// Clipboard could not be opened or written.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SettingsParse(#[from] toml::de::Error),

    #[error(transparent)]
    SettingsWrite(#[from] toml::ser::Error),
}
