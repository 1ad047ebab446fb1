//! Generation settings.

mod file;

use serde::{Deserialize, Serialize};

use crate::entropy::Source;
use crate::meter::{DEFAULT_BARS, Meter};
use crate::pass::CharsetSpec;

pub use file::default_path;

/// Longest password the settings accept.
pub const MAX_LENGTH: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: usize,
    pub digits: bool,
    pub symbols: bool,
    pub uppercase: bool,
    pub bars: usize,
    pub source: Source,
}

impl Settings {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet.
    pub fn load_from_file() -> crate::Result<Self> {
        file::load(&default_path()?)
    }

    pub fn save_to_file(&self) -> crate::Result<()> {
        file::save(self, &default_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        file::load(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        file::save(self, path)
    }

    /// Reject settings that cannot produce a password or a meter.
    pub fn validate(&self) -> crate::Result<()> {
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(crate::Error::InvalidLength(self.length));
        }
        Meter::new(self.bars)?;
        Ok(())
    }

    pub fn meter(&self) -> crate::Result<Meter> {
        Meter::new(self.bars)
    }

    pub fn charset(&self) -> CharsetSpec {
        CharsetSpec::new(self.digits, self.symbols, self.uppercase)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            digits: true,
            symbols: true,
            uppercase: true,
            bars: DEFAULT_BARS,
            source: Source::Os,
        }
    }
}
