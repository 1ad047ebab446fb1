//! Settings file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Settings;
use crate::{Error, Result};

const APP_DIR: &str = "passgauge";
const FILE_NAME: &str = "settings.toml";

/// `<config dir>/passgauge/settings.toml`
pub fn default_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(Error::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

pub fn load(path: &Path) -> Result<Settings> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    let settings = toml::from_str(&text)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml::to_string_pretty(settings)?)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}
