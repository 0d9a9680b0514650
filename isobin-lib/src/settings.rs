//! Persisted settings: `~/.config/isobin/settings.toml`.
//!
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ConvertOptions;
use crate::convert::WriteMode;

/// Errors from loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for converted artifacts; next to the source image when unset.
    pub output_dir: Option<PathBuf>,
    pub output_prefix: String,
    /// Clear a consumed PREGAP instead of carrying it to later tracks.
    pub reset_pregap: bool,
    /// Use the TRACK line's mode token as the track type.
    pub track_type_from_mode: bool,
    /// Write through a temporary file and rename into place.
    pub atomic_writes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let options = ConvertOptions::default();
        Self {
            output_dir: options.output_dir,
            output_prefix: options.output_prefix,
            reset_pregap: options.parse.reset_pregap,
            track_type_from_mode: options.parse.type_from_mode,
            atomic_writes: options.write_mode == WriteMode::Atomic,
        }
    }
}

impl Settings {
    pub fn to_options(&self) -> ConvertOptions {
        let mut options = ConvertOptions::new()
            .output_prefix(self.output_prefix.clone())
            .reset_pregap(self.reset_pregap)
            .type_from_mode(self.track_type_from_mode)
            .write_mode(if self.atomic_writes {
                WriteMode::Atomic
            } else {
                WriteMode::Direct
            });
        if let Some(dir) = &self.output_dir {
            options = options.output_dir(dir);
        }
        options
    }
}

/// Canonical settings location: `~/.config/isobin/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("isobin").join("settings.toml")
}

/// Load settings from `path`, falling back to defaults when the file does not exist.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&contents).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
