use thiserror::Error;

use isobin_lib::{ConvertError, SettingsError};

/// Errors that stop the CLI before any conversion starts.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Settings file could not be loaded
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Input discovery failed
    #[error("{0}")]
    Convert(#[from] ConvertError),
}
