//! Filesystem side of the conversion: finding inputs, reading them, writing
//! the BIN/CUE artifacts, and driving a batch of conversions.

use std::path::PathBuf;

pub mod batch;
pub mod convert;
pub mod progress;
pub mod scanner;
pub mod settings;

pub use batch::{BatchFailure, BatchSummary, convert_all};
pub use convert::{
    ConversionOutput, ConversionPlan, TrackPlan, WriteMode, convert_image, plan_conversion,
    write_descriptor, write_image,
};
pub use progress::ConvertProgress;
pub use scanner::{collect_inputs, sibling_descriptor};
pub use settings::{Settings, SettingsError};

pub use isobin_core::{ConvertError, ParseOptions};

/// Options that control where and how a conversion writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory for the artifacts. `None` writes next to the source image.
    pub output_dir: Option<PathBuf>,
    /// Prepended to the image's file stem to form the output stem.
    pub output_prefix: String,
    pub parse: ParseOptions,
    pub write_mode: WriteMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            output_prefix: "_".to_string(),
            parse: ParseOptions::default(),
            write_mode: WriteMode::Atomic,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    pub fn reset_pregap(mut self, reset: bool) -> Self {
        self.parse.reset_pregap = reset;
        self
    }

    /// Take each track's type from the mode token (`AUDIO`, `MODE1/2352`)
    /// instead of the token right after `TRACK`.
    pub fn type_from_mode(mut self, from_mode: bool) -> Self {
        self.parse.type_from_mode = from_mode;
        self
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}
