use std::path::PathBuf;

use crate::convert::ConversionOutput;

/// Progress update sent while a batch of conversions runs.
#[derive(Debug, Clone)]
pub enum ConvertProgress {
    /// The batch has started
    Started { total: usize },

    /// A conversion is about to begin
    Converting {
        path: PathBuf,
        /// 0-based position in the batch
        index: usize,
        total: usize,
    },

    /// A conversion finished and both artifacts were written
    Converted(ConversionOutput),

    /// A conversion failed; the batch moves on to the next input
    Failed { path: PathBuf, message: String },

    /// Every input has been processed
    Finished,
}
