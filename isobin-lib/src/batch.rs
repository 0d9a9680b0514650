//! Sequential conversion of many images.
//!
//! A failure aborts only the conversion in progress: it is recorded and the
//! batch continues with the next input. Partially written artifacts of a
//! failed conversion are left as they are.

use std::path::{Path, PathBuf};

use crate::ConvertOptions;
use crate::convert::{ConversionOutput, convert_image};
use crate::progress::ConvertProgress;

/// An input that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of [`convert_all`].
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub converted: Vec<ConversionOutput>,
    pub failed: Vec<BatchFailure>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }
}

/// Convert each input in order, reporting progress through `on_progress`.
pub fn convert_all<P, F>(
    inputs: &[P],
    options: &ConvertOptions,
    mut on_progress: F,
) -> BatchSummary
where
    P: AsRef<Path>,
    F: FnMut(ConvertProgress),
{
    let total = inputs.len();
    let mut summary = BatchSummary::default();
    on_progress(ConvertProgress::Started { total });

    for (index, input) in inputs.iter().enumerate() {
        let path = input.as_ref();
        on_progress(ConvertProgress::Converting {
            path: path.to_path_buf(),
            index,
            total,
        });

        match convert_image(path, options) {
            Ok(output) => {
                log::debug!(
                    "Converted {} ({} tracks, {} bytes)",
                    path.display(),
                    output.track_count,
                    output.bytes_written
                );
                on_progress(ConvertProgress::Converted(output.clone()));
                summary.converted.push(output);
            }
            Err(e) => {
                let failure = BatchFailure {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
                on_progress(ConvertProgress::Failed {
                    path: failure.path.clone(),
                    message: failure.message.clone(),
                });
                summary.failed.push(failure);
            }
        }
    }

    on_progress(ConvertProgress::Finished);
    summary
}
