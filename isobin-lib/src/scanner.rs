//! Input discovery.
//!
//! A path is either one image file, or a directory whose immediate
//! subfolders each hold zero or more `.iso` images.

use std::path::{Path, PathBuf};

use isobin_core::ConvertError;

const IMAGE_EXTENSION: &str = "iso";

/// Extensions tried, in order, when looking for an image's CUE sheet.
const DESCRIPTOR_EXTENSIONS: &[&str] = &["cue", "CUE"];

/// Resolve the images to convert from a user-supplied path.
///
/// A file is returned as-is, whatever its extension. A directory yields the
/// `.iso` files (case-insensitive) found one level down, in sorted order;
/// images directly inside the directory are not considered.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(ConvertError::missing_input(path));
    }

    let mut subfolders: Vec<PathBuf> = std::fs::read_dir(path)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    subfolders.sort();

    let mut inputs = Vec::new();
    for folder in &subfolders {
        match images_in(folder) {
            Ok(mut images) => inputs.append(&mut images),
            Err(e) => log::warn!("Skipping {}: {}", folder.display(), e),
        }
    }
    log::debug!(
        "Found {} image(s) in {} subfolder(s) of {}",
        inputs.len(),
        subfolders.len(),
        path.display()
    );
    Ok(inputs)
}

fn images_in(folder: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = std::fs::read_dir(folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();
    images.sort();
    Ok(images)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(IMAGE_EXTENSION))
        .unwrap_or(false)
}

/// Find the CUE sheet sharing the image's file stem in the same directory.
pub fn sibling_descriptor(image: &Path) -> Result<PathBuf, ConvertError> {
    DESCRIPTOR_EXTENSIONS
        .iter()
        .map(|ext| image.with_extension(ext))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| ConvertError::missing_input(image.with_extension(DESCRIPTOR_EXTENSIONS[0])))
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
