//! Single-image conversion: read the ISO and its CUE sheet, extract the
//! tracks, write `{stem}.bin` and `{stem}.cue`.

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use isobin_core::cue::{self, Descriptor};
use isobin_core::{ConvertError, ExtractedTrack, extract, write_descriptor_to, write_image_to};

use crate::ConvertOptions;
use crate::scanner::sibling_descriptor;

/// How an artifact reaches its final path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a sibling `.tmp` file, then rename it over the destination.
    Atomic,
    /// Write the destination directly; a failure leaves a truncated file.
    Direct,
}

/// The two artifacts produced by a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub source: PathBuf,
    pub bin_path: PathBuf,
    pub cue_path: PathBuf,
    pub track_count: usize,
    pub bytes_written: u64,
}

/// One track of a [`ConversionPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPlan {
    pub number: u32,
    pub track_type: String,
    pub starting_time: String,
    pub pregap: Option<String>,
    pub offset: u64,
    pub length: u64,
}

/// What a conversion would do, computed without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    pub source: PathBuf,
    pub descriptor_path: PathBuf,
    pub bin_path: PathBuf,
    pub cue_path: PathBuf,
    pub image_len: u64,
    pub tracks: Vec<TrackPlan>,
}

/// Inputs of one conversion, loaded into memory.
struct LoadedInputs {
    descriptor_path: PathBuf,
    image: Vec<u8>,
    descriptor: Descriptor,
}

fn load_inputs(image_path: &Path, options: &ConvertOptions) -> Result<LoadedInputs, ConvertError> {
    if !image_path.is_file() {
        return Err(ConvertError::missing_input(image_path));
    }
    let descriptor_path = sibling_descriptor(image_path)?;

    let image = fs::read(image_path)?;
    log::debug!("Read {} bytes from {}", image.len(), image_path.display());

    let text = fs::read_to_string(&descriptor_path)?;
    let descriptor = cue::parse_lines(text.lines(), options.parse)?;

    Ok(LoadedInputs {
        descriptor_path,
        image,
        descriptor,
    })
}

/// Where the artifacts for `image_path` go, without extension.
fn output_stem(image_path: &Path, options: &ConvertOptions) -> Result<PathBuf, ConvertError> {
    let stem = image_path
        .file_stem()
        .ok_or_else(|| ConvertError::missing_input(image_path))?;
    let dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => image_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let mut name = OsString::from(&options.output_prefix);
    name.push(stem);
    Ok(dir.join(name))
}

/// Append an extension without touching dots already in the stem.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// `path` with symlinks and `..` resolved. An output that does not exist yet
/// is resolved through its parent directory.
fn resolved(path: &Path) -> PathBuf {
    if let Ok(path) = fs::canonicalize(path) {
        return path;
    }
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    fs::canonicalize(parent)
        .map(|dir| dir.join(name))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn refuse_overwrite(output: &Path, inputs: [&Path; 2]) -> Result<(), ConvertError> {
    let target = resolved(output);
    if inputs.iter().any(|input| resolved(input) == target) {
        return Err(ConvertError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("output {} would overwrite an input", output.display()),
        )));
    }
    Ok(())
}

/// Both artifact paths for `stem`, after checking neither is an input.
fn output_paths(
    stem: &Path,
    image_path: &Path,
    descriptor_path: &Path,
) -> Result<(PathBuf, PathBuf), ConvertError> {
    let bin_path = with_suffix(stem, ".bin");
    let cue_path = with_suffix(stem, ".cue");
    for output in [&bin_path, &cue_path] {
        refuse_overwrite(output, [image_path, descriptor_path])?;
    }
    Ok((bin_path, cue_path))
}

/// Work out the per-track byte ranges and output paths for `image_path`.
pub fn plan_conversion(
    image_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionPlan, ConvertError> {
    let inputs = load_inputs(image_path, options)?;
    let tracks = extract(&inputs.image, &inputs.descriptor)?;
    let stem = output_stem(image_path, options)?;
    let (bin_path, cue_path) = output_paths(&stem, image_path, &inputs.descriptor_path)?;

    Ok(ConversionPlan {
        source: image_path.to_path_buf(),
        cue_path,
        bin_path,
        descriptor_path: inputs.descriptor_path,
        image_len: inputs.image.len() as u64,
        tracks: tracks
            .iter()
            .map(|t| TrackPlan {
                number: t.record.number,
                track_type: t.record.track_type.clone(),
                starting_time: t.record.starting_time.clone(),
                pregap: t.record.pregap.clone(),
                offset: t.offset as u64,
                length: t.len() as u64,
            })
            .collect(),
    })
}

/// Convert one ISO + CUE pair into a BIN + CUE pair.
pub fn convert_image(
    image_path: &Path,
    options: &ConvertOptions,
) -> Result<ConversionOutput, ConvertError> {
    let inputs = load_inputs(image_path, options)?;
    let tracks = extract(&inputs.image, &inputs.descriptor)?;

    let stem = output_stem(image_path, options)?;
    output_paths(&stem, image_path, &inputs.descriptor_path)?;

    let bin_path = write_image(&tracks, &stem, options.write_mode)?;
    let cue_path = write_descriptor(&bin_path, &tracks, options.write_mode)?;

    Ok(ConversionOutput {
        source: image_path.to_path_buf(),
        bytes_written: tracks.iter().map(|t| t.len() as u64).sum(),
        track_count: tracks.len(),
        bin_path,
        cue_path,
    })
}

/// Write the tracks, concatenated, to `{output_stem}.bin`.
pub fn write_image(
    tracks: &[ExtractedTrack<'_>],
    output_stem: &Path,
    mode: WriteMode,
) -> Result<PathBuf, ConvertError> {
    let bin_path = with_suffix(output_stem, ".bin");
    write_artifact(&bin_path, mode, |w| write_image_to(tracks, w).map(|_| ()))?;
    log::debug!("Wrote {}", bin_path.display());
    Ok(bin_path)
}

/// Write a CUE sheet next to `bin_path` that references it as a single file.
pub fn write_descriptor(
    bin_path: &Path,
    tracks: &[ExtractedTrack<'_>],
    mode: WriteMode,
) -> Result<PathBuf, ConvertError> {
    let bin_name = bin_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ConvertError::missing_input(bin_path))?;
    let cue_path = bin_path.with_extension("cue");
    write_artifact(&cue_path, mode, |w| write_descriptor_to(&bin_name, tracks, w))?;
    log::debug!("Wrote {}", cue_path.display());
    Ok(cue_path)
}

fn write_artifact<F>(path: &Path, mode: WriteMode, write: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> io::Result<()>,
{
    let target = match mode {
        WriteMode::Atomic => with_suffix(path, ".tmp"),
        WriteMode::Direct => path.to_path_buf(),
    };

    let result = fs::File::create(&target).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()
    });

    match mode {
        WriteMode::Atomic => result
            .and_then(|()| fs::rename(&target, path))
            .inspect_err(|_| {
                let _ = fs::remove_file(&target);
            }),
        WriteMode::Direct => result,
    }
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod tests;
