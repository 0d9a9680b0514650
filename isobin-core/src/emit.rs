//! Re-emission of extracted tracks as a single BIN image and its CUE sheet.

use std::io::{self, Write};

use crate::extract::ExtractedTrack;

/// Write every track's bytes to `writer`, in order, with nothing between them.
///
/// Returns the number of bytes written.
pub fn write_image_to<W: Write>(
    tracks: &[ExtractedTrack<'_>],
    writer: &mut W,
) -> io::Result<u64> {
    let mut written = 0u64;
    for track in tracks {
        writer.write_all(track.data)?;
        written += track.data.len() as u64;
    }
    writer.flush()?;
    Ok(written)
}

/// Render the CUE sheet for a single-file BIN named `bin_name`.
///
/// Each `INDEX 01` reuses the track's original starting time unchanged.
pub fn render_descriptor(bin_name: &str, tracks: &[ExtractedTrack<'_>]) -> String {
    let mut out = format!("FILE \"{bin_name}\" BINARY\n");
    for track in tracks {
        let record = track.record;
        out.push_str(&format!(
            "  TRACK {:02} {}\n",
            record.number, record.track_type
        ));
        if let Some(pregap) = record.pregap.as_deref().filter(|p| !p.is_empty()) {
            out.push_str(&format!("    PREGAP {pregap}\n"));
        }
        out.push_str(&format!("    INDEX 01 {}\n", record.starting_time));
    }
    out
}

/// Write the CUE sheet produced by [`render_descriptor`] to `writer`.
pub fn write_descriptor_to<W: Write>(
    bin_name: &str,
    tracks: &[ExtractedTrack<'_>],
    writer: &mut W,
) -> io::Result<()> {
    writer.write_all(render_descriptor(bin_name, tracks).as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "tests/emit_tests.rs"]
mod tests;
