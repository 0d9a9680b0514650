//! Track extraction: turn descriptor timecodes into byte ranges of the image.

use crate::ConvertError;
use crate::cue::{Descriptor, TrackRecord};
use crate::msf::time_to_offset;

/// A track paired with its bytes, borrowed from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedTrack<'a> {
    pub record: &'a TrackRecord,
    /// Start of the track within the source image.
    pub offset: usize,
    pub data: &'a [u8],
}

impl ExtractedTrack<'_> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Compute every track's byte range and return views into `image`, in descriptor order.
///
/// Interior tracks end where the next track starts. The last track runs to
/// the end of the image. A track whose range is empty, negative or past the
/// end of the image is a [`ConvertError::Range`].
pub fn extract<'a>(
    image: &'a [u8],
    descriptor: &'a Descriptor,
) -> Result<Vec<ExtractedTrack<'a>>, ConvertError> {
    let starts = descriptor
        .tracks
        .iter()
        .map(|record| {
            time_to_offset(&record.starting_time)
                .map_err(|e| e.context(format_args!("track {:02}", record.number)))
        })
        .collect::<Result<Vec<u64>, _>>()?;

    descriptor
        .tracks
        .iter()
        .zip(&starts)
        .enumerate()
        .map(|(i, (record, &start))| {
            let track = match starts.get(i + 1) {
                Some(&next_start) => interior_length(start, next_start),
                None => final_length(start, image.len() as u64),
            }
            .and_then(|length| track_view(image, record, start, length))
            .map_err(|e| e.context(format_args!("track {:02}", record.number)))?;
            log::debug!(
                "Track {:02} ({}): offset {}, {} bytes",
                record.number,
                record.track_type,
                track.offset,
                track.len()
            );
            Ok::<_, ConvertError>(track)
        })
        .collect()
}

/// Length of a track bounded by the start of the track after it.
fn interior_length(start: u64, next_start: u64) -> Result<u64, ConvertError> {
    match next_start.checked_sub(start) {
        Some(0) => Err(ConvertError::range(format!(
            "starts at byte {start}, the same offset as the next track"
        ))),
        Some(length) => Ok(length),
        None => Err(ConvertError::range(format!(
            "starts at byte {start}, after the next track (byte {next_start}); length would be negative"
        ))),
    }
}

/// Length of the last track, bounded only by the image size.
fn final_length(start: u64, image_len: u64) -> Result<u64, ConvertError> {
    match image_len.checked_sub(start) {
        Some(0) => Err(ConvertError::range(format!(
            "starts at byte {start}, exactly at the end of the image"
        ))),
        Some(length) => Ok(length),
        None => Err(ConvertError::range(format!(
            "starts at byte {start}, beyond the end of the image ({image_len} bytes)"
        ))),
    }
}

fn track_view<'a>(
    image: &'a [u8],
    record: &'a TrackRecord,
    start: u64,
    length: u64,
) -> Result<ExtractedTrack<'a>, ConvertError> {
    let end = start.checked_add(length).filter(|&end| end <= image.len() as u64);
    let Some(end) = end else {
        return Err(ConvertError::range(format!(
            "range {start}+{length} exceeds the image ({} bytes)",
            image.len()
        )));
    };
    // Both bounds are <= image.len(), so they fit in usize.
    let (start, end) = (start as usize, end as usize);
    Ok(ExtractedTrack {
        record,
        offset: start,
        data: &image[start..end],
    })
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
