//! Disc timecode (MSF) arithmetic.
//!
//! A timecode is `mm:ss:ff` where one frame is one raw 2352-byte sector and
//! 75 frames make up one second (Red Book).

use std::fmt;
use std::str::FromStr;

use crate::ConvertError;

/// Frames (sectors) per second of disc time.
pub const FRAMES_PER_SECOND: u64 = 75;

/// Seconds per minute of disc time.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Raw CD sector size (sync + header + data + EDC/ECC), one per frame.
pub const RAW_SECTOR_SIZE: u64 = 2352;

const FRAMES_PER_MINUTE: u64 = SECONDS_PER_MINUTE * FRAMES_PER_SECOND;

/// A disc timecode.
///
/// Field order gives the derived `Ord` the lexicographic (mm, ss, ff) order,
/// which is also byte offset order for valid timecodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Msf {
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Msf {
    pub fn new(minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            minutes,
            seconds,
            frames,
        }
    }

    /// Total number of frames from 00:00:00.
    pub fn total_frames(&self) -> u64 {
        self.minutes as u64 * FRAMES_PER_MINUTE
            + self.seconds as u64 * FRAMES_PER_SECOND
            + self.frames as u64
    }

    /// Byte offset of this timecode in a raw 2352-byte/sector image.
    ///
    /// Components are `u32`, so the product stays well inside `u64`.
    pub fn byte_offset(&self) -> u64 {
        self.total_frames() * RAW_SECTOR_SIZE
    }

    /// Build a normalized timecode from a frame count.
    pub fn from_frames(total_frames: u64) -> Result<Self, ConvertError> {
        let minutes = u32::try_from(total_frames / FRAMES_PER_MINUTE).map_err(|_| {
            ConvertError::range(format!("{total_frames} frames exceeds the timecode range"))
        })?;
        let rest = total_frames % FRAMES_PER_MINUTE;
        Ok(Self {
            minutes,
            seconds: (rest / FRAMES_PER_SECOND) as u32,
            frames: (rest % FRAMES_PER_SECOND) as u32,
        })
    }

    /// Convert a byte offset back to a timecode. The offset must sit on a sector boundary.
    pub fn from_offset(offset: u64) -> Result<Self, ConvertError> {
        if !offset.is_multiple_of(RAW_SECTOR_SIZE) {
            return Err(ConvertError::range(format!(
                "byte offset {offset} is not a multiple of the {RAW_SECTOR_SIZE}-byte sector size"
            )));
        }
        Self::from_frames(offset / RAW_SECTOR_SIZE)
    }
}

impl fmt::Display for Msf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for Msf {
    type Err = ConvertError;

    /// Parse `mm:ss:ff`. Exactly three numeric components are required and
    /// seconds/frames must be in range; nothing is defaulted or carried over.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [minutes, seconds, frames] = parts.as_slice() else {
            return Err(ConvertError::format(format!(
                "timecode '{s}' is not in mm:ss:ff form"
            )));
        };

        let minutes = parse_component(s, "minutes", minutes)?;
        let seconds = parse_component(s, "seconds", seconds)?;
        let frames = parse_component(s, "frames", frames)?;

        if seconds as u64 >= SECONDS_PER_MINUTE {
            return Err(ConvertError::format(format!(
                "timecode '{s}' has {seconds} seconds (must be below {SECONDS_PER_MINUTE})"
            )));
        }
        if frames as u64 >= FRAMES_PER_SECOND {
            return Err(ConvertError::format(format!(
                "timecode '{s}' has {frames} frames (must be below {FRAMES_PER_SECOND})"
            )));
        }

        Ok(Self::new(minutes, seconds, frames))
    }
}

fn parse_component(timecode: &str, name: &str, value: &str) -> Result<u32, ConvertError> {
    // u32::from_str would accept a leading '+'
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::format(format!(
            "timecode '{timecode}' has a non-numeric {name} component '{value}'"
        )));
    }
    value.parse().map_err(|_| {
        ConvertError::format(format!(
            "timecode '{timecode}' has an out-of-range {name} component '{value}'"
        ))
    })
}

/// Convert a `mm:ss:ff` timecode to a byte offset into a raw image.
pub fn time_to_offset(time: &str) -> Result<u64, ConvertError> {
    Ok(time.parse::<Msf>()?.byte_offset())
}

/// Convert a sector-aligned byte offset back to a `mm:ss:ff` timecode.
pub fn offset_to_time(offset: u64) -> Result<String, ConvertError> {
    Ok(Msf::from_offset(offset)?.to_string())
}

#[cfg(test)]
#[path = "tests/msf_tests.rs"]
mod tests;
