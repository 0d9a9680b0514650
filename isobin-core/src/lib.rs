//! Core of the ISO+CUE to BIN+CUE conversion.
//!
//! The pipeline is [`parse`](cue::parse) → [`extract`] → [`write_image_to`] /
//! [`write_descriptor_to`]. Nothing in this crate touches the filesystem;
//! callers hand in the image bytes and descriptor text and persist the output.

pub mod cue;
pub mod emit;
pub mod error;
pub mod extract;
pub mod msf;

pub use cue::{Descriptor, ParseOptions, ParserState, TrackRecord};
pub use emit::{render_descriptor, write_descriptor_to, write_image_to};
pub use error::ConvertError;
pub use extract::{ExtractedTrack, extract};
pub use msf::{Msf, RAW_SECTOR_SIZE, offset_to_time, time_to_offset};
