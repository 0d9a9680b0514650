//! CUE sheet (track descriptor) parsing.
//!
//! Only the three directives that matter for re-anchoring tracks are read:
//! `TRACK`, `PREGAP` and `INDEX 01`. Everything else (`FILE`, `REM`,
//! `INDEX 00`, `POSTGAP`, ...) is skipped.

use crate::ConvertError;

/// One physical track on the disc, as declared by the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// 1-based position in parse order. Any number written in the `TRACK` line is ignored.
    pub number: u32,
    /// Token from the `TRACK` line, passed through verbatim. See [`ParseOptions::type_from_mode`].
    pub track_type: String,
    /// `INDEX 01` timecode, kept as written.
    pub starting_time: String,
    /// `PREGAP` timecode, if one was pending when this track's `INDEX 01` was seen.
    pub pregap: Option<String>,
}

/// Tracks in descriptor order. This order is trusted as disc order; nothing is re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    pub tracks: Vec<TrackRecord>,
}

impl Descriptor {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Options that control descriptor parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Clear the pending pregap once a track has consumed it.
    ///
    /// Off by default: a pregap then stays attached to every following track
    /// until another `PREGAP` line replaces it.
    pub reset_pregap: bool,

    /// Take the track type from the mode token (`TRACK 01 AUDIO` gives `AUDIO`).
    ///
    /// Off by default: the type is the token right after `TRACK`, which is
    /// the track number in well-formed sheets. A `TRACK` line without a mode
    /// token falls back to that token either way.
    pub type_from_mode: bool,
}

/// Running state carried from one descriptor line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Number of `TRACK` lines seen so far.
    pub track_counter: u32,
    /// Type token of the most recent `TRACK` line.
    pub track_type: String,
    /// Pregap waiting to be attached by the next `INDEX 01`.
    pub pending_pregap: Option<String>,
}

impl ParserState {
    /// Consume one line, returning the next state and the record it completes, if any.
    pub fn step(
        self,
        line: &str,
        options: ParseOptions,
    ) -> Result<(Self, Option<TrackRecord>), ConvertError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["TRACK", second, rest @ ..] => {
                let track_type = match rest.first() {
                    Some(mode) if options.type_from_mode => mode,
                    _ => second,
                };
                Ok((
                    Self {
                        track_counter: self.track_counter + 1,
                        track_type: (*track_type).to_string(),
                        ..self
                    },
                    None,
                ))
            }
            ["TRACK"] => Err(ConvertError::format("TRACK line has no track type")),
            ["PREGAP", pregap, ..] => Ok((
                Self {
                    pending_pregap: Some((*pregap).to_string()),
                    ..self
                },
                None,
            )),
            ["PREGAP"] => Err(ConvertError::format("PREGAP line has no timecode")),
            ["INDEX", "01", starting_time, ..] => {
                if self.track_counter == 0 {
                    return Err(ConvertError::format("INDEX 01 appears before any TRACK"));
                }
                let record = TrackRecord {
                    number: self.track_counter,
                    track_type: self.track_type.clone(),
                    starting_time: (*starting_time).to_string(),
                    pregap: self.pending_pregap.clone(),
                };
                let pending_pregap = if options.reset_pregap {
                    None
                } else {
                    self.pending_pregap
                };
                Ok((
                    Self {
                        pending_pregap,
                        ..self
                    },
                    Some(record),
                ))
            }
            ["INDEX", "01"] => Err(ConvertError::format("INDEX 01 line has no timecode")),
            _ => Ok((self, None)),
        }
    }
}

/// Parse a descriptor given as a sequence of lines.
///
/// A fold over the lines: each line maps the running [`ParserState`] to its
/// successor and may emit one completed [`TrackRecord`].
pub fn parse_lines<I, S>(lines: I, options: ParseOptions) -> Result<Descriptor, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (state, tracks) = lines.into_iter().enumerate().try_fold(
        (ParserState::default(), Vec::new()),
        |(state, mut tracks), (index, line)| {
            let (state, record) = state
                .step(line.as_ref().trim(), options)
                .map_err(|e| e.context(format_args!("line {}", index + 1)))?;
            tracks.extend(record);
            Ok::<_, ConvertError>((state, tracks))
        },
    )?;

    if state.track_counter as usize > tracks.len() {
        log::debug!(
            "{} TRACK line(s) without INDEX 01 were dropped",
            state.track_counter as usize - tracks.len()
        );
    }
    log::debug!("Parsed {} track(s) from descriptor", tracks.len());

    Ok(Descriptor { tracks })
}

/// Parse a descriptor from its full text.
pub fn parse(text: &str, options: ParseOptions) -> Result<Descriptor, ConvertError> {
    parse_lines(text.lines(), options)
}

#[cfg(test)]
#[path = "tests/cue_tests.rs"]
mod tests;
