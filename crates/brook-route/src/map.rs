//! Channel remapping with per-channel gains.
//!
//! A [`ChannelMap`] describes, for every output channel, which input
//! channel feeds it and at what linear gain:
//!
//! ```text
//! output[c] = gain[c] * input[source[c]]
//! ```
//!
//! Maps are parsed from two comma-delimited lists, typically taken
//! straight from command-line flags: base-1 source indices (`0` meaning
//! "fill with silence") and gains in decibels. Base-1 indexing matches
//! the labeling on multichannel audio hardware.

use std::fmt;

use crate::error::{RouteError, RouteResult};

/// Most output channels a parsed map may describe.
pub const MAX_CHANNELS: usize = 32;

/// One output channel: where it comes from and how loud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMapEntry {
    /// Base-0 input channel feeding this output, or `None` for silence.
    pub source: Option<usize>,
    /// Linear amplitude gain.
    pub gain: f32,
}

/// Remapping and gains for an interleaved multichannel signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMap {
    entries: Vec<ChannelMapEntry>,
    input_channels: usize,
}

impl ChannelMap {
    /// Parses a map from comma-delimited source and gain lists.
    ///
    /// `sources` holds one base-1 input channel index per output channel;
    /// `0` fills that output with silence. `gains_db` holds gains in
    /// decibels. Outputs missing from a short gain list default to 0 dB,
    /// and excess gain entries are ignored. Whitespace around either
    /// kind of element is tolerated.
    ///
    /// Fails if the source list is empty or malformed, names more than
    /// [`MAX_CHANNELS`] outputs, or references an input channel beyond
    /// `input_channels`.
    pub fn parse(input_channels: usize, sources: &str, gains_db: &str) -> RouteResult<Self> {
        let source_tokens: Vec<&str> = sources.split(',').map(str::trim).collect();
        if source_tokens.len() > MAX_CHANNELS {
            return Err(RouteError::TooManyChannels {
                count: source_tokens.len(),
                limit: MAX_CHANNELS,
            });
        }
        let gain_tokens: Vec<&str> = if gains_db.trim().is_empty() {
            Vec::new()
        } else {
            gains_db.split(',').map(str::trim).collect()
        };

        let mut entries = Vec::with_capacity(source_tokens.len());
        for (index, token) in source_tokens.iter().enumerate() {
            let channel: usize = token.parse().map_err(|_| RouteError::InvalidToken {
                list: "source",
                token: (*token).to_string(),
            })?;
            let source = match channel {
                0 => None,
                c if c > input_channels => {
                    return Err(RouteError::SourceOutOfRange {
                        channel: c,
                        input_channels,
                    });
                }
                c => Some(c - 1),
            };
            let gain = match gain_tokens.get(index) {
                Some(text) => {
                    let db: f32 = text.parse().map_err(|_| RouteError::InvalidToken {
                        list: "gain",
                        token: (*text).to_string(),
                    })?;
                    db_to_linear(db)
                }
                None => 1.0,
            };
            entries.push(ChannelMapEntry { source, gain });
        }
        Ok(ChannelMap {
            entries,
            input_channels,
        })
    }

    /// Output channel descriptions, in output order.
    pub fn entries(&self) -> &[ChannelMapEntry] {
        &self.entries
    }

    /// Number of output channels the map describes.
    pub fn output_channels(&self) -> usize {
        self.entries.len()
    }

    /// Number of input channels the map was parsed against.
    pub fn input_channels(&self) -> usize {
        self.input_channels
    }

    /// Applies the map to `num_frames` frames of interleaved samples.
    ///
    /// `input` holds `input_channels()` samples per frame and `output`
    /// holds `output_channels()` per frame. Samples are scaled without
    /// clipping, so outputs may leave the normalized range; silence
    /// outputs are written as exactly zero.
    ///
    /// # Panics
    ///
    /// Panics if either slice length does not equal its channel count
    /// times `num_frames`.
    pub fn apply(&self, input: &[f32], num_frames: usize, output: &mut [f32]) {
        assert_eq!(input.len(), self.input_channels * num_frames);
        assert_eq!(output.len(), self.entries.len() * num_frames);
        for frame in 0..num_frames {
            let in_frame = &input[frame * self.input_channels..][..self.input_channels];
            let out_frame = &mut output[frame * self.entries.len()..][..self.entries.len()];
            for (slot, entry) in out_frame.iter_mut().zip(&self.entries) {
                *slot = match entry.source {
                    Some(source) => entry.gain * in_frame[source],
                    None => 0.0,
                };
            }
        }
    }
}

impl fmt::Display for ChannelMap {
    /// Lists one output per line, with sources in base-1 as users write
    /// them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            match entry.source {
                Some(source) => writeln!(
                    f,
                    "output {} <- {:.3} * input {}",
                    index + 1,
                    entry.gain,
                    source + 1
                )?,
                None => writeln!(f, "output {} <- silence", index + 1)?,
            }
        }
        Ok(())
    }
}

/// Converts a decibel gain to a linear amplitude ratio.
fn db_to_linear(db: f32) -> f32 {
    10.0f32.powf(db / 20.0)
}
