//! Incremental WAV reading.
//!
//! [`WavReader`] parses the container header up front, then decodes samples
//! on demand into caller-provided buffers. Two output widths are offered:
//!
//! - [`WavReader::read_i16`] for the common 16-bit PCM case, decoding
//!   without any conversion;
//! - [`WavReader::read_i32`] for every supported source format, widening
//!   narrow PCM so proportional amplitude is preserved and passing float
//!   samples through as raw bit patterns.
//!
//! Both stop early at end of data and report how many samples they
//! produced; fewer than requested is not an error.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use byteorder::LittleEndian;

use crate::endian;
use crate::error::{WavError, WavResult};
use crate::header::{self, ParsedHeader};
use crate::info::{SampleFormat, WavInfo};
use crate::pcm;
use crate::source::{fill, IoSource, Source};

/// Reads samples from a parsed WAV stream.
#[derive(Debug)]
pub struct WavReader<S: Source> {
    source: S,
    info: WavInfo,
    remaining: u64,
    failed: bool,
}

impl WavReader<IoSource<BufReader<File>>> {
    /// Opens a WAV file and parses its header.
    pub fn open<P: AsRef<Path>>(path: P) -> WavResult<Self> {
        Self::new(IoSource::open(path)?)
    }
}

impl<S: Source> WavReader<S> {
    /// Parses the WAV header from `source`.
    ///
    /// On success the source is positioned at the first sample byte and
    /// the reader is ready to decode. Pass `&mut source` to keep ownership
    /// of the source; the reader never closes the underlying transport.
    pub fn new(mut source: S) -> WavResult<Self> {
        let ParsedHeader { info, data_len } = header::read_header(&mut source)?;
        let remaining = data_len / u64::from(info.bytes_per_sample);
        Ok(WavReader {
            source,
            info,
            remaining,
            failed: false,
        })
    }

    /// Format of the stream.
    pub fn info(&self) -> &WavInfo {
        &self.info
    }

    /// Interleaved sample values left in the data chunk, per its declared
    /// size. A stream shorter than declared ends earlier than this.
    pub fn remaining_samples(&self) -> u64 {
        self.remaining
    }

    /// Releases the reader, giving the source back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Decodes up to `dst.len()` 16-bit samples into `dst`, returning the
    /// count produced.
    ///
    /// Only valid for 16-bit PCM sources; any other format is an
    /// `UnsupportedFormat` error ([`WavReader::read_i32`] handles those).
    /// The count equals `min(dst.len(), remaining_samples())` unless the
    /// stream ends first.
    pub fn read_i16(&mut self, dst: &mut [i16]) -> WavResult<usize> {
        if self.info.sample_format != SampleFormat::Int16 {
            return Err(WavError::unsupported(format!(
                "16-bit decode requires a 16-bit PCM source, stream holds {} samples",
                self.info.sample_format
            )));
        }
        self.read_samples(dst, |bytes, _| {
            endian::read_i16::<LittleEndian>(&[bytes[0], bytes[1]])
        })
    }

    /// Decodes up to `dst.len()` samples into `dst` as 32-bit values,
    /// returning the count produced.
    ///
    /// 8-, 16-, and 24-bit PCM are widened to the full 32-bit range;
    /// 32-bit PCM passes through unchanged. Float samples are stored as
    /// their raw bit patterns; run
    /// [`float_bits_to_int32`](crate::pcm::float_bits_to_int32) over the
    /// buffer to turn them into integer amplitudes. The count equals
    /// `min(dst.len(), remaining_samples())` unless the stream ends first.
    pub fn read_i32(&mut self, dst: &mut [i32]) -> WavResult<usize> {
        self.read_samples(dst, decode_i32)
    }

    /// Shared decode loop: pulls one stored sample at a time and converts
    /// it with `decode`.
    ///
    /// A hard I/O failure after some samples were already produced reports
    /// the partial count; the failure itself is rethrown on the next call.
    /// Running out of data is not a failure, only a shorter count.
    fn read_samples<T>(
        &mut self,
        dst: &mut [T],
        decode: fn(&[u8; 4], &WavInfo) -> T,
    ) -> WavResult<usize> {
        if self.failed {
            return Err(WavError::Io(io::Error::other(
                "stream failed during an earlier read",
            )));
        }
        let goal = u64::min(dst.len() as u64, self.remaining) as usize;
        let width = usize::from(self.info.bytes_per_sample);
        let mut scratch = [0u8; 4];
        let mut decoded = 0;
        while decoded < goal {
            let obtained = match fill(&mut self.source, &mut scratch[..width]) {
                Ok(n) => n,
                Err(error) => {
                    self.failed = true;
                    if decoded == 0 {
                        return Err(error);
                    }
                    break;
                }
            };
            if obtained < width {
                // End of data, possibly inside a final incomplete sample;
                // that fragment is dropped.
                break;
            }
            dst[decoded] = decode(&scratch, &self.info);
            decoded += 1;
        }
        self.remaining -= decoded as u64;
        Ok(decoded)
    }
}

/// Converts one stored sample, occupying the first `bytes_per_sample`
/// bytes of `bytes`, to `i32`.
///
/// Samples sit in the low bytes of their container: a 24-bit sample in a
/// 4-byte container occupies the low three bytes and its pad byte carries
/// no information, so both 24-bit layouts decode through the same
/// sign-extending three-byte read.
fn decode_i32(bytes: &[u8; 4], info: &WavInfo) -> i32 {
    match info.sample_format {
        SampleFormat::Int8 => pcm::widen_u8(bytes[0]),
        SampleFormat::Int16 => {
            pcm::widen_i16(endian::read_i16::<LittleEndian>(&[bytes[0], bytes[1]]))
        }
        SampleFormat::Int24 => pcm::widen_i24(endian::read_i24::<LittleEndian>(&[
            bytes[0], bytes[1], bytes[2],
        ])),
        SampleFormat::Int32 | SampleFormat::Float32 => endian::read_i32::<LittleEndian>(bytes),
    }
}
