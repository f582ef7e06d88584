//! One-shot WAV decoding.
//!
//! Wraps [`WavReader`] for the common case of loading a whole stream into
//! memory: parse the header, size a buffer from the declared data length,
//! decode everything, release the source. Failures are atomic; an `Err`
//! never leaves the caller with a half-built buffer or an open handle.

use std::path::Path;

use crate::error::{WavError, WavResult};
use crate::pcm;
use crate::reader::WavReader;
use crate::source::{IoSource, Source};

/// A fully decoded WAV stream.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav<T> {
    /// Interleaved sample values, `channels` per frame.
    pub samples: Vec<T>,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
}

impl<T> DecodedWav<T> {
    /// Number of complete frames held in `samples`.
    pub fn num_frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / usize::from(self.channels)
    }

    /// Playback length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Decodes an entire WAV file as 16-bit samples.
///
/// Only valid for 16-bit PCM files; see [`decode_wav_i16`].
pub fn read_wav_file_i16<P: AsRef<Path>>(path: P) -> WavResult<DecodedWav<i16>> {
    decode_wav_i16(IoSource::open(path)?)
}

/// Decodes an entire WAV file as widened 32-bit samples.
///
/// Accepts any supported source format; see [`decode_wav_i32`].
pub fn read_wav_file_i32<P: AsRef<Path>>(path: P) -> WavResult<DecodedWav<i32>> {
    decode_wav_i32(IoSource::open(path)?)
}

/// Decodes an entire WAV stream from `source` as 16-bit samples.
///
/// The stream must be 16-bit PCM; any other format is an
/// `UnsupportedFormat` error. A stream shorter than its declared data
/// size yields the samples that were present.
pub fn decode_wav_i16<S: Source>(source: S) -> WavResult<DecodedWav<i16>> {
    let mut reader = WavReader::new(source)?;
    let samples = decode_all(&mut reader, WavReader::read_i16)?;
    Ok(finish(samples, &reader))
}

/// Decodes an entire WAV stream from `source` as 32-bit samples.
///
/// Narrow PCM formats are widened to the full 32-bit range. If the
/// stream holds float samples they are normalized with
/// [`float_bits_to_int32`](crate::pcm::float_bits_to_int32), so the
/// result is always integer amplitudes.
pub fn decode_wav_i32<S: Source>(source: S) -> WavResult<DecodedWav<i32>> {
    let mut reader = WavReader::new(source)?;
    let mut samples = decode_all(&mut reader, WavReader::read_i32)?;
    if reader.info().is_float() {
        pcm::float_bits_to_int32(&mut samples);
    }
    Ok(finish(samples, &reader))
}

/// Allocates for every declared sample, decodes until the stream runs
/// out, and trims the buffer to what was actually produced.
fn decode_all<S, T>(
    reader: &mut WavReader<S>,
    read: fn(&mut WavReader<S>, &mut [T]) -> WavResult<usize>,
) -> WavResult<Vec<T>>
where
    S: Source,
    T: Clone + Default,
{
    let mut samples = alloc_samples::<T>(reader.remaining_samples())?;
    let mut decoded = 0;
    while decoded < samples.len() {
        let count = read(reader, &mut samples[decoded..])?;
        if count == 0 {
            break;
        }
        decoded += count;
    }
    samples.truncate(decoded);
    Ok(samples)
}

/// Builds a zero-filled sample buffer, reporting allocation failure as a
/// `WavError` instead of aborting.
fn alloc_samples<T: Clone + Default>(count: u64) -> WavResult<Vec<T>> {
    let bytes = count.saturating_mul(std::mem::size_of::<T>() as u64);
    let count = usize::try_from(count).map_err(|_| WavError::allocation(bytes))?;
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| WavError::allocation(bytes))?;
    samples.resize(count, T::default());
    Ok(samples)
}

fn finish<S: Source, T>(samples: Vec<T>, reader: &WavReader<S>) -> DecodedWav<T> {
    let info = reader.info();
    DecodedWav {
        samples,
        channels: info.channels,
        sample_rate: info.sample_rate,
    }
}
