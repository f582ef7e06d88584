//! Brook WAV Reader
//!
//! This crate reads WAV audio containers into integer sample buffers.
//!
//! # Overview
//!
//! The reader walks the RIFF chunk sequence, validates the format chunk,
//! and decodes interleaved samples on demand. It supports:
//!
//! - **Pluggable sources** - files, in-memory slices, or any transport
//!   implementing the [`Source`] trait
//! - **Exact widening** - 8/16/24-bit PCM scaled to occupy the full
//!   32-bit range, preserving proportional amplitude
//! - **Float passthrough** - 32-bit float samples decoded as raw bit
//!   patterns, with a separate normalization pass to integer amplitudes
//! - **Streaming or one-shot** - incremental reads into caller-provided
//!   buffers, or whole-file decoding in a single call
//!
//! # Unknown Chunks
//!
//! Chunks other than `fmt ` and `data` are skipped. A source can observe
//! them instead by overriding [`Source::on_unknown_chunk`] or by wrapping
//! itself in a [`ChunkInspector`].
//!
//! # Example
//!
//! ```
//! use brook_wav::{SliceSource, WavReader};
//!
//! let bytes = [
//!     b'R', b'I', b'F', b'F', 42, 0, 0, 0, b'W', b'A', b'V', b'E',
//!     // fmt chunk: PCM, mono, 44.1 kHz, 16-bit.
//!     b'f', b'm', b't', b' ', 16, 0, 0, 0,
//!     1, 0, 1, 0, 0x44, 0xAC, 0, 0, 0x88, 0x58, 1, 0, 2, 0, 16, 0,
//!     // data chunk: three samples.
//!     b'd', b'a', b't', b'a', 6, 0, 0, 0,
//!     0xE8, 0x03, 0x18, 0xFC, 0xFF, 0x7F,
//! ];
//!
//! let mut reader = WavReader::new(SliceSource::new(&bytes))?;
//! assert_eq!(reader.info().sample_rate, 44100);
//! assert_eq!(reader.info().channels, 1);
//! assert_eq!(reader.remaining_samples(), 3);
//!
//! let mut samples = [0i16; 3];
//! let count = reader.read_i16(&mut samples)?;
//! assert_eq!(count, 3);
//! assert_eq!(samples, [1000, -1000, 32767]);
//! # Ok::<(), brook_wav::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`reader`] - Incremental decoding through [`WavReader`]
//! - [`decode`] - One-shot decoding of whole files or streams
//! - [`source`] - Byte-source trait with file and memory implementations
//! - [`endian`] - Explicit-endianness scalar codec
//! - [`pcm`] - Sample widening and float normalization
//! - [`info`] - Stream format description
//! - [`error`] - Error type shared across the crate

mod header;

pub mod decode;
pub mod endian;
pub mod error;
pub mod info;
pub mod pcm;
pub mod reader;
pub mod source;

// Re-export main types at crate root
pub use decode::{decode_wav_i16, decode_wav_i32, read_wav_file_i16, read_wav_file_i32, DecodedWav};
pub use error::{WavError, WavResult};
pub use info::{SampleFormat, WavInfo};
pub use reader::WavReader;
pub use source::{ChunkId, ChunkInspector, IoSource, SliceSource, Source};
