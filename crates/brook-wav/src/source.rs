//! Pluggable byte sources for the parser and decoder.
//!
//! Everything upstream of [`Source`] is transport-agnostic: the same parsing
//! and decoding code runs over files, in-memory buffers, or sockets. The
//! trait is deliberately small:
//!
//! - [`Source::read`] drains up to N bytes,
//! - [`Source::skip`] advances past bytes nobody wants to look at,
//! - [`Source::at_end`] reports whether the end of the stream was seen,
//! - [`Source::on_unknown_chunk`] lets a wrapper intercept chunks the
//!   parser does not recognize.
//!
//! Concrete implementations: [`IoSource`] for anything that implements
//! [`std::io::Read`] (including files and sockets), [`SliceSource`] for
//! borrowed memory, and [`ChunkInspector`] to attach an unknown-chunk
//! handler to either.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::WavResult;

/// A RIFF chunk identifier: four ASCII bytes.
pub type ChunkId = [u8; 4];

/// A readable byte stream the WAV parser can consume.
///
/// Implementations never own the notion of "a WAV file"; they only hand out
/// bytes. The parser borrows a source for the duration of one stream session
/// and never closes the underlying transport.
pub trait Source {
    /// Reads up to `buf.len()` bytes into `buf`, returning how many bytes
    /// were obtained. Returns `Ok(0)` only at end of stream (or for an
    /// empty buffer).
    fn read(&mut self, buf: &mut [u8]) -> WavResult<usize>;

    /// Advances the stream position by `count` bytes without interpreting
    /// them. Fails if the stream ends first.
    fn skip(&mut self, count: u64) -> WavResult<()>;

    /// Returns true once the end of the stream has been observed.
    ///
    /// Memory-backed sources know this immediately; readers over live
    /// transports learn it only after a read comes back empty.
    fn at_end(&self) -> bool;

    /// Invoked by the header parser for each chunk it does not recognize,
    /// before the chunk payload is consumed.
    ///
    /// Return `Ok(true)` if the handler consumed exactly `size` payload
    /// bytes itself (by reading or skipping); the parser then accounts for
    /// the RIFF pad byte on odd sizes. Return `Ok(false)` to have the
    /// parser skip the whole chunk. The default implementation skips
    /// everything.
    fn on_unknown_chunk(&mut self, id: ChunkId, size: u32) -> WavResult<bool> {
        let _ = (id, size);
        Ok(false)
    }
}

/// Reads until `buf` is full or the stream ends, returning the byte count
/// obtained.
pub(crate) fn fill<S: Source + ?Sized>(source: &mut S, buf: &mut [u8]) -> WavResult<usize> {
    let mut obtained = 0;
    while obtained < buf.len() {
        let n = source.read(&mut buf[obtained..])?;
        if n == 0 {
            break;
        }
        obtained += n;
    }
    Ok(obtained)
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> WavResult<usize> {
        (**self).read(buf)
    }

    fn skip(&mut self, count: u64) -> WavResult<()> {
        (**self).skip(count)
    }

    fn at_end(&self) -> bool {
        (**self).at_end()
    }

    fn on_unknown_chunk(&mut self, id: ChunkId, size: u32) -> WavResult<bool> {
        (**self).on_unknown_chunk(id, size)
    }
}

/// A [`Source`] over any [`std::io::Read`] implementation.
///
/// Tracks end-of-stream as reported by the inner reader. Skipping is done
/// with bounded discard reads, so plain non-seekable readers (pipes,
/// sockets) work.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    eof: bool,
}

impl IoSource<BufReader<File>> {
    /// Opens a file as a buffered source.
    pub fn open<P: AsRef<Path>>(path: P) -> WavResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> IoSource<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner, eof: false }
    }

    /// Unwraps the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Source for IoSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> WavResult<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            match self.inner.read(buf) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(0);
                }
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn skip(&mut self, count: u64) -> WavResult<()> {
        let mut remaining = count;
        let mut scratch = [0u8; 1024];
        while remaining > 0 {
            let want = remaining.min(scratch.len() as u64) as usize;
            let obtained = self.read(&mut scratch[..want])?;
            if obtained == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "skip ran past end of stream",
                )
                .into());
            }
            remaining -= obtained as u64;
        }
        Ok(())
    }

    fn at_end(&self) -> bool {
        self.eof
    }
}

/// A [`Source`] over a borrowed byte slice.
#[derive(Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Wraps a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the end of the slice.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl Source for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> WavResult<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn skip(&mut self, count: u64) -> WavResult<()> {
        if (self.remaining() as u64) < count {
            self.pos = self.data.len();
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "skip ran past end of buffer",
            )
            .into());
        }
        self.pos += count as usize;
        Ok(())
    }

    fn at_end(&self) -> bool {
        self.pos == self.data.len()
    }
}

/// Wraps a [`Source`] with a handler for unrecognized chunks.
///
/// The handler receives the chunk id, the declared payload size, and the
/// inner source. It may record the chunk and return `Ok(false)` to let the
/// parser skip it, or consume the payload itself and return `Ok(true)`.
///
/// ```
/// use brook_wav::{ChunkInspector, SliceSource, WavReader};
///
/// # fn demo(wav_bytes: &[u8]) -> brook_wav::WavResult<()> {
/// let mut seen = Vec::new();
/// let source = ChunkInspector::new(SliceSource::new(wav_bytes), |id, size, _inner| {
///     seen.push((id, size));
///     Ok(false)
/// });
/// let reader = WavReader::new(source)?;
/// # let _ = reader; Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ChunkInspector<S, F> {
    inner: S,
    handler: F,
}

impl<S, F> ChunkInspector<S, F>
where
    S: Source,
    F: FnMut(ChunkId, u32, &mut S) -> WavResult<bool>,
{
    /// Attaches `handler` to `inner`.
    pub fn new(inner: S, handler: F) -> Self {
        Self { inner, handler }
    }

    /// Unwraps the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, F> Source for ChunkInspector<S, F>
where
    S: Source,
    F: FnMut(ChunkId, u32, &mut S) -> WavResult<bool>,
{
    fn read(&mut self, buf: &mut [u8]) -> WavResult<usize> {
        self.inner.read(buf)
    }

    fn skip(&mut self, count: u64) -> WavResult<()> {
        self.inner.skip(count)
    }

    fn at_end(&self) -> bool {
        self.inner.at_end()
    }

    fn on_unknown_chunk(&mut self, id: ChunkId, size: u32) -> WavResult<bool> {
        (self.handler)(id, size, &mut self.inner)
    }
}
