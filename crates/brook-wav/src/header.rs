//! RIFF/WAVE container parsing.
//!
//! The parser walks the chunk sequence of a WAV stream: it validates the
//! RIFF/WAVE signature, interprets the `fmt ` chunk (plain, `WAVEFORMATEX`,
//! and `WAVEFORMATEXTENSIBLE` layouts), and hands every chunk it does not
//! recognize to [`Source::on_unknown_chunk`] or skips it. Parsing stops the
//! moment the `data` chunk header has been consumed, leaving the source
//! positioned at the first sample byte.

use byteorder::LittleEndian;

use crate::endian;
use crate::error::{WavError, WavResult};
use crate::info::{SampleFormat, WavInfo};
use crate::source::{fill, ChunkId, Source};

const FORMAT_PCM: u16 = 0x0001;
const FORMAT_IEEE_FLOAT: u16 = 0x0003;
const FORMAT_EXTENSIBLE: u16 = 0xfffe;

/// `KSDATAFORMAT_SUBTYPE_PCM` in wire order.
const SUBTYPE_PCM: [u8; 16] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b,
    0x71,
];

/// `KSDATAFORMAT_SUBTYPE_IEEE_FLOAT` in wire order.
const SUBTYPE_IEEE_FLOAT: [u8; 16] = [
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b,
    0x71,
];

/// Parsed header: the format description plus the declared data length.
pub(crate) struct ParsedHeader {
    pub(crate) info: WavInfo,
    pub(crate) data_len: u64,
}

/// Consumes the RIFF header and chunk sequence up to the first data byte.
pub(crate) fn read_header<S: Source + ?Sized>(source: &mut S) -> WavResult<ParsedHeader> {
    read_riff_header(source)?;

    let mut info: Option<WavInfo> = None;
    loop {
        let (id, size) = match read_chunk_header(source)? {
            Some(header) => header,
            None => {
                // Clean end of stream at a chunk boundary.
                let chunk = if info.is_none() { "fmt " } else { "data" };
                return Err(WavError::missing_chunk(chunk));
            }
        };
        match &id {
            b"fmt " => {
                info = Some(read_fmt_chunk(source, size)?);
                skip_pad_byte(source, size)?;
            }
            b"data" => {
                let info = info.ok_or_else(|| WavError::missing_chunk("fmt "))?;
                return Ok(ParsedHeader {
                    info,
                    data_len: u64::from(size),
                });
            }
            _ => {
                let consumed = source.on_unknown_chunk(id, size)?;
                if !consumed {
                    source.skip(u64::from(size))?;
                }
                skip_pad_byte(source, size)?;
            }
        }
    }
}

/// Validates the 12-byte `RIFF....WAVE` prologue.
fn read_riff_header<S: Source + ?Sized>(source: &mut S) -> WavResult<()> {
    let mut riff = [0u8; 4];
    let mut size = [0u8; 4];
    let mut wave = [0u8; 4];
    if fill(source, &mut riff)? < 4 || fill(source, &mut size)? < 4 || fill(source, &mut wave)? < 4
    {
        return Err(WavError::invalid_container("truncated RIFF header"));
    }
    if &riff != b"RIFF" {
        return Err(WavError::invalid_container("missing RIFF signature"));
    }
    if &wave != b"WAVE" {
        return Err(WavError::invalid_container("missing WAVE signature"));
    }
    // The declared total size in `size` is not trusted; the chunk walk and
    // end-of-stream detection govern instead.
    Ok(())
}

/// Reads the next chunk id and size. `None` means the stream ended cleanly
/// at a chunk boundary.
fn read_chunk_header<S: Source + ?Sized>(source: &mut S) -> WavResult<Option<(ChunkId, u32)>> {
    let mut id: ChunkId = [0u8; 4];
    let obtained = fill(source, &mut id)?;
    if obtained == 0 {
        return Ok(None);
    }
    let mut size = [0u8; 4];
    if obtained < 4 || fill(source, &mut size)? < 4 {
        return Err(WavError::invalid_container("truncated chunk header"));
    }
    Ok(Some((id, endian::read_u32::<LittleEndian>(&size))))
}

/// Chunk payloads are padded to even length; consumes the pad byte if any.
fn skip_pad_byte<S: Source + ?Sized>(source: &mut S, size: u32) -> WavResult<()> {
    if !size.is_multiple_of(2) {
        source.skip(1)?;
    }
    Ok(())
}

/// Reads one little-endian `u16` field of the fmt chunk.
fn take_u16<S: Source + ?Sized>(source: &mut S) -> WavResult<u16> {
    let mut bytes = [0u8; 2];
    if fill(source, &mut bytes)? < 2 {
        return Err(WavError::invalid_container("truncated fmt chunk"));
    }
    Ok(endian::read_u16::<LittleEndian>(&bytes))
}

/// Reads one little-endian `u32` field of the fmt chunk.
fn take_u32<S: Source + ?Sized>(source: &mut S) -> WavResult<u32> {
    let mut bytes = [0u8; 4];
    if fill(source, &mut bytes)? < 4 {
        return Err(WavError::invalid_container("truncated fmt chunk"));
    }
    Ok(endian::read_u32::<LittleEndian>(&bytes))
}

/// Interprets the fmt chunk, consuming exactly `size` payload bytes.
fn read_fmt_chunk<S: Source + ?Sized>(source: &mut S, size: u32) -> WavResult<WavInfo> {
    if size < 16 {
        return Err(WavError::invalid_container("fmt chunk too small"));
    }

    let mut format_tag = take_u16(source)?;
    let channels = take_u16(source)?;
    let sample_rate = take_u32(source)?;
    let _byte_rate = take_u32(source)?;
    let block_align = take_u16(source)?;
    let container_bits = take_u16(source)?;
    let mut consumed: u64 = 16;

    if channels == 0 {
        return Err(WavError::invalid_container("fmt chunk declares zero channels"));
    }
    if sample_rate == 0 {
        return Err(WavError::invalid_container(
            "fmt chunk declares a zero sample rate",
        ));
    }

    let mut valid_bits = container_bits;
    if format_tag == FORMAT_EXTENSIBLE {
        // WAVEFORMATEXTENSIBLE: cbSize, valid bits, channel mask, and a
        // subformat GUID follow the base fields. Only read them when the
        // declared size covers them.
        if size < 40 {
            return Err(WavError::invalid_container("extensible fmt chunk too small"));
        }
        let cb_size = take_u16(source)?;
        if cb_size < 22 {
            return Err(WavError::invalid_container(
                "extensible fmt chunk declares a short extension",
            ));
        }
        let declared_valid_bits = take_u16(source)?;
        let _channel_mask = take_u32(source)?;
        let mut guid = [0u8; 16];
        if fill(source, &mut guid)? < 16 {
            return Err(WavError::invalid_container("truncated fmt chunk"));
        }
        consumed += 24;

        if declared_valid_bits > container_bits {
            return Err(WavError::invalid_container(
                "valid bits exceed the container size",
            ));
        }
        if declared_valid_bits != 0 {
            valid_bits = declared_valid_bits;
        }
        format_tag = match guid {
            SUBTYPE_PCM => FORMAT_PCM,
            SUBTYPE_IEEE_FLOAT => FORMAT_IEEE_FLOAT,
            _ => {
                return Err(WavError::unsupported(format!(
                    "subformat GUID {guid:02x?}"
                )))
            }
        };
    } else if format_tag != FORMAT_PCM && format_tag != FORMAT_IEEE_FLOAT {
        return Err(WavError::unsupported(format!(
            "format tag 0x{format_tag:04x}"
        )));
    }

    if container_bits == 0 {
        return Err(WavError::invalid_container(
            "fmt chunk declares zero bits per sample",
        ));
    }

    // Container width per stored sample. Some writers leave block align
    // zeroed; fall back to the tight width of the container bits then.
    let bytes_per_sample = if block_align == 0 {
        container_bits.div_ceil(8)
    } else if block_align % channels == 0 {
        block_align / channels
    } else {
        return Err(WavError::invalid_container(
            "block align is not a multiple of the channel count",
        ));
    };
    if u32::from(bytes_per_sample) * 8 < u32::from(container_bits) {
        return Err(WavError::invalid_container(
            "block align is too small for the declared bits per sample",
        ));
    }
    if bytes_per_sample > 4 {
        return Err(WavError::unsupported(format!(
            "samples stored in {bytes_per_sample}-byte containers"
        )));
    }

    let sample_format = match (format_tag, valid_bits) {
        (FORMAT_PCM, 8) => SampleFormat::Int8,
        (FORMAT_PCM, 16) => SampleFormat::Int16,
        (FORMAT_PCM, 24) => SampleFormat::Int24,
        (FORMAT_PCM, 32) => SampleFormat::Int32,
        (FORMAT_IEEE_FLOAT, 32) => SampleFormat::Float32,
        (FORMAT_IEEE_FLOAT, bits) => {
            return Err(WavError::unsupported(format!("{bits}-bit float")))
        }
        (_, bits) => return Err(WavError::unsupported(format!("{bits}-bit PCM"))),
    };

    // Container widths with a defined sample placement. 24-bit audio also
    // comes padded to 4-byte containers, sample in the low three bytes.
    let width_supported = match sample_format {
        SampleFormat::Int8 => bytes_per_sample == 1,
        SampleFormat::Int16 => bytes_per_sample == 2,
        SampleFormat::Int24 => bytes_per_sample == 3 || bytes_per_sample == 4,
        SampleFormat::Int32 | SampleFormat::Float32 => bytes_per_sample == 4,
    };
    if !width_supported {
        return Err(WavError::unsupported(format!(
            "{valid_bits}-bit samples in {bytes_per_sample}-byte containers"
        )));
    }

    // Consume whatever tail of the declared size was not interpreted
    // (the cbSize extension of plain WAVEFORMATEX lands here).
    if u64::from(size) > consumed {
        source.skip(u64::from(size) - consumed)?;
    }

    Ok(WavInfo {
        sample_rate,
        channels,
        sample_format,
        bits_per_sample: valid_bits,
        bytes_per_sample,
    })
}
