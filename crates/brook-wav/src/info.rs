//! Stream format description.

use std::fmt;

/// On-disk numeric encoding of one sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// Unsigned 8-bit PCM, stored with a 0x80 bias.
    Int8,
    /// Signed 16-bit PCM.
    Int16,
    /// Signed 24-bit PCM, in a 3- or 4-byte container.
    Int24,
    /// Signed 32-bit PCM.
    Int32,
    /// IEEE-754 binary32.
    Float32,
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::Int8 => "8-bit PCM",
            SampleFormat::Int16 => "16-bit PCM",
            SampleFormat::Int24 => "24-bit PCM",
            SampleFormat::Int32 => "32-bit PCM",
            SampleFormat::Float32 => "32-bit float",
        };
        f.write_str(name)
    }
}

/// Format of an open WAV stream, as declared by its `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Source sample encoding.
    pub sample_format: SampleFormat,
    /// Meaningful bits per sample (24 for 24-bit audio in a 4-byte
    /// container).
    pub bits_per_sample: u16,
    /// Bytes one stored sample occupies on disk, including padding.
    pub bytes_per_sample: u16,
}

impl WavInfo {
    /// Returns true if samples are stored as floats.
    pub fn is_float(&self) -> bool {
        self.sample_format == SampleFormat::Float32
    }

    /// Bytes per frame: one stored sample for every channel.
    pub(crate) fn block_align(&self) -> u32 {
        u32::from(self.channels) * u32::from(self.bytes_per_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo_int16() -> WavInfo {
        WavInfo {
            sample_rate: 44100,
            channels: 2,
            sample_format: SampleFormat::Int16,
            bits_per_sample: 16,
            bytes_per_sample: 2,
        }
    }

    #[test]
    fn test_block_align() {
        assert_eq!(stereo_int16().block_align(), 4); // 2 channels * 2 bytes

        let padded_24 = WavInfo {
            channels: 6,
            sample_format: SampleFormat::Int24,
            bits_per_sample: 24,
            bytes_per_sample: 4,
            ..stereo_int16()
        };
        assert_eq!(padded_24.block_align(), 24); // 6 channels * 4 bytes
    }

    #[test]
    fn test_is_float() {
        assert!(!stereo_int16().is_float());
        let float = WavInfo {
            sample_format: SampleFormat::Float32,
            bits_per_sample: 32,
            bytes_per_sample: 4,
            ..stereo_int16()
        };
        assert!(float.is_float());
    }

    #[test]
    fn test_sample_format_display() {
        assert_eq!(SampleFormat::Int24.to_string(), "24-bit PCM");
        assert_eq!(SampleFormat::Float32.to_string(), "32-bit float");
    }
}
