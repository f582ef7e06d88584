//! Error types for WAV reading.

use thiserror::Error;

/// Result type for WAV operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while parsing or decoding a WAV stream.
#[derive(Debug, Error)]
pub enum WavError {
    /// The stream is not a RIFF/WAVE container, or a header field is
    /// structurally nonsensical (zero channels, impossible chunk size).
    #[error("invalid WAV container: {message}")]
    InvalidContainer {
        /// What was wrong with the container.
        message: String,
    },

    /// The container is well formed but encodes samples this reader does
    /// not handle (compressed codecs, unusual bit depths).
    #[error("unsupported sample format: {message}")]
    UnsupportedFormat {
        /// Description of the unhandled encoding.
        message: String,
    },

    /// The stream ended before a required chunk was found.
    #[error("missing required chunk: {chunk}")]
    MissingChunk {
        /// Identifier of the absent chunk.
        chunk: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An output buffer could not be allocated.
    #[error("failed to allocate sample buffer of {bytes} bytes")]
    Allocation {
        /// Requested allocation size in bytes.
        bytes: u64,
    },
}

impl WavError {
    /// Creates an invalid container error.
    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Creates a missing chunk error.
    pub fn missing_chunk(chunk: impl Into<String>) -> Self {
        Self::MissingChunk {
            chunk: chunk.into(),
        }
    }

    /// Creates an allocation error for a request of `bytes` bytes.
    pub fn allocation(bytes: u64) -> Self {
        Self::Allocation { bytes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_container_helper() {
        let err = WavError::invalid_container("no RIFF signature");
        assert!(err.to_string().contains("no RIFF signature"));
    }

    #[test]
    fn test_unsupported_helper() {
        let err = WavError::unsupported("IMA ADPCM");
        assert!(err.to_string().contains("IMA ADPCM"));
    }

    #[test]
    fn test_missing_chunk_helper() {
        let err = WavError::missing_chunk("data");
        assert!(err.to_string().contains("data"));
    }

    #[test]
    fn test_allocation_reports_size() {
        let err = WavError::allocation(1 << 20);
        assert!(err.to_string().contains("1048576"));
    }
}
