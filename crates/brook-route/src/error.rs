//! Error types for channel map parsing.

use thiserror::Error;

/// Result type for channel map operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors from parsing a channel map description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The source list names more output channels than supported.
    #[error("channel map lists {count} outputs, the limit is {limit}")]
    TooManyChannels {
        /// Number of outputs the list described.
        count: usize,
        /// Most outputs a map may describe.
        limit: usize,
    },

    /// A source references an input channel that does not exist.
    #[error("source channel {channel} is out of range for {input_channels} input channels")]
    SourceOutOfRange {
        /// The offending base-1 source index.
        channel: usize,
        /// Number of input channels the map was parsed against.
        input_channels: usize,
    },

    /// A list element could not be parsed as a number.
    #[error("invalid {list} entry: {token:?}")]
    InvalidToken {
        /// Which list held the element.
        list: &'static str,
        /// The element as written.
        token: String,
    },
}
