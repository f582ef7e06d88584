//! Brook Channel Router
//!
//! Remaps interleaved multichannel audio with per-channel gains, for
//! instance playing a 10-channel signal on a 24-channel device with each
//! output trimmed independently. Maps are written as two comma-delimited
//! lists (base-1 sources and decibel gains) suited to command-line flags.
//!
//! # Example
//!
//! ```
//! use brook_route::ChannelMap;
//!
//! // Swap stereo channels and add a silent third output.
//! let map = ChannelMap::parse(2, "2,1,0", "")?;
//! let input = [1.0f32, 2.0, 3.0, 4.0]; // 2 channels, 2 frames
//! let mut output = [0.0f32; 6];
//! map.apply(&input, 2, &mut output);
//! assert_eq!(output, [2.0, 1.0, 0.0, 4.0, 3.0, 0.0]);
//! # Ok::<(), brook_route::RouteError>(())
//! ```

pub mod error;
pub mod map;

// Re-export main types at crate root
pub use error::{RouteError, RouteResult};
pub use map::{ChannelMap, ChannelMapEntry, MAX_CHANNELS};
