//! Fixed-width integer and float (de)serialization.
//!
//! Every function is generic over [`byteorder::ByteOrder`], so each value
//! type is available in a little-endian and a big-endian variant:
//!
//! ```
//! use byteorder::{BigEndian, LittleEndian};
//! use brook_wav::endian;
//!
//! let mut buf = [0u8; 4];
//! endian::write_u32::<LittleEndian>(0x0102_0304, &mut buf);
//! assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
//! endian::write_u32::<BigEndian>(0x0102_0304, &mut buf);
//! assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
//! ```
//!
//! Buffers are fixed-size arrays, so a size mismatch is a compile error
//! rather than a runtime panic. Signed integers are two's-complement; floats
//! are IEEE-754 bit patterns copied byte-for-byte, so NaN payloads survive a
//! round trip unchanged.

use byteorder::ByteOrder;

/// Writes a `u16` into a 2-byte buffer.
pub fn write_u16<E: ByteOrder>(value: u16, out: &mut [u8; 2]) {
    E::write_u16(out, value);
}

/// Reads a `u16` from a 2-byte buffer.
pub fn read_u16<E: ByteOrder>(bytes: &[u8; 2]) -> u16 {
    E::read_u16(bytes)
}

/// Writes an `i16` into a 2-byte buffer.
pub fn write_i16<E: ByteOrder>(value: i16, out: &mut [u8; 2]) {
    E::write_i16(out, value);
}

/// Reads an `i16` from a 2-byte buffer.
pub fn read_i16<E: ByteOrder>(bytes: &[u8; 2]) -> i16 {
    E::read_i16(bytes)
}

/// Writes a `u32` into a 4-byte buffer.
pub fn write_u32<E: ByteOrder>(value: u32, out: &mut [u8; 4]) {
    E::write_u32(out, value);
}

/// Reads a `u32` from a 4-byte buffer.
pub fn read_u32<E: ByteOrder>(bytes: &[u8; 4]) -> u32 {
    E::read_u32(bytes)
}

/// Writes an `i32` into a 4-byte buffer.
pub fn write_i32<E: ByteOrder>(value: i32, out: &mut [u8; 4]) {
    E::write_i32(out, value);
}

/// Reads an `i32` from a 4-byte buffer.
pub fn read_i32<E: ByteOrder>(bytes: &[u8; 4]) -> i32 {
    E::read_i32(bytes)
}

/// Writes a `u64` into an 8-byte buffer.
pub fn write_u64<E: ByteOrder>(value: u64, out: &mut [u8; 8]) {
    E::write_u64(out, value);
}

/// Reads a `u64` from an 8-byte buffer.
pub fn read_u64<E: ByteOrder>(bytes: &[u8; 8]) -> u64 {
    E::read_u64(bytes)
}

/// Writes an `i64` into an 8-byte buffer.
pub fn write_i64<E: ByteOrder>(value: i64, out: &mut [u8; 8]) {
    E::write_i64(out, value);
}

/// Reads an `i64` from an 8-byte buffer.
pub fn read_i64<E: ByteOrder>(bytes: &[u8; 8]) -> i64 {
    E::read_i64(bytes)
}

/// Writes an `f32` bit pattern into a 4-byte buffer.
pub fn write_f32<E: ByteOrder>(value: f32, out: &mut [u8; 4]) {
    E::write_f32(out, value);
}

/// Reads an `f32` bit pattern from a 4-byte buffer.
pub fn read_f32<E: ByteOrder>(bytes: &[u8; 4]) -> f32 {
    E::read_f32(bytes)
}

/// Writes an `f64` bit pattern into an 8-byte buffer.
pub fn write_f64<E: ByteOrder>(value: f64, out: &mut [u8; 8]) {
    E::write_f64(out, value);
}

/// Reads an `f64` bit pattern from an 8-byte buffer.
pub fn read_f64<E: ByteOrder>(bytes: &[u8; 8]) -> f64 {
    E::read_f64(bytes)
}

/// Reads a sign-extended 24-bit integer from a 3-byte buffer.
///
/// The result lies in `[-(1 << 23), (1 << 23) - 1]`.
pub fn read_i24<E: ByteOrder>(bytes: &[u8; 3]) -> i32 {
    E::read_i24(bytes)
}
