//! Property-based tests for the byte codec and the decode pipeline.
//!
//! These verify that scalar writes and reads invert each other for
//! arbitrary values (NaN bit patterns included), that the decoder count
//! law holds for arbitrary buffer sizes, and that malformed input never
//! panics the parser.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p brook-wav --test codec_properties
//! ```

use byteorder::{BigEndian, LittleEndian};
use proptest::prelude::*;

use brook_wav::{decode_wav_i16, decode_wav_i32, endian, SliceSource, WavReader};

fn le_u16(value: u16) -> [u8; 2] {
    let mut bytes = [0u8; 2];
    endian::write_u16::<LittleEndian>(value, &mut bytes);
    bytes
}

fn le_u32(value: u32) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    endian::write_u32::<LittleEndian>(value, &mut bytes);
    bytes
}

/// Builds a minimal mono-friendly 16-bit PCM WAV image.
fn pcm16_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let block_align = channels * 2;
    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&le_u32(36 + data_len));
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&le_u32(16));
    bytes.extend_from_slice(&le_u16(1)); // PCM
    bytes.extend_from_slice(&le_u16(channels));
    bytes.extend_from_slice(&le_u32(sample_rate));
    bytes.extend_from_slice(&le_u32(sample_rate * u32::from(block_align)));
    bytes.extend_from_slice(&le_u16(block_align));
    bytes.extend_from_slice(&le_u16(16));
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&le_u32(data_len));
    for &sample in samples {
        let mut pair = [0u8; 2];
        endian::write_i16::<LittleEndian>(sample, &mut pair);
        bytes.extend_from_slice(&pair);
    }
    bytes
}

// ============================================================================
// 1. Scalar codec round trips
// ============================================================================

proptest! {
    /// Writing then reading any u16 reproduces it in both byte orders.
    #[test]
    fn u16_round_trips_in_both_orders(value in any::<u16>()) {
        let mut le = [0u8; 2];
        endian::write_u16::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_u16::<LittleEndian>(&le), value);

        let mut be = [0u8; 2];
        endian::write_u16::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_u16::<BigEndian>(&be), value);
    }

    /// Writing then reading any i16 reproduces it in both byte orders.
    #[test]
    fn i16_round_trips_in_both_orders(value in any::<i16>()) {
        let mut le = [0u8; 2];
        endian::write_i16::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_i16::<LittleEndian>(&le), value);

        let mut be = [0u8; 2];
        endian::write_i16::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_i16::<BigEndian>(&be), value);
    }

    /// Writing then reading any u32 reproduces it in both byte orders.
    #[test]
    fn u32_round_trips_in_both_orders(value in any::<u32>()) {
        let mut le = [0u8; 4];
        endian::write_u32::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_u32::<LittleEndian>(&le), value);

        let mut be = [0u8; 4];
        endian::write_u32::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_u32::<BigEndian>(&be), value);
    }

    /// Writing then reading any i32 reproduces it in both byte orders.
    #[test]
    fn i32_round_trips_in_both_orders(value in any::<i32>()) {
        let mut le = [0u8; 4];
        endian::write_i32::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_i32::<LittleEndian>(&le), value);

        let mut be = [0u8; 4];
        endian::write_i32::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_i32::<BigEndian>(&be), value);
    }

    /// Writing then reading any u64 reproduces it in both byte orders.
    #[test]
    fn u64_round_trips_in_both_orders(value in any::<u64>()) {
        let mut le = [0u8; 8];
        endian::write_u64::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_u64::<LittleEndian>(&le), value);

        let mut be = [0u8; 8];
        endian::write_u64::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_u64::<BigEndian>(&be), value);
    }

    /// Writing then reading any i64 reproduces it in both byte orders.
    #[test]
    fn i64_round_trips_in_both_orders(value in any::<i64>()) {
        let mut le = [0u8; 8];
        endian::write_i64::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_i64::<LittleEndian>(&le), value);

        let mut be = [0u8; 8];
        endian::write_i64::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_i64::<BigEndian>(&be), value);
    }

    /// Every f32 bit pattern survives a round trip exactly, NaNs included.
    #[test]
    fn f32_bit_patterns_round_trip(bits in any::<u32>()) {
        let value = f32::from_bits(bits);

        let mut le = [0u8; 4];
        endian::write_f32::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_f32::<LittleEndian>(&le).to_bits(), bits);

        let mut be = [0u8; 4];
        endian::write_f32::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_f32::<BigEndian>(&be).to_bits(), bits);
    }

    /// Every f64 bit pattern survives a round trip exactly, NaNs included.
    #[test]
    fn f64_bit_patterns_round_trip(bits in any::<u64>()) {
        let value = f64::from_bits(bits);

        let mut le = [0u8; 8];
        endian::write_f64::<LittleEndian>(value, &mut le);
        prop_assert_eq!(endian::read_f64::<LittleEndian>(&le).to_bits(), bits);

        let mut be = [0u8; 8];
        endian::write_f64::<BigEndian>(value, &mut be);
        prop_assert_eq!(endian::read_f64::<BigEndian>(&be).to_bits(), bits);
    }

    /// The two byte orders mirror each other.
    #[test]
    fn u32_encodings_mirror(value in any::<u32>()) {
        let mut le = [0u8; 4];
        let mut be = [0u8; 4];
        endian::write_u32::<LittleEndian>(value, &mut le);
        endian::write_u32::<BigEndian>(value, &mut be);
        le.reverse();
        prop_assert_eq!(le, be);
    }
}

// ============================================================================
// 2. Decoder count law
// ============================================================================

proptest! {
    /// Decoding k samples from a stream holding r produces min(k, r) and
    /// decrements the remaining count by the same amount.
    #[test]
    fn decode_count_law_holds(
        samples in prop::collection::vec(any::<i16>(), 0..200),
        request in 0usize..250,
    ) {
        let bytes = pcm16_wav(1, 8000, &samples);
        let mut reader = WavReader::new(SliceSource::new(&bytes)).expect("parse");
        prop_assert_eq!(reader.remaining_samples(), samples.len() as u64);

        let mut out = vec![0i16; request];
        let count = reader.read_i16(&mut out).expect("decode");
        prop_assert_eq!(count, request.min(samples.len()));
        prop_assert_eq!(
            reader.remaining_samples(),
            (samples.len() - count) as u64
        );
        prop_assert_eq!(&out[..count], &samples[..count]);
    }
}

// ============================================================================
// 3. Pipeline consistency
// ============================================================================

proptest! {
    /// The 32-bit decode of a 16-bit stream is the 16-bit decode widened.
    #[test]
    fn wide_decode_matches_narrow_decode(
        samples in prop::collection::vec(any::<i16>(), 1..100),
    ) {
        let bytes = pcm16_wav(1, 8000, &samples);
        let narrow = decode_wav_i16(SliceSource::new(&bytes)).expect("narrow");
        let wide = decode_wav_i32(SliceSource::new(&bytes)).expect("wide");

        prop_assert_eq!(narrow.samples.len(), wide.samples.len());
        for (n, w) in narrow.samples.iter().zip(&wide.samples) {
            prop_assert_eq!(i32::from(*n) << 16, *w);
        }
    }

    /// Truncating a valid stream yields a clean error or a sample prefix,
    /// never garbage.
    #[test]
    fn truncation_yields_prefix(
        samples in prop::collection::vec(any::<i16>(), 1..50),
        cut in 0usize..200,
    ) {
        let bytes = pcm16_wav(1, 8000, &samples);
        let cut = cut.min(bytes.len());
        if let Ok(decoded) = decode_wav_i16(SliceSource::new(&bytes[..cut])) {
            prop_assert!(decoded.samples.len() <= samples.len());
            prop_assert_eq!(
                &decoded.samples[..],
                &samples[..decoded.samples.len()]
            );
        }
    }
}

// ============================================================================
// 4. Malformed input robustness
// ============================================================================

proptest! {
    /// Arbitrary bytes never panic the parser.
    #[test]
    fn parser_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = WavReader::new(SliceSource::new(&bytes));
    }

    /// Arbitrary chunk sequences behind a valid prologue never panic the
    /// chunk walk or the decoder.
    #[test]
    fn chunk_walk_never_panics(tail in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut bytes = b"RIFF\x00\x00\x00\x00WAVE".to_vec();
        bytes.extend_from_slice(&tail);
        if let Ok(mut reader) = WavReader::new(SliceSource::new(&bytes)) {
            let mut out = [0i32; 64];
            let _ = reader.read_i32(&mut out);
        }
    }
}
