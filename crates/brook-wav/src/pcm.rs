//! Sample widening and float normalization.
//!
//! Narrow PCM is widened by shifting into the top of the 32-bit range, so a
//! full-scale 8-bit sample and a full-scale 24-bit sample land at the same
//! amplitude. Float samples travel through the decoder as raw bit patterns
//! and become integers only through the explicit
//! [`float_bits_to_int32`] pass.

/// Widens an 8-bit sample (stored unsigned with a 0x80 bias) to `i32`.
pub fn widen_u8(byte: u8) -> i32 {
    (i32::from(byte) - 128) << 24
}

/// Widens a signed 16-bit sample to `i32`.
pub fn widen_i16(sample: i16) -> i32 {
    i32::from(sample) << 16
}

/// Widens a sign-extended 24-bit sample to `i32`.
pub fn widen_i24(sample: i32) -> i32 {
    sample << 8
}

/// Converts a buffer of raw `f32` bit patterns into 32-bit amplitudes, in
/// place.
///
/// Each element is reinterpreted as a float, scaled by `2147483648.0`
/// (`-(i32::MIN as f32)`), and converted with saturation: values at or
/// beyond full scale clamp to `i32::MAX`/`i32::MIN`, NaN becomes `0`.
///
/// The generic decoder leaves float sources as bit patterns on purpose;
/// call this once over the decoded buffer when integer amplitudes are
/// wanted.
pub fn float_bits_to_int32(samples: &mut [i32]) {
    for sample in samples {
        let value = f32::from_bits(*sample as u32);
        // `as` saturates out-of-range values and maps NaN to 0.
        *sample = (value * 2_147_483_648.0) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_u8_spans_full_range() {
        assert_eq!(widen_u8(0x00), i32::MIN);
        assert_eq!(widen_u8(0x80), 0);
        assert_eq!(widen_u8(0xff), 127 << 24);
    }

    #[test]
    fn test_widen_i16_preserves_proportion() {
        assert_eq!(widen_i16(0), 0);
        assert_eq!(widen_i16(1), 1 << 16);
        assert_eq!(widen_i16(-1), -(1 << 16));
        assert_eq!(widen_i16(i16::MAX), 0x7fff_0000);
        assert_eq!(widen_i16(i16::MIN), i32::MIN);
    }

    #[test]
    fn test_widen_i24_preserves_proportion() {
        assert_eq!(widen_i24(0), 0);
        assert_eq!(widen_i24(1), 1 << 8);
        assert_eq!(widen_i24(-1), -(1 << 8));
        assert_eq!(widen_i24((1 << 23) - 1), 0x7fff_ff00);
        assert_eq!(widen_i24(-(1 << 23)), i32::MIN);
    }

    #[test]
    fn test_float_conversion_reference_points() {
        let mut samples: Vec<i32> = [0.0f32, 0.5, -0.5, 1.0, -1.0]
            .iter()
            .map(|f| f.to_bits() as i32)
            .collect();
        float_bits_to_int32(&mut samples);
        assert_eq!(samples, vec![0, 1 << 30, -(1 << 30), i32::MAX, i32::MIN]);
    }

    #[test]
    fn test_float_conversion_clamps_out_of_range() {
        let mut samples: Vec<i32> = [2.0f32, -2.0, f32::INFINITY, f32::NEG_INFINITY]
            .iter()
            .map(|f| f.to_bits() as i32)
            .collect();
        float_bits_to_int32(&mut samples);
        assert_eq!(samples, vec![i32::MAX, i32::MIN, i32::MAX, i32::MIN]);
    }

    #[test]
    fn test_float_conversion_nan_is_zero() {
        let mut samples = vec![f32::NAN.to_bits() as i32];
        float_bits_to_int32(&mut samples);
        assert_eq!(samples, vec![0]);
    }

    #[test]
    fn test_float_conversion_small_values() {
        // One LSB above zero: 2^-31 scales to exactly 1.
        let tiny = (2.0f32).powi(-31);
        let mut samples = vec![tiny.to_bits() as i32, (-tiny).to_bits() as i32];
        float_bits_to_int32(&mut samples);
        assert_eq!(samples, vec![1, -1]);
    }
}
