//! Generic baseline converters
//!
//! Portable scalar reference implementations registered at
//! [`Priority::Generic`] for every supported pair. These carry the registry
//! scalar convention directly (`out = in * scalar`, computed in f64) and
//! define the numeric baseline that every higher-tier implementation must
//! match within floating-point tolerance.
//!
//! Integer width remaps use the same power-of-two rescaling as the
//! vectorized kernels and ignore the scalar entirely. Complex pairs apply
//! the real scalar to both components, which is identical to multiplying by
//! the complex scalar `(scalar, 0)`.

use num_traits::AsPrimitive;

use crate::buffer::{check_lengths, complex_components, complex_components_mut};
use crate::buffer::{SampleBuf, SampleBufMut};
use crate::error::Result;
use crate::format::SampleFormat;
use crate::registry::{ConverterFn, ConverterRegistry, Priority};

// ============================================================================
// Reference loops
// ============================================================================

/// `out = in * scalar`, computed in f64, cast to the destination float
fn scale_to_float<S, D>(src: &[S], dst: &mut [D], scalar: f64)
where
    S: AsPrimitive<f64>,
    D: Copy + 'static,
    f64: AsPrimitive<D>,
{
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s.as_() * scalar).as_();
    }
}

/// `out = saturate(round(in * scalar))`, computed in f64
fn scale_to_int<S, D>(src: &[S], dst: &mut [D], scalar: f64)
where
    S: AsPrimitive<f64>,
    D: Copy + 'static,
    f64: AsPrimitive<D>,
{
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s.as_() * scalar).round().as_();
    }
}

/// `out = in << 8`, matching the vectorized width remap
fn widen_components(src: &[i8], dst: &mut [i16], _scalar: f64) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s as i16) << 8;
    }
}

/// `out = in >> 8`, matching the vectorized width remap
fn narrow_components(src: &[i16], dst: &mut [i8], _scalar: f64) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s >> 8) as i8;
    }
}

// ============================================================================
// Converter functions
// ============================================================================

macro_rules! real_converter {
    ($name:ident, $src_acc:ident, $dst_acc:ident, $loop_fn:ident) => {
        fn $name(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
            let src = src.$src_acc()?;
            let dst = dst.$dst_acc()?;
            check_lengths(src.len(), dst.len())?;
            $loop_fn(src, dst, scalar);
            Ok(())
        }
    };
}

macro_rules! complex_converter {
    ($name:ident, $src_acc:ident, $dst_acc:ident, $loop_fn:ident) => {
        fn $name(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
            let src = src.$src_acc()?;
            let dst = dst.$dst_acc()?;
            check_lengths(src.len(), dst.len())?;
            $loop_fn(
                complex_components(src),
                complex_components_mut(dst),
                scalar,
            );
            Ok(())
        }
    };
}

real_converter!(s8_to_s16, as_s8, into_s16, widen_components);
real_converter!(s16_to_s8, as_s16, into_s8, narrow_components);
real_converter!(s8_to_f32, as_s8, into_f32, scale_to_float);
real_converter!(s8_to_f64, as_s8, into_f64, scale_to_float);
real_converter!(s16_to_f32, as_s16, into_f32, scale_to_float);
real_converter!(s16_to_f64, as_s16, into_f64, scale_to_float);
real_converter!(s32_to_f32, as_s32, into_f32, scale_to_float);
real_converter!(s32_to_f64, as_s32, into_f64, scale_to_float);
real_converter!(f32_to_s8, as_f32, into_s8, scale_to_int);
real_converter!(f32_to_s16, as_f32, into_s16, scale_to_int);
real_converter!(f32_to_s32, as_f32, into_s32, scale_to_int);
real_converter!(f64_to_s8, as_f64, into_s8, scale_to_int);
real_converter!(f64_to_s16, as_f64, into_s16, scale_to_int);
real_converter!(f64_to_s32, as_f64, into_s32, scale_to_int);
real_converter!(f32_to_f32, as_f32, into_f32, scale_to_float);
real_converter!(f32_to_f64, as_f32, into_f64, scale_to_float);
real_converter!(f64_to_f32, as_f64, into_f32, scale_to_float);

complex_converter!(cs8_to_cs16, as_cs8, into_cs16, widen_components);
complex_converter!(cs16_to_cs8, as_cs16, into_cs8, narrow_components);
complex_converter!(cs8_to_cf32, as_cs8, into_cf32, scale_to_float);
complex_converter!(cs8_to_cf64, as_cs8, into_cf64, scale_to_float);
complex_converter!(cs16_to_cf32, as_cs16, into_cf32, scale_to_float);
complex_converter!(cs16_to_cf64, as_cs16, into_cf64, scale_to_float);
complex_converter!(cs32_to_cf32, as_cs32, into_cf32, scale_to_float);
complex_converter!(cs32_to_cf64, as_cs32, into_cf64, scale_to_float);
complex_converter!(cf32_to_cs8, as_cf32, into_cs8, scale_to_int);
complex_converter!(cf32_to_cs16, as_cf32, into_cs16, scale_to_int);
complex_converter!(cf32_to_cs32, as_cf32, into_cs32, scale_to_int);
complex_converter!(cf64_to_cs8, as_cf64, into_cs8, scale_to_int);
complex_converter!(cf64_to_cs16, as_cf64, into_cs16, scale_to_int);
complex_converter!(cf64_to_cs32, as_cf64, into_cs32, scale_to_int);
complex_converter!(cf32_to_cf32, as_cf32, into_cf32, scale_to_float);
complex_converter!(cf32_to_cf64, as_cf32, into_cf64, scale_to_float);
complex_converter!(cf64_to_cf32, as_cf64, into_cf32, scale_to_float);

// ============================================================================
// Registration
// ============================================================================

use SampleFormat::*;

const TABLE: &[(SampleFormat, SampleFormat, ConverterFn)] = &[
    (S8, S16, s8_to_s16),
    (S16, S8, s16_to_s8),
    (S8, F32, s8_to_f32),
    (S8, F64, s8_to_f64),
    (S16, F32, s16_to_f32),
    (S16, F64, s16_to_f64),
    (S32, F32, s32_to_f32),
    (S32, F64, s32_to_f64),
    (F32, S8, f32_to_s8),
    (F32, S16, f32_to_s16),
    (F32, S32, f32_to_s32),
    (F64, S8, f64_to_s8),
    (F64, S16, f64_to_s16),
    (F64, S32, f64_to_s32),
    (F32, F32, f32_to_f32),
    (F32, F64, f32_to_f64),
    (F64, F32, f64_to_f32),
    (Cs8, Cs16, cs8_to_cs16),
    (Cs16, Cs8, cs16_to_cs8),
    (Cs8, Cf32, cs8_to_cf32),
    (Cs8, Cf64, cs8_to_cf64),
    (Cs16, Cf32, cs16_to_cf32),
    (Cs16, Cf64, cs16_to_cf64),
    (Cs32, Cf32, cs32_to_cf32),
    (Cs32, Cf64, cs32_to_cf64),
    (Cf32, Cs8, cf32_to_cs8),
    (Cf32, Cs16, cf32_to_cs16),
    (Cf32, Cs32, cf32_to_cs32),
    (Cf64, Cs8, cf64_to_cs8),
    (Cf64, Cs16, cf64_to_cs16),
    (Cf64, Cs32, cf64_to_cs32),
    (Cf32, Cf32, cf32_to_cf32),
    (Cf32, Cf64, cf32_to_cf64),
    (Cf64, Cf32, cf64_to_cf32),
];

/// Register the generic baseline for every supported pair
pub(crate) fn register_all(registry: &mut ConverterRegistry) {
    for &(source, dest, function) in TABLE {
        registry.register(source, dest, Priority::Generic, function);
    }
}

/// The (source, dest) pairs served by the generic baseline
pub fn supported_pairs() -> impl Iterator<Item = (SampleFormat, SampleFormat)> {
    TABLE.iter().map(|&(source, dest, _)| (source, dest))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;

    #[test]
    fn test_scale_to_float_multiplies() {
        let src = [16384i16, -32768, 0];
        let mut dst = [0.0f32; 3];
        scale_to_float(&src, &mut dst, 1.0 / 32768.0);
        assert_abs_diff_eq!(dst[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(dst[1], -1.0, epsilon = 1e-9);
        assert_eq!(dst[2], 0.0);
    }

    #[test]
    fn test_scale_to_int_saturates() {
        let src = [0.5f32, 2.0, -2.0];
        let mut dst = [0i16; 3];
        scale_to_int(&src, &mut dst, 32768.0);
        assert_eq!(dst, [16384, i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_width_remap_ignores_scalar() {
        let src = [5i8, -5];
        let mut a = [0i16; 2];
        let mut b = [0i16; 2];
        s8_to_s16(SampleBuf::S8(&src), SampleBufMut::S16(&mut a), 1.0).unwrap();
        s8_to_s16(SampleBuf::S8(&src), SampleBufMut::S16(&mut b), 999.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, [1280, -1280]);
    }

    #[test]
    fn test_complex_applies_scalar_per_component() {
        let src = [Complex::new(64i8, -64)];
        let mut dst = [Complex::new(0.0f32, 0.0)];
        cs8_to_cf32(
            SampleBuf::Cs8(&src),
            SampleBufMut::Cf32(&mut dst),
            1.0 / 128.0,
        )
        .unwrap();
        assert_abs_diff_eq!(dst[0].re, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(dst[0].im, -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let src = [0i8; 4];
        let mut dst = [0.0f32; 3];
        let err = s8_to_f32(SampleBuf::S8(&src), SampleBufMut::F32(&mut dst), 1.0).unwrap_err();
        assert_eq!(err.error_code(), "LENGTH_MISMATCH");
    }

    #[test]
    fn test_table_has_no_duplicate_pairs() {
        let pairs: Vec<_> = supported_pairs().collect();
        for (i, pair) in pairs.iter().enumerate() {
            assert!(!pairs[i + 1..].contains(pair), "duplicate pair {pair:?}");
        }
    }
}
