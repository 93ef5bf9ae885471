//! Vectorized converters
//!
//! Converter functions registered at [`Priority::Vectorized`], each
//! delegating to the kernels in [`crate::kernels`]. The registry scalar
//! convention is "multiply the source by the scalar"; the kernels are not
//! uniform about it, so each converter adapts:
//!
//! - integer -> float kernels divide by a normalization factor, so they
//!   receive `1.0 / scalar` ([`ScalarConvention::Reciprocal`]),
//! - float -> integer kernels multiply, so they receive the scalar as-is
//!   ([`ScalarConvention::Direct`]),
//! - integer width remaps take no scalar at all
//!   ([`ScalarConvention::Ignored`]).
//!
//! Pairs with no direct kernel chain through 32-bit float: any integer
//! <-> F64 path converts at f32 precision first, and scaled F32 <-> F64
//! paths apply the scalar at the f32 stage (multiply-then-widen or
//! narrow-then-multiply). Each chained call allocates one scratch buffer of
//! the intermediate type; nothing is cached across calls.
//!
//! Complex pairs route through the real kernels on component views with
//! doubled element counts, except CF32 -> CF32 which multiplies by the
//! complex scalar `(scalar, 0)` directly.

use num_complex::Complex;

use crate::buffer::{check_lengths, complex_components, complex_components_mut};
use crate::buffer::{SampleBuf, SampleBufMut};
use crate::error::Result;
use crate::format::SampleFormat;
use crate::kernels;
use crate::registry::{ConverterFn, ConverterRegistry, Priority};

/// How a converter feeds the registry scalar to its kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarConvention {
    /// Kernel divides; it receives `1.0 / scalar`
    Reciprocal,
    /// Kernel multiplies; it receives the scalar unchanged
    Direct,
    /// Pure width remap; the scalar is not used at all
    Ignored,
}

/// One row of the registration table
#[derive(Debug, Clone, Copy)]
pub struct VectorizedEntry {
    pub source: SampleFormat,
    pub dest: SampleFormat,
    pub convention: ScalarConvention,
    pub function: ConverterFn,
}

#[inline]
fn to_divisor(scalar: f64) -> f32 {
    (1.0 / scalar) as f32
}

// ============================================================================
// Real converters: width remaps
// ============================================================================

fn s8_to_s16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
    let src = src.as_s8()?;
    let dst = dst.into_s16()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_8i_to_16i(dst, src);
    Ok(())
}

fn s16_to_s8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
    let src = src.as_s16()?;
    let dst = dst.into_s8()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_16i_to_8i(dst, src);
    Ok(())
}

// ============================================================================
// Real converters: integer <-> F32
// ============================================================================

fn s8_to_f32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s8()?;
    let dst = dst.into_f32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_8i_to_32f(dst, src, to_divisor(scalar));
    Ok(())
}

fn s16_to_f32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s16()?;
    let dst = dst.into_f32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_16i_to_32f(dst, src, to_divisor(scalar));
    Ok(())
}

fn s32_to_f32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s32()?;
    let dst = dst.into_f32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32i_to_32f(dst, src, to_divisor(scalar));
    Ok(())
}

fn f32_to_s8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f32()?;
    let dst = dst.into_s8()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_8i(dst, src, scalar as f32);
    Ok(())
}

fn f32_to_s16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f32()?;
    let dst = dst.into_s16()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_16i(dst, src, scalar as f32);
    Ok(())
}

fn f32_to_s32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f32()?;
    let dst = dst.into_s32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_32i(dst, src, scalar as f32);
    Ok(())
}

// ============================================================================
// Real converters: integer <-> F64, chained through F32
// ============================================================================

fn s8_to_f64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s8()?;
    let dst = dst.into_f64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_8i_to_32f(&mut scratch, src, to_divisor(scalar));
    kernels::convert_32f_to_64f(dst, &scratch);
    Ok(())
}

fn s16_to_f64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s16()?;
    let dst = dst.into_f64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_16i_to_32f(&mut scratch, src, to_divisor(scalar));
    kernels::convert_32f_to_64f(dst, &scratch);
    Ok(())
}

fn s32_to_f64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_s32()?;
    let dst = dst.into_f64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_32i_to_32f(&mut scratch, src, to_divisor(scalar));
    kernels::convert_32f_to_64f(dst, &scratch);
    Ok(())
}

fn f64_to_s8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f64()?;
    let dst = dst.into_s8()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_64f_to_32f(&mut scratch, src);
    kernels::convert_32f_to_8i(dst, &scratch, scalar as f32);
    Ok(())
}

fn f64_to_s16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f64()?;
    let dst = dst.into_s16()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_64f_to_32f(&mut scratch, src);
    kernels::convert_32f_to_16i(dst, &scratch, scalar as f32);
    Ok(())
}

fn f64_to_s32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f64()?;
    let dst = dst.into_s32()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_64f_to_32f(&mut scratch, src);
    kernels::convert_32f_to_32i(dst, &scratch, scalar as f32);
    Ok(())
}

// ============================================================================
// Real converters: float <-> float with scale
// ============================================================================

fn f32_to_f32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f32()?;
    let dst = dst.into_f32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::multiply_32f(dst, src, scalar as f32);
    Ok(())
}

// Scalar is applied at the f32 stage: multiply, then widen.
fn f32_to_f64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f32()?;
    let dst = dst.into_f64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::multiply_32f(&mut scratch, src, scalar as f32);
    kernels::convert_32f_to_64f(dst, &scratch);
    Ok(())
}

// Scalar is applied at the f32 stage: narrow, then multiply.
fn f64_to_f32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_f64()?;
    let dst = dst.into_f32()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len()];
    kernels::convert_64f_to_32f(&mut scratch, src);
    kernels::multiply_32f(dst, &scratch, scalar as f32);
    Ok(())
}

// ============================================================================
// Complex converters: width remaps (real kernels, 2N components)
// ============================================================================

fn cs8_to_cs16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
    let src = src.as_cs8()?;
    let dst = dst.into_cs16()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_8i_to_16i(complex_components_mut(dst), complex_components(src));
    Ok(())
}

fn cs16_to_cs8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, _scalar: f64) -> Result<()> {
    let src = src.as_cs16()?;
    let dst = dst.into_cs8()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_16i_to_8i(complex_components_mut(dst), complex_components(src));
    Ok(())
}

// ============================================================================
// Complex converters: integer <-> CF32
// ============================================================================

fn cs8_to_cf32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs8()?;
    let dst = dst.into_cf32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_8i_to_32f(
        complex_components_mut(dst),
        complex_components(src),
        to_divisor(scalar),
    );
    Ok(())
}

fn cs16_to_cf32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs16()?;
    let dst = dst.into_cf32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_16i_to_32f(
        complex_components_mut(dst),
        complex_components(src),
        to_divisor(scalar),
    );
    Ok(())
}

fn cs32_to_cf32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs32()?;
    let dst = dst.into_cf32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32i_to_32f(
        complex_components_mut(dst),
        complex_components(src),
        to_divisor(scalar),
    );
    Ok(())
}

fn cf32_to_cs8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf32()?;
    let dst = dst.into_cs8()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_8i(
        complex_components_mut(dst),
        complex_components(src),
        scalar as f32,
    );
    Ok(())
}

fn cf32_to_cs16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf32()?;
    let dst = dst.into_cs16()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_16i(
        complex_components_mut(dst),
        complex_components(src),
        scalar as f32,
    );
    Ok(())
}

fn cf32_to_cs32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf32()?;
    let dst = dst.into_cs32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::convert_32f_to_32i(
        complex_components_mut(dst),
        complex_components(src),
        scalar as f32,
    );
    Ok(())
}

// ============================================================================
// Complex converters: integer <-> CF64, chained through CF32
// ============================================================================

fn cs8_to_cf64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs8()?;
    let dst = dst.into_cf64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_8i_to_32f(&mut scratch, complex_components(src), to_divisor(scalar));
    kernels::convert_32f_to_64f(complex_components_mut(dst), &scratch);
    Ok(())
}

fn cs16_to_cf64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs16()?;
    let dst = dst.into_cf64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_16i_to_32f(&mut scratch, complex_components(src), to_divisor(scalar));
    kernels::convert_32f_to_64f(complex_components_mut(dst), &scratch);
    Ok(())
}

fn cs32_to_cf64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cs32()?;
    let dst = dst.into_cf64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_32i_to_32f(&mut scratch, complex_components(src), to_divisor(scalar));
    kernels::convert_32f_to_64f(complex_components_mut(dst), &scratch);
    Ok(())
}

fn cf64_to_cs8(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf64()?;
    let dst = dst.into_cs8()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_64f_to_32f(&mut scratch, complex_components(src));
    kernels::convert_32f_to_8i(complex_components_mut(dst), &scratch, scalar as f32);
    Ok(())
}

fn cf64_to_cs16(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf64()?;
    let dst = dst.into_cs16()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_64f_to_32f(&mut scratch, complex_components(src));
    kernels::convert_32f_to_16i(complex_components_mut(dst), &scratch, scalar as f32);
    Ok(())
}

fn cf64_to_cs32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf64()?;
    let dst = dst.into_cs32()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![0.0f32; src.len() * 2];
    kernels::convert_64f_to_32f(&mut scratch, complex_components(src));
    kernels::convert_32f_to_32i(complex_components_mut(dst), &scratch, scalar as f32);
    Ok(())
}

// ============================================================================
// Complex converters: float <-> float with scale
// ============================================================================

fn cf32_to_cf32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf32()?;
    let dst = dst.into_cf32()?;
    check_lengths(src.len(), dst.len())?;
    kernels::multiply_32fc(dst, src, Complex::new(scalar as f32, 0.0));
    Ok(())
}

fn cf32_to_cf64(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf32()?;
    let dst = dst.into_cf64()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![Complex::new(0.0f32, 0.0); src.len()];
    kernels::multiply_32fc(&mut scratch, src, Complex::new(scalar as f32, 0.0));
    kernels::convert_32f_to_64f(complex_components_mut(dst), complex_components(&scratch));
    Ok(())
}

fn cf64_to_cf32(src: SampleBuf<'_>, dst: SampleBufMut<'_>, scalar: f64) -> Result<()> {
    let src = src.as_cf64()?;
    let dst = dst.into_cf32()?;
    check_lengths(src.len(), dst.len())?;
    let mut scratch = vec![Complex::new(0.0f32, 0.0); src.len()];
    kernels::convert_64f_to_32f(complex_components_mut(&mut scratch), complex_components(src));
    kernels::multiply_32fc(dst, &scratch, Complex::new(scalar as f32, 0.0));
    Ok(())
}

// ============================================================================
// Registration table
// ============================================================================

use ScalarConvention::{Direct, Ignored, Reciprocal};
use SampleFormat::*;

macro_rules! entry {
    ($source:ident, $dest:ident, $convention:expr, $function:ident) => {
        VectorizedEntry {
            source: $source,
            dest: $dest,
            convention: $convention,
            function: $function,
        }
    };
}

/// Every pair this module accelerates, in declaration order
///
/// Deliberately non-exhaustive: unlisted pairs (S32 -> S8, F64 -> F64, ...)
/// fall back to whatever generic entries exist.
pub const TABLE: &[VectorizedEntry] = &[
    entry!(S8, S16, Ignored, s8_to_s16),
    entry!(S16, S8, Ignored, s16_to_s8),
    entry!(S8, F32, Reciprocal, s8_to_f32),
    entry!(S8, F64, Reciprocal, s8_to_f64),
    entry!(S16, F32, Reciprocal, s16_to_f32),
    entry!(S16, F64, Reciprocal, s16_to_f64),
    entry!(S32, F32, Reciprocal, s32_to_f32),
    entry!(S32, F64, Reciprocal, s32_to_f64),
    entry!(F32, S8, Direct, f32_to_s8),
    entry!(F32, S16, Direct, f32_to_s16),
    entry!(F32, S32, Direct, f32_to_s32),
    entry!(F64, S8, Direct, f64_to_s8),
    entry!(F64, S16, Direct, f64_to_s16),
    entry!(F64, S32, Direct, f64_to_s32),
    entry!(F32, F32, Direct, f32_to_f32),
    entry!(F32, F64, Direct, f32_to_f64),
    entry!(F64, F32, Direct, f64_to_f32),
    entry!(Cs8, Cs16, Ignored, cs8_to_cs16),
    entry!(Cs16, Cs8, Ignored, cs16_to_cs8),
    entry!(Cs8, Cf32, Reciprocal, cs8_to_cf32),
    entry!(Cs8, Cf64, Reciprocal, cs8_to_cf64),
    entry!(Cs16, Cf32, Reciprocal, cs16_to_cf32),
    entry!(Cs16, Cf64, Reciprocal, cs16_to_cf64),
    entry!(Cs32, Cf32, Reciprocal, cs32_to_cf32),
    entry!(Cs32, Cf64, Reciprocal, cs32_to_cf64),
    entry!(Cf32, Cs8, Direct, cf32_to_cs8),
    entry!(Cf32, Cs16, Direct, cf32_to_cs16),
    entry!(Cf32, Cs32, Direct, cf32_to_cs32),
    entry!(Cf64, Cs8, Direct, cf64_to_cs8),
    entry!(Cf64, Cs16, Direct, cf64_to_cs16),
    entry!(Cf64, Cs32, Direct, cf64_to_cs32),
    entry!(Cf32, Cf32, Direct, cf32_to_cf32),
    entry!(Cf32, Cf64, Direct, cf32_to_cf64),
    entry!(Cf64, Cf32, Direct, cf64_to_cf32),
];

/// Register every vectorized converter
pub(crate) fn register_all(registry: &mut ConverterRegistry) {
    for entry in TABLE {
        registry.register(entry.source, entry.dest, Priority::Vectorized, entry.function);
    }
}

// ============================================================================
// Tests
// ============================================================================
