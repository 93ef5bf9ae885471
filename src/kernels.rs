//! Numeric conversion kernels
//!
//! The kernels mirror the conventions of vectorized SDR math libraries:
//!
//! - integer -> float kernels DIVIDE by the passed normalization factor
//!   (`out = in / divisor`),
//! - float -> integer kernels MULTIPLY by the passed scalar and saturate
//!   (`out = saturate(round(in * scalar))`),
//! - integer width remaps rescale by a power of two implicitly and take no
//!   scalar at all.
//!
//! Callers that speak the registry convention (`out = in * scalar`) must
//! hand the integer -> float kernels `1.0 / scalar`; see the converter
//! layer. Bodies are plain slice loops written so the autovectorizer can do
//! the wide work; equal lengths are a precondition, asserted only in debug
//! builds because the hot path performs no validation.

use std::env;
use std::path::{Path, PathBuf};

use num_complex::Complex;

/// Environment variable overriding the machine profile location
pub const MACHINE_CONFIG_ENV: &str = "SDRCONV_MACHINE_CONFIG";

// ============================================================================
// Integer width remaps (no scalar)
// ============================================================================

/// `out = in << 8`: widen 8-bit samples to the upper byte of 16 bits
pub fn convert_8i_to_16i(dst: &mut [i16], src: &[i8]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s as i16) << 8;
    }
}

/// `out = in >> 8`: keep the upper byte of 16-bit samples
pub fn convert_16i_to_8i(dst: &mut [i8], src: &[i16]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s >> 8) as i8;
    }
}

// ============================================================================
// Integer -> float (divide convention)
// ============================================================================

/// `out = in / divisor`
pub fn convert_8i_to_32f(dst: &mut [f32], src: &[i8], divisor: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f32 / divisor;
    }
}

/// `out = in / divisor`
pub fn convert_16i_to_32f(dst: &mut [f32], src: &[i16], divisor: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f32 / divisor;
    }
}

/// `out = in / divisor`
pub fn convert_32i_to_32f(dst: &mut [f32], src: &[i32], divisor: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f32 / divisor;
    }
}

// ============================================================================
// Float -> integer (multiply convention, saturating)
// ============================================================================

/// `out = saturate(round(in * scalar))`
pub fn convert_32f_to_8i(dst: &mut [i8], src: &[f32], scalar: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s * scalar).round() as i8;
    }
}

/// `out = saturate(round(in * scalar))`
pub fn convert_32f_to_16i(dst: &mut [i16], src: &[f32], scalar: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s * scalar).round() as i16;
    }
}

/// `out = saturate(round(in * scalar))`
pub fn convert_32f_to_32i(dst: &mut [i32], src: &[f32], scalar: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s * scalar).round() as i32;
    }
}

// ============================================================================
// Float width conversion
// ============================================================================

/// Widen f32 samples to f64
pub fn convert_32f_to_64f(dst: &mut [f64], src: &[f32]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f64;
    }
}

/// Narrow f64 samples to f32
pub fn convert_64f_to_32f(dst: &mut [f32], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s as f32;
    }
}

// ============================================================================
// Scalar multiplies
// ============================================================================

/// `out = in * scalar`
pub fn multiply_32f(dst: &mut [f32], src: &[f32], scalar: f32) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s * scalar;
    }
}

/// `out = in * scalar` with a complex scalar
pub fn multiply_32fc(dst: &mut [Complex<f32>], src: &[Complex<f32>], scalar: Complex<f32>) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s * scalar;
    }
}

// ============================================================================
// Machine profile discovery
// ============================================================================

/// Locate the optional machine tuning profile
///
/// Checked at registry initialization: the env override first, then
/// `~/.sdrconv/machine_config`. Absence is not an error; kernels fall back
/// to compiled defaults.
pub fn machine_config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(MACHINE_CONFIG_ENV) {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }

    let home = env::var_os("HOME")?;
    let path = Path::new(&home).join(".sdrconv").join("machine_config");
    path.is_file().then_some(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_8i_to_16i() {
        let src = [0i8, 1, -1, 127, -128];
        let mut dst = [0i16; 5];
        convert_8i_to_16i(&mut dst, &src);
        assert_eq!(dst, [0, 256, -256, 32512, -32768]);
    }

    #[test]
    fn test_narrow_16i_to_8i() {
        let src = [0i16, 256, -256, 32512, -32768, 255];
        let mut dst = [0i8; 6];
        convert_16i_to_8i(&mut dst, &src);
        assert_eq!(dst, [0, 1, -1, 127, -128, 0]);
    }

    #[test]
    fn test_width_remap_round_trip() {
        let src: Vec<i8> = (-128..=127).collect();
        let mut wide = vec![0i16; src.len()];
        let mut back = vec![0i8; src.len()];
        convert_8i_to_16i(&mut wide, &src);
        convert_16i_to_8i(&mut back, &wide);
        assert_eq!(back, src);
    }

    #[test]
    fn test_int_to_float_divides() {
        let src = [16384i16, -32768, 0];
        let mut dst = [0.0f32; 3];
        convert_16i_to_32f(&mut dst, &src, 32768.0);
        assert_eq!(dst, [0.5, -1.0, 0.0]);
    }

    #[test]
    fn test_float_to_int_rounds_and_saturates() {
        let src = [0.5f32, -0.5, 0.004, 2.0, -2.0];
        let mut dst = [0i8; 5];
        convert_32f_to_8i(&mut dst, &src, 128.0);
        assert_eq!(dst, [64, -64, 1, 127, -128]);
    }

    #[test]
    fn test_float_width_conversion() {
        let src = [1.5f32, -0.25];
        let mut dst = [0.0f64; 2];
        convert_32f_to_64f(&mut dst, &src);
        assert_eq!(dst, [1.5, -0.25]);

        let src = [1.5f64, -0.25];
        let mut dst = [0.0f32; 2];
        convert_64f_to_32f(&mut dst, &src);
        assert_eq!(dst, [1.5, -0.25]);
    }

    #[test]
    fn test_multiply_32fc_real_scalar() {
        let src = [Complex::new(1.0f32, -2.0), Complex::new(0.5, 0.5)];
        let mut dst = [Complex::new(0.0f32, 0.0); 2];
        multiply_32fc(&mut dst, &src, Complex::new(10.0, 0.0));
        assert_eq!(dst, [Complex::new(10.0, -20.0), Complex::new(5.0, 5.0)]);
    }
}
