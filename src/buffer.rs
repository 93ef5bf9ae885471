//! Tagged buffer views
//!
//! Converter functions are type-erased at the registry boundary, so sample
//! buffers travel as tagged slice views: [`SampleBuf`] for sources and
//! [`SampleBufMut`] for destinations. A converter recovers the typed slice
//! with the matching accessor and gets a [`ConvertError::FormatMismatch`]
//! if handed the wrong variant.
//!
//! Element counts are per *element*: one complex element is one
//! `Complex<T>`, not two scalars. Conversions that route complex data
//! through real-valued kernels reinterpret the buffer as its component
//! slice (twice the length) via [`complex_components`].

use bytemuck::Pod;
use num_complex::Complex;

use crate::error::{ConvertError, Result};
use crate::format::SampleFormat;

// ============================================================================
// Read-only view
// ============================================================================

/// Read-only view of a sample buffer, tagged with its format
#[derive(Debug, Clone, Copy)]
pub enum SampleBuf<'a> {
    S8(&'a [i8]),
    S16(&'a [i16]),
    S32(&'a [i32]),
    F32(&'a [f32]),
    F64(&'a [f64]),
    Cs8(&'a [Complex<i8>]),
    Cs16(&'a [Complex<i16>]),
    Cs32(&'a [Complex<i32>]),
    Cf32(&'a [Complex<f32>]),
    Cf64(&'a [Complex<f64>]),
}

macro_rules! impl_buf_common {
    ($enum:ident) => {
        /// The format tag carried by this view
        pub fn format(&self) -> SampleFormat {
            match self {
                $enum::S8(_) => SampleFormat::S8,
                $enum::S16(_) => SampleFormat::S16,
                $enum::S32(_) => SampleFormat::S32,
                $enum::F32(_) => SampleFormat::F32,
                $enum::F64(_) => SampleFormat::F64,
                $enum::Cs8(_) => SampleFormat::Cs8,
                $enum::Cs16(_) => SampleFormat::Cs16,
                $enum::Cs32(_) => SampleFormat::Cs32,
                $enum::Cf32(_) => SampleFormat::Cf32,
                $enum::Cf64(_) => SampleFormat::Cf64,
            }
        }

        /// Number of elements (complex formats count complex elements)
        pub fn len(&self) -> usize {
            match self {
                $enum::S8(b) => b.len(),
                $enum::S16(b) => b.len(),
                $enum::S32(b) => b.len(),
                $enum::F32(b) => b.len(),
                $enum::F64(b) => b.len(),
                $enum::Cs8(b) => b.len(),
                $enum::Cs16(b) => b.len(),
                $enum::Cs32(b) => b.len(),
                $enum::Cf32(b) => b.len(),
                $enum::Cf64(b) => b.len(),
            }
        }

        /// Whether the view holds zero elements
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    };
}

macro_rules! buf_accessor {
    ($name:ident, $variant:ident, $format:ident, $ty:ty) => {
        /// Recover the typed slice, or fail if the tag does not match
        pub fn $name(self) -> Result<&'a [$ty]> {
            match self {
                SampleBuf::$variant(buf) => Ok(buf),
                other => Err(ConvertError::FormatMismatch {
                    expected: SampleFormat::$format,
                    actual: other.format(),
                }),
            }
        }
    };
}

impl<'a> SampleBuf<'a> {
    impl_buf_common!(SampleBuf);

    buf_accessor!(as_s8, S8, S8, i8);
    buf_accessor!(as_s16, S16, S16, i16);
    buf_accessor!(as_s32, S32, S32, i32);
    buf_accessor!(as_f32, F32, F32, f32);
    buf_accessor!(as_f64, F64, F64, f64);
    buf_accessor!(as_cs8, Cs8, Cs8, Complex<i8>);
    buf_accessor!(as_cs16, Cs16, Cs16, Complex<i16>);
    buf_accessor!(as_cs32, Cs32, Cs32, Complex<i32>);
    buf_accessor!(as_cf32, Cf32, Cf32, Complex<f32>);
    buf_accessor!(as_cf64, Cf64, Cf64, Complex<f64>);
}

// ============================================================================
// Mutable view
// ============================================================================

/// Mutable view of a sample buffer, tagged with its format
#[derive(Debug)]
pub enum SampleBufMut<'a> {
    S8(&'a mut [i8]),
    S16(&'a mut [i16]),
    S32(&'a mut [i32]),
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
    Cs8(&'a mut [Complex<i8>]),
    Cs16(&'a mut [Complex<i16>]),
    Cs32(&'a mut [Complex<i32>]),
    Cf32(&'a mut [Complex<f32>]),
    Cf64(&'a mut [Complex<f64>]),
}

macro_rules! buf_accessor_mut {
    ($name:ident, $variant:ident, $format:ident, $ty:ty) => {
        /// Recover the typed slice, or fail if the tag does not match
        pub fn $name(self) -> Result<&'a mut [$ty]> {
            match self {
                SampleBufMut::$variant(buf) => Ok(buf),
                other => Err(ConvertError::FormatMismatch {
                    expected: SampleFormat::$format,
                    actual: other.format(),
                }),
            }
        }
    };
}

impl<'a> SampleBufMut<'a> {
    impl_buf_common!(SampleBufMut);

    buf_accessor_mut!(into_s8, S8, S8, i8);
    buf_accessor_mut!(into_s16, S16, S16, i16);
    buf_accessor_mut!(into_s32, S32, S32, i32);
    buf_accessor_mut!(into_f32, F32, F32, f32);
    buf_accessor_mut!(into_f64, F64, F64, f64);
    buf_accessor_mut!(into_cs8, Cs8, Cs8, Complex<i8>);
    buf_accessor_mut!(into_cs16, Cs16, Cs16, Complex<i16>);
    buf_accessor_mut!(into_cs32, Cs32, Cs32, Complex<i32>);
    buf_accessor_mut!(into_cf32, Cf32, Cf32, Complex<f32>);
    buf_accessor_mut!(into_cf64, Cf64, Cf64, Complex<f64>);
}

// ============================================================================
// Component views and length checks
// ============================================================================

/// Reinterpret a complex slice as its interleaved real components (2N long)
pub fn complex_components<T: Pod>(buf: &[Complex<T>]) -> &[T] {
    bytemuck::cast_slice(buf)
}

/// Mutable counterpart of [`complex_components`]
pub fn complex_components_mut<T: Pod>(buf: &mut [Complex<T>]) -> &mut [T] {
    bytemuck::cast_slice_mut(buf)
}

/// Converters require equal element counts on both sides
pub(crate) fn check_lengths(src_len: usize, dst_len: usize) -> Result<()> {
    if src_len == dst_len {
        Ok(())
    } else {
        Err(ConvertError::LengthMismatch { src_len, dst_len })
    }
}

// ============================================================================
// Tests
// ============================================================================
