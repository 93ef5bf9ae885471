//! sdrconv - Vectorized Sample-Format Conversion
//!
//! sdrconv converts contiguous buffers between SDR sample formats
//! (signed 8/16/32-bit integers, 32/64-bit floats, real and complex)
//! through a priority-tiered converter registry:
//!
//! - the **generic** tier is a portable scalar baseline covering every
//!   supported pair,
//! - the **vectorized** tier layers faster kernel-backed implementations on
//!   top, strictly additive: removing it never breaks a conversion, it only
//!   slows one down.
//!
//! # Scalar convention
//!
//! Every converter takes a scalar meaning "multiply the source by this to
//! reach the destination range". Converting full-scale S16 to ±1.0 floats
//! uses `1.0 / 32768.0`; the inverse direction uses `32768.0`. Pure integer
//! width remaps (S8 <-> S16) ignore the scalar.
//!
//! # Example
//!
//! ```
//! use sdrconv::{initialize, SampleBuf, SampleBufMut};
//! use sdrconv::format::S16_TO_F32_SCALAR;
//!
//! let registry = initialize();
//! let samples = [0i16, 16384, -32768];
//! let mut floats = [0.0f32; 3];
//! registry
//!     .convert(
//!         SampleBuf::S16(&samples),
//!         SampleBufMut::F32(&mut floats),
//!         S16_TO_F32_SCALAR,
//!     )
//!     .unwrap();
//! assert_eq!(floats, [0.0, 0.5, -1.0]);
//! ```

pub mod buffer;
pub mod error;
pub mod format;
pub mod generic;
pub mod kernels;
pub mod registry;
pub mod vectorized;

pub use buffer::{complex_components, complex_components_mut, SampleBuf, SampleBufMut};
pub use error::{ConvertError, Result};
pub use format::SampleFormat;
pub use registry::{initialize, ConversionKey, ConverterFn, ConverterRegistry, Priority};
pub use vectorized::{ScalarConvention, VectorizedEntry};
