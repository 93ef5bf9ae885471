//! Sample format identifiers
//!
//! A [`SampleFormat`] names a wire representation: signed integer of width
//! 8/16/32 or IEEE float of width 32/64, either as a real scalar or as an
//! interleaved complex pair. Formats compare for equality only; there is no
//! meaningful ordering between them.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

// ============================================================================
// Full-scale constants
// ============================================================================

/// Integer units per 1.0 float unit for full-scale 8-bit samples (2^7)
pub const S8_FULL_SCALE: f64 = (1u32 << 7) as f64;

/// Integer units per 1.0 float unit for full-scale 16-bit samples (2^15)
pub const S16_FULL_SCALE: f64 = (1u32 << 15) as f64;

/// Integer units per 1.0 float unit for full-scale 32-bit samples (2^31)
pub const S32_FULL_SCALE: f64 = (1u64 << 31) as f64;

/// Scalar mapping full-scale S8 onto the ±1.0 float range
pub const S8_TO_F32_SCALAR: f64 = 1.0 / S8_FULL_SCALE;

/// Scalar mapping full-scale S16 onto the ±1.0 float range
pub const S16_TO_F32_SCALAR: f64 = 1.0 / S16_FULL_SCALE;

/// Scalar mapping full-scale S32 onto the ±1.0 float range
pub const S32_TO_F32_SCALAR: f64 = 1.0 / S32_FULL_SCALE;

/// Scalar mapping ±1.0 floats onto full-scale S8
pub const F32_TO_S8_SCALAR: f64 = S8_FULL_SCALE;

/// Scalar mapping ±1.0 floats onto full-scale S16
pub const F32_TO_S16_SCALAR: f64 = S16_FULL_SCALE;

/// Scalar mapping ±1.0 floats onto full-scale S32
pub const F32_TO_S32_SCALAR: f64 = S32_FULL_SCALE;

// ============================================================================
// SampleFormat
// ============================================================================

/// Identifier for a numeric sample representation
///
/// The `Display`/`FromStr` tokens (`"S8"`, `"CF32"`, ...) are the canonical
/// wire names; complex formats are interleaved (real, imaginary) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Signed 8-bit integer
    S8,
    /// Signed 16-bit integer
    S16,
    /// Signed 32-bit integer
    S32,
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64,
    /// Complex signed 8-bit integer
    Cs8,
    /// Complex signed 16-bit integer
    Cs16,
    /// Complex signed 32-bit integer
    Cs32,
    /// Complex 32-bit IEEE float
    Cf32,
    /// Complex 64-bit IEEE float
    Cf64,
}

impl SampleFormat {
    /// All formats the crate knows about
    pub const ALL: [SampleFormat; 10] = [
        SampleFormat::S8,
        SampleFormat::S16,
        SampleFormat::S32,
        SampleFormat::F32,
        SampleFormat::F64,
        SampleFormat::Cs8,
        SampleFormat::Cs16,
        SampleFormat::Cs32,
        SampleFormat::Cf32,
        SampleFormat::Cf64,
    ];

    /// Size of one element in bytes (a complex element counts both components)
    pub const fn size_bytes(self) -> usize {
        match self {
            SampleFormat::S8 => 1,
            SampleFormat::S16 | SampleFormat::Cs8 => 2,
            SampleFormat::S32 | SampleFormat::F32 | SampleFormat::Cs16 => 4,
            SampleFormat::F64 | SampleFormat::Cs32 | SampleFormat::Cf32 => 8,
            SampleFormat::Cf64 => 16,
        }
    }

    /// Whether elements are interleaved complex pairs
    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            SampleFormat::Cs8
                | SampleFormat::Cs16
                | SampleFormat::Cs32
                | SampleFormat::Cf32
                | SampleFormat::Cf64
        )
    }

    /// The real format of one component (identity for real formats)
    pub const fn component(self) -> SampleFormat {
        match self {
            SampleFormat::Cs8 => SampleFormat::S8,
            SampleFormat::Cs16 => SampleFormat::S16,
            SampleFormat::Cs32 => SampleFormat::S32,
            SampleFormat::Cf32 => SampleFormat::F32,
            SampleFormat::Cf64 => SampleFormat::F64,
            real => real,
        }
    }

    /// Canonical string token for this format
    pub const fn token(self) -> &'static str {
        match self {
            SampleFormat::S8 => "S8",
            SampleFormat::S16 => "S16",
            SampleFormat::S32 => "S32",
            SampleFormat::F32 => "F32",
            SampleFormat::F64 => "F64",
            SampleFormat::Cs8 => "CS8",
            SampleFormat::Cs16 => "CS16",
            SampleFormat::Cs32 => "CS32",
            SampleFormat::Cf32 => "CF32",
            SampleFormat::Cf64 => "CF64",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SampleFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S8" => Ok(SampleFormat::S8),
            "S16" => Ok(SampleFormat::S16),
            "S32" => Ok(SampleFormat::S32),
            "F32" => Ok(SampleFormat::F32),
            "F64" => Ok(SampleFormat::F64),
            "CS8" => Ok(SampleFormat::Cs8),
            "CS16" => Ok(SampleFormat::Cs16),
            "CS32" => Ok(SampleFormat::Cs32),
            "CF32" => Ok(SampleFormat::Cf32),
            "CF64" => Ok(SampleFormat::Cf64),
            other => Err(ConvertError::UnknownFormat {
                token: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
