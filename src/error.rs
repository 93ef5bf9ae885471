//! Error handling for sdrconv
//!
//! Conversion errors are few by design: the hot conversion path performs no
//! validation beyond what the typed buffer views enforce, and the registry
//! surfaces lookup misses without translating them.

use crate::format::SampleFormat;
use crate::registry::Priority;
use thiserror::Error;

/// Result type alias for sdrconv operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Main error type for sdrconv operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No converter is registered for the requested pair. `priority` is
    /// `Some` for exact-tier lookups and `None` for best-available lookups.
    // The field is `from`, not `source`: thiserror treats a field named
    // `source` as the error's cause, and SampleFormat is not an error.
    #[error("no converter registered for {from} -> {to} (priority: {priority:?})")]
    NotFound {
        from: SampleFormat,
        to: SampleFormat,
        priority: Option<Priority>,
    },

    /// A buffer view did not carry the sample format the converter expects.
    #[error("buffer format mismatch: expected {expected}, got {actual}")]
    FormatMismatch {
        expected: SampleFormat,
        actual: SampleFormat,
    },

    /// Source and destination buffers disagree on element count.
    #[error("buffer length mismatch: source has {src_len} elements, destination has {dst_len}")]
    LengthMismatch { src_len: usize, dst_len: usize },

    /// A format token did not name any known sample format.
    #[error("unknown sample format token: {token:?}")]
    UnknownFormat { token: String },
}

impl ConvertError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvertError::NotFound { .. } => "CONVERTER_NOT_FOUND",
            ConvertError::FormatMismatch { .. } => "FORMAT_MISMATCH",
            ConvertError::LengthMismatch { .. } => "LENGTH_MISMATCH",
            ConvertError::UnknownFormat { .. } => "UNKNOWN_FORMAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ConvertError::NotFound {
            from: SampleFormat::S8,
            to: SampleFormat::Cf64,
            priority: None,
        };
        assert_eq!(err.error_code(), "CONVERTER_NOT_FOUND");
    }

    #[test]
    fn test_not_found_has_no_cause_chain() {
        let err = ConvertError::NotFound {
            from: SampleFormat::S16,
            to: SampleFormat::F32,
            priority: Some(Priority::Custom),
        };
        let dynamic: &dyn std::error::Error = &err;
        assert!(dynamic.source().is_none());
        assert!(err.to_string().contains("S16 -> F32"));
    }

    #[test]
    fn test_error_display() {
        let err = ConvertError::LengthMismatch {
            src_len: 128,
            dst_len: 64,
        };
        let message = err.to_string();
        assert!(message.contains("128"));
        assert!(message.contains("64"));
    }
}
