//! Spanish Text - Spanish cardinal number naming
//!
//! This crate provides:
//! - Digit grouping (segments of three digits, least significant first)
//! - Segment naming (cien, ciento, once..quince, dieciséis, veintiún...)
//! - Full number naming with scale words (mil, millón, billón, trillón)
//! - Naming of dynamic JSON values with type validation
//!
//! # Example
//!
//! ```
//! use spanish_text::{name_number, SpanishFormatter};
//!
//! assert_eq!(name_number(42).unwrap(), "cuarenta y dos");
//! assert_eq!(name_number(1_001_001).unwrap(), "un millón mil uno");
//! assert_eq!(SpanishFormatter::format_number(1000).unwrap(), "mil");
//! ```

mod formatter;
mod segment;
mod value;

pub use formatter::SpanishFormatter;
pub use segment::{split_segments, Segment};

// Re-export the naming steps so each one can be used on its own
pub use formatter::{apply_scale, name_number, name_segment, MAX_SEGMENTS};
pub use value::name_value;

use thiserror::Error;

/// Errors that can occur while naming a number
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanishTextError {
    #[error("Invalid type: expected an integer, found {0}")]
    InvalidType(String),

    #[error("Expected a non-negative integer, found {0}")]
    InvalidDomain(i128),

    #[error("Unsupported magnitude: {digits} digits exceeds the trillones scale")]
    UnsupportedMagnitude { digits: usize },

    #[error("Invalid segment: {0}")]
    InvalidSegment(String),
}

/// Result type for Spanish text operations
pub type Result<T> = std::result::Result<T, SpanishTextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_number() {
        assert_eq!(name_number(0).unwrap(), "cero");
        assert_eq!(name_number(1).unwrap(), "uno");
        assert_eq!(name_number(15).unwrap(), "quince");
        assert_eq!(name_number(21).unwrap(), "veintiuno");
        assert_eq!(name_number(100).unwrap(), "cien");
        assert_eq!(name_number(1000).unwrap(), "mil");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SpanishTextError::InvalidDomain(-3).to_string(),
            "Expected a non-negative integer, found -3"
        );
        assert_eq!(
            SpanishTextError::InvalidType("string".to_string()).to_string(),
            "Invalid type: expected an integer, found string"
        );
    }
}
