//! Digit grouping into three-digit segments

use crate::{Result, SpanishTextError};
use std::str::FromStr;

/// Maximum number of digits in a segment
const SEGMENT_LEN: usize = 3;

/// One group of up to three decimal digits
///
/// Missing leading digits are zero, so `"7"` is `(0, 0, 7)` and
/// `"42"` is `(0, 4, 2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segment {
    hundreds: u8,
    tens: u8,
    units: u8,
}

impl Segment {
    /// Digits are in `0..=9`; public construction goes through `from_digits`
    pub(crate) fn new(hundreds: u8, tens: u8, units: u8) -> Self {
        Self {
            hundreds,
            tens,
            units,
        }
    }

    /// Unpack a chunk of at most three ASCII digits
    ///
    /// # Errors
    /// Returns [`SpanishTextError::InvalidSegment`] for chunks longer than
    /// three characters or containing anything but `0-9`.
    pub fn from_digits(chunk: &str) -> Result<Self> {
        Self::from_bytes(chunk.as_bytes())
    }

    fn from_bytes(chunk: &[u8]) -> Result<Self> {
        if chunk.len() > SEGMENT_LEN {
            return Err(SpanishTextError::InvalidSegment(format!(
                "expected at most {SEGMENT_LEN} digits, found {}",
                chunk.len()
            )));
        }

        let mut digits = [0u8; SEGMENT_LEN];
        let offset = SEGMENT_LEN - chunk.len();
        for (i, &b) in chunk.iter().enumerate() {
            if !b.is_ascii_digit() {
                return Err(SpanishTextError::InvalidSegment(format!(
                    "non-digit character {:?}",
                    b as char
                )));
            }
            digits[offset + i] = b - b'0';
        }

        Ok(Self::new(digits[0], digits[1], digits[2]))
    }

    /// Hundreds digit
    pub fn hundreds(&self) -> u8 {
        self.hundreds
    }

    /// Tens digit
    pub fn tens(&self) -> u8 {
        self.tens
    }

    /// Units digit
    pub fn units(&self) -> u8 {
        self.units
    }

    /// Numeric value of the segment (0-999)
    pub fn value(&self) -> u16 {
        u16::from(self.hundreds) * 100 + u16::from(self.tens) * 10 + u16::from(self.units)
    }

    /// Check if all three digits are zero
    pub fn is_zero(&self) -> bool {
        self.value() == 0
    }
}

impl FromStr for Segment {
    type Err = SpanishTextError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_digits(s)
    }
}

/// Split a decimal digit string into segments, least significant first
///
/// # Examples
/// ```
/// use spanish_text::split_segments;
///
/// // 10001 -> ["001", "10"]
/// let segments = split_segments("10001").unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].value(), 1);
/// assert_eq!(segments[1].value(), 10);
/// ```
pub fn split_segments(digits: &str) -> Result<Vec<Segment>> {
    if digits.is_empty() {
        return Err(SpanishTextError::InvalidSegment(
            "empty digit string".to_string(),
        ));
    }

    digits
        .as_bytes()
        .rchunks(SEGMENT_LEN)
        .map(Segment::from_bytes)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digits_pads_left() {
        assert_eq!(Segment::from_digits("7").unwrap(), Segment::new(0, 0, 7));
        assert_eq!(Segment::from_digits("42").unwrap(), Segment::new(0, 4, 2));
        assert_eq!(Segment::from_digits("305").unwrap(), Segment::new(3, 0, 5));
        assert_eq!(Segment::from_digits("").unwrap(), Segment::default());
    }

    #[test]
    fn test_from_digits_too_long() {
        let result = Segment::from_digits("1234");
        assert!(matches!(result, Err(SpanishTextError::InvalidSegment(_))));
    }

    #[test]
    fn test_from_digits_non_digit() {
        assert!("1a3".parse::<Segment>().is_err());
        assert!("-1".parse::<Segment>().is_err());
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("1").unwrap(), vec![Segment::new(0, 0, 1)]);
        assert_eq!(
            split_segments("4234").unwrap(),
            vec![Segment::new(2, 3, 4), Segment::new(0, 0, 4)]
        );
        assert_eq!(
            split_segments("1000000").unwrap(),
            vec![
                Segment::new(0, 0, 0),
                Segment::new(0, 0, 0),
                Segment::new(0, 0, 1)
            ]
        );
    }

    #[test]
    fn test_split_segments_exact_multiple() {
        let segments = split_segments("123456").unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].value(), 456);
        assert_eq!(segments[1].value(), 123);
    }

    #[test]
    fn test_split_segments_empty() {
        assert!(split_segments("").is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(Segment::new(0, 0, 0).is_zero());
        assert!(!Segment::new(0, 0, 1).is_zero());
        assert!(!Segment::new(1, 0, 0).is_zero());
    }
}
