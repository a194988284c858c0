//! Spanish cardinal number formatting

use crate::segment::{split_segments, Segment};
use crate::{Result, SpanishTextError};

/// Name of zero
const ZERO: &str = "cero";

/// Short form of one, used before scale words ("un millón")
const SHORT_ONE: &str = "un";

/// Long form of one, used only as the last word of the whole number
const LONG_ONE: &str = "uno";

/// Hundreds (0-9); exactly 100 is "cien"
const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

const HUNDRED_EXACT: &str = "cien";

/// Tens (0-9) standing alone
const TENS: [&str; 10] = [
    "",
    "diez",
    "veinte",
    "treinta",
    "cuarenta",
    "cincuenta",
    "sesenta",
    "setenta",
    "ochenta",
    "noventa",
];

/// Tens written as one word with the unit (dieciocho, veintitrés)
const COMPOUND_TENS: [&str; 3] = ["", "dieci", "veinti"];

/// 11-15 override the regular tens/units composition
const TEENS: [&str; 5] = ["once", "doce", "trece", "catorce", "quince"];

/// Unit names (0-9) keyed by tens context: plain, after "dieci", after "veinti"
const UNITS: [[&str; 10]; 3] = [
    [
        "", "un", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
    ],
    [
        "", "un", "dos", "tres", "cuatro", "cinco", "séis", "siete", "ocho", "nueve",
    ],
    [
        "", "ún", "dós", "trés", "cuatro", "cinco", "séis", "siete", "ocho", "nueve",
    ],
];

/// Scale words (singular, plural) for each segment position
const SCALES: [(&str, &str); 7] = [
    ("", ""),
    ("mil", "mil"),
    ("millón", "millones"),
    ("mil", "mil"),
    ("billón", "billones"),
    ("mil", "mil"),
    ("trillón", "trillones"),
];

/// Largest number of three-digit segments that can be named
pub const MAX_SEGMENTS: usize = SCALES.len();

/// Spanish number formatting utilities
pub struct SpanishFormatter;

impl SpanishFormatter {
    /// Format an integer as Spanish words
    pub fn format_number(n: i64) -> Result<String> {
        name_number(n)
    }

    /// Format a JSON value as Spanish words
    pub fn format_value(value: &serde_json::Value) -> Result<String> {
        crate::name_value(value)
    }
}

/// Name a non-negative integer in Spanish
///
/// Accepts any integer type convertible to `i128`.
///
/// # Errors
/// - [`SpanishTextError::InvalidDomain`] for negative values
/// - [`SpanishTextError::UnsupportedMagnitude`] for values of 10^21 and above
///
/// # Examples
/// ```
/// use spanish_text::name_number;
///
/// assert_eq!(name_number(0).unwrap(), "cero");
/// assert_eq!(name_number(31).unwrap(), "treinta y uno");
/// assert_eq!(name_number(21_000).unwrap(), "veintiún mil");
/// assert_eq!(name_number(2_000_000u64).unwrap(), "dos millones");
/// assert!(name_number(-1).is_err());
/// ```
pub fn name_number<T: Into<i128>>(value: T) -> Result<String> {
    let value: i128 = value.into();

    if value < 0 {
        tracing::debug!(value = %value, "Rejected negative number");
        return Err(SpanishTextError::InvalidDomain(value));
    }
    if value == 0 {
        return Ok(ZERO.to_string());
    }

    let digits = value.to_string();
    let segments = split_segments(&digits)?;
    if segments.len() > MAX_SEGMENTS {
        tracing::debug!(digits = digits.len(), "Rejected number beyond trillones");
        return Err(SpanishTextError::UnsupportedMagnitude {
            digits: digits.len(),
        });
    }

    tracing::debug!(value = %digits, segments = segments.len(), "Naming number");

    let mut parts = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let phrase = name_segment(*segment, index == 0);

        // An empty group only keeps its scale word under a non-zero group ("mil millones")
        let above_is_named = segments
            .get(index + 1)
            .is_some_and(|above| !above.is_zero());
        if phrase.is_empty() && !above_is_named {
            continue;
        }

        if let Some(named) = apply_scale(&phrase, index)? {
            tracing::trace!(index, phrase = %named, "Named segment");
            parts.push(named);
        }
    }

    parts.reverse();
    Ok(parts.join(" "))
}

/// Name one three-digit segment (0-999) without scale word
///
/// `long_unit` selects "uno" over "un" for a trailing one, and is set only
/// for the least significant segment of a number.
///
/// # Examples
/// ```
/// use spanish_text::{name_segment, Segment};
///
/// let segment = Segment::from_digits("221").unwrap();
/// assert_eq!(name_segment(segment, true), "doscientos veintiuno");
/// assert_eq!(name_segment(segment, false), "doscientos veintiún");
/// ```
pub fn name_segment(segment: Segment, long_unit: bool) -> String {
    let hundreds = match segment.hundreds() {
        1 if segment.tens() == 0 && segment.units() == 0 => HUNDRED_EXACT,
        h => HUNDREDS[usize::from(h)],
    };
    let tens_units = name_tens_units(segment.tens(), segment.units(), long_unit);

    match (hundreds.is_empty(), tens_units.is_empty()) {
        (false, false) => format!("{hundreds} {tens_units}"),
        (false, true) => hundreds.to_string(),
        _ => tens_units,
    }
}

fn name_tens_units(tens: u8, units: u8, long_unit: bool) -> String {
    let t = usize::from(tens);
    let u = usize::from(units);

    if tens == 1 && (1..=5).contains(&units) {
        return TEENS[u - 1].to_string();
    }

    let unit = if units == 1 && long_unit {
        LONG_ONE
    } else {
        UNITS[unit_context(tens)][u]
    };

    match (tens, units) {
        (0, _) => unit.to_string(),
        (_, 0) => TENS[t].to_string(),
        (1 | 2, _) => format!("{}{unit}", COMPOUND_TENS[t]),
        _ => format!("{} y {unit}", TENS[t]),
    }
}

/// Row of `UNITS` to use after the given tens digit
fn unit_context(tens: u8) -> usize {
    match tens {
        1 | 2 => usize::from(tens),
        _ => 0,
    }
}

/// Attach the scale word for segment position `index` to a named segment
///
/// Returns `None` when the segment contributes nothing. A lone "un" drops
/// the numeral before "mil" and keeps it, singular, before the
/// millón/billón/trillón family. An empty phrase at an even position yields
/// the bare plural, as in "mil millones".
///
/// # Examples
/// ```
/// use spanish_text::apply_scale;
///
/// assert_eq!(apply_scale("un", 1).unwrap().as_deref(), Some("mil"));
/// assert_eq!(apply_scale("un", 2).unwrap().as_deref(), Some("un millón"));
/// assert_eq!(apply_scale("dos", 4).unwrap().as_deref(), Some("dos billones"));
/// assert_eq!(apply_scale("", 3).unwrap(), None);
/// ```
pub fn apply_scale(phrase: &str, index: usize) -> Result<Option<String>> {
    if index == 0 {
        return Ok((!phrase.is_empty()).then(|| phrase.to_string()));
    }

    let (singular, plural) = SCALES
        .get(index)
        .copied()
        .ok_or(SpanishTextError::UnsupportedMagnitude {
            digits: index * 3 + 1,
        })?;
    let thousands = index % 2 == 1;

    let named = match phrase {
        "" if thousands => None,
        "" => Some(plural.to_string()),
        SHORT_ONE if thousands => Some(singular.to_string()),
        SHORT_ONE => Some(format!("{SHORT_ONE} {singular}")),
        _ => Some(format!("{phrase} {plural}")),
    };

    Ok(named)
}
