//! Naming of dynamically typed values

use crate::{name_number, Result, SpanishTextError};
use serde_json::Value;

/// Name a JSON value in Spanish
///
/// Only integral JSON numbers are accepted. Floats are rejected even when
/// they have no fractional part, as are strings of digits.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use spanish_text::name_value;
///
/// assert_eq!(name_value(&json!(101)).unwrap(), "ciento uno");
/// assert!(name_value(&json!(1.5)).is_err());
/// assert!(name_value(&json!("101")).is_err());
/// ```
pub fn name_value(value: &Value) -> Result<String> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                name_number(u)
            } else if let Some(i) = n.as_i64() {
                name_number(i)
            } else {
                Err(invalid_type(value))
            }
        }
        _ => Err(invalid_type(value)),
    }
}

fn invalid_type(value: &Value) -> SpanishTextError {
    tracing::debug!(found = type_name(value), "Rejected non-integral value");
    SpanishTextError::InvalidType(type_name(value).to_string())
}

/// Human readable type of a JSON value
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_value_integers() {
        assert_eq!(name_value(&json!(0)).unwrap(), "cero");
        assert_eq!(name_value(&json!(2000)).unwrap(), "dos mil");
        assert_eq!(
            name_value(&json!(u64::MAX)).unwrap(),
            "dieciocho trillones cuatrocientos cuarenta y seis mil \
             setecientos cuarenta y cuatro billones setenta y tres mil \
             setecientos nueve millones quinientos cincuenta y un mil \
             seiscientos quince"
        );
    }

    #[test]
    fn test_name_value_negative() {
        assert_eq!(
            name_value(&json!(-7)),
            Err(SpanishTextError::InvalidDomain(-7))
        );
    }

    #[test]
    fn test_name_value_invalid_types() {
        let cases = [
            (json!(3.0), "float"),
            (json!("3"), "string"),
            (json!(true), "bool"),
            (json!(null), "null"),
            (json!([1]), "array"),
            (json!({ "n": 1 }), "object"),
        ];

        for (value, expected) in cases {
            assert_eq!(
                name_value(&value),
                Err(SpanishTextError::InvalidType(expected.to_string()))
            );
        }
    }
}
