//! Loose Value Coercion
//!
//! Quantities and text fields arrive loosely typed, both from request bodies and
//! from documents written by earlier versions of the service. These helpers turn
//! them into the typed record fields without ever failing a whole load.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_QTY: u64 = 1;

/// Coerces a raw `qty` input field.
///
/// - absent, `null`, `false`, `""` or `0` → `DEFAULT_QTY`
/// - a whole non-negative number, or a string holding one → that number
/// - anything else → `DEFAULT_QTY` (logged)
pub fn parse_qty(raw: Option<&Value>) -> u64 {
    let parsed = match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => return DEFAULT_QTY,
        Some(Value::Bool(true)) => Some(1),
        Some(Value::Number(number)) => match number.as_u64() {
            Some(0) => return DEFAULT_QTY,
            Some(qty) => Some(qty),
            None => number.as_f64().and_then(whole_number),
        },
        Some(Value::String(text)) if text.is_empty() => return DEFAULT_QTY,
        Some(Value::String(text)) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!("Ignoring invalid qty {:?}, using {}", raw, DEFAULT_QTY);
        DEFAULT_QTY
    })
}

fn whole_number(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

pub fn default_qty() -> u64 {
    DEFAULT_QTY
}

/// Reads a stored quantity. Stored whole numbers, zero included, are kept as
/// written; `null` (a NaN in older files), negative or fractional values go
/// through `parse_qty`.
pub fn stored_qty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let raw = Value::deserialize(deserializer)?;
    if let Value::Number(number) = &raw
        && let Some(qty) = number.as_u64()
    {
        return Ok(qty);
    }
    Ok(parse_qty(Some(&raw)))
}

/// Reads a stored text field. `null` becomes empty, numbers and booleans their
/// JSON text.
pub fn stored_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(stored_optional_text(deserializer)?.unwrap_or_default())
}

pub fn stored_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
