//! Lenient field decoding for records fetched from the remote API.
//!
//! The API is loose about types: enumerated fields arrive as `0`/`1` or
//! `"0"`/`"1"`, identifiers as numbers or strings, dates in several shapes.
//! Every field is coerced here, once, during deserialization so the engines
//! only ever compare typed values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Caravan;

/// A closed set of values encoded as small integers on the wire.
pub trait Coded: Sized + Copy {
    /// Decode from the wire integer, `None` when the code is not part of the set.
    fn from_code(code: i64) -> Option<Self>;

    /// The wire integer for this value.
    fn code(self) -> u8;
}

/// Read a JSON value as an integer: numbers, numeric strings and booleans.
pub fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Parse a date or timestamp as sent by the API.
///
/// Accepted shapes, in order: RFC 3339, RFC 2822 (HTTP dates), a bare
/// `YYYY-MM-DD` (UTC midnight), and a naive `YYYY-MM-DDTHH:MM[:SS[.f]]`
/// (read as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Identifier from a string or number; anything else becomes empty.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Free text kept verbatim; numbers and booleans take their text form, null is empty.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

/// Optional free text; blank strings count as absent.
pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Ear tag: a number when it reads as one, otherwise its non-blank text.
pub fn caravan<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Caravan>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| {
        if let Some(n) = integer_of(&value) {
            return Some(Caravan::Number(n));
        }
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Caravan::Tag(s.trim().to_string())),
            Value::Number(n) => Some(Caravan::Tag(n.to_string())),
            _ => None,
        }
    }))
}

/// Non-negative count, `0` when absent or invalid.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(integer_of)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

/// Enumerated field, `None` when absent or outside the set.
pub fn coded<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Coded,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(integer_of)
        .and_then(T::from_code))
}

/// Date or timestamp, `None` when absent or unparsable.
pub fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => parse_timestamp(&s),
        _ => None,
    })
}
