//! Field decoders for feed values whose JSON type is not stable.
//!
//! The upstream dataset is hand-maintained and writes some scalars as numbers
//! in one record and as strings in the next (`"rare": 3` vs `"rare": "SSR"`).
//! These helpers accept either form so one odd record cannot fail a refresh.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

/// Text field that may arrive as a string, number, bool or `null`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Integer field that may arrive as an integer, float, numeric string or `null`.
#[allow(clippy::cast_possible_truncation)]
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| de::Error::custom(format!("integer out of range: {n}"))),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .or_else(|_| s.parse::<f64>().map(|f| f as i64))
                .map_err(|_| de::Error::custom(format!("expected integer, found {s:?}")))
        }
        Value::Null => Ok(0),
        other => Err(de::Error::custom(format!("expected integer, found {other}"))),
    }
}

/// List of ids; tolerates `null` and numeric ids.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(scalar_text::<D::Error>).collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(de::Error::custom(format!("expected id list, found {other}"))),
    }
}

/// Outcome lines; a bare string counts as a single line.
pub fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(vec![s]),
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(scalar_text::<D::Error>).collect(),
        other => Err(de::Error::custom(format!("expected lines, found {other}"))),
    }
}

/// Any field where `null` should read the same as a missing key.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(E::custom(format!("expected string, found {other}"))),
    }
}
