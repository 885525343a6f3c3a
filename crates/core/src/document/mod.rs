//! Fail-soft decoding of raw store documents.
//!
//! Field values written by the admin forms are not guaranteed to be
//! numbers: an untouched input is stored as `""`, older records may lack a
//! field entirely. Every coercion here maps such values to a neutral
//! default instead of failing, so one bad record cannot blank out a period.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde_json::Value;

/// Coerces a monetary field to a decimal; anything non-numeric is zero.
#[must_use]
pub fn coerce_amount(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Decimal::from(i);
            }
            parse_decimal(&n.to_string())
                .or_else(|| n.as_f64().and_then(Decimal::from_f64))
                .unwrap_or(Decimal::ZERO)
        }
        Value::String(s) => parse_decimal(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Coerces a count field to an integer, truncating toward zero.
#[must_use]
pub fn coerce_count(value: &Value) -> i64 {
    coerce_amount(value).trunc().to_i64().unwrap_or(0)
}

/// Coerces a name-to-amount map. Non-object values yield an empty map.
#[must_use]
pub fn coerce_amount_map(value: &Value) -> BTreeMap<String, Decimal> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(name, amount)| (name.clone(), coerce_amount(amount)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

/// Coerces a text field. Numbers are rendered; other kinds are empty.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerces an optional text field; blank text is `None`.
#[must_use]
pub fn coerce_optional_text(value: &Value) -> Option<String> {
    Some(coerce_text(value)).filter(|s| !s.is_empty())
}

/// Extracts the calendar date of a stored date or timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339, epoch milliseconds, and store timestamp
/// objects (`seconds`/`_seconds` with optional nanoseconds). Timestamps
/// keep their UTC date.
#[must_use]
pub fn coerce_date(value: &Value) -> Option<NaiveDate> {
    if let Value::String(s) = value {
        if let Ok(date) = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
            return Some(date);
        }
    }
    coerce_timestamp(value).map(|ts| ts.date_naive())
}

/// Extracts a UTC wall-clock time from a stored timestamp.
#[must_use]
pub fn coerce_datetime(value: &Value) -> Option<NaiveDateTime> {
    if let Value::String(s) = value {
        let s = s.trim();
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(dt);
            }
        }
    }
    coerce_timestamp(value).map(|ts| ts.naive_utc())
}

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .or_else(|| map.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            DateTime::from_timestamp(seconds, nanos)
        }
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
