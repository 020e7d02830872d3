//! Normalisation of the heterogeneous date values the backend emits.
//!
//! A due date or creation timestamp may arrive as an ISO string, a string of
//! digits, unix seconds or unix milliseconds. Every shape goes through
//! [`normalize_date`] and comes out as a [`DateValue`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Number, Value};

/// Numbers below this are unix seconds, at or above it unix milliseconds.
pub const SECONDS_THRESHOLD: i64 = 100_000_000_000;

const MISSING_DISPLAY: &str = "Sin fecha";
const INVALID_DISPLAY: &str = "Fecha inválida";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    Missing,
    Parsed(DateTime<Utc>),
    Invalid(String),
}

impl DateValue {
    pub fn is_parsed(&self) -> bool {
        matches!(self, DateValue::Parsed(_))
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            DateValue::Parsed(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Short day/month/year rendering used by the task list and report table.
    pub fn display(&self) -> String {
        match self {
            DateValue::Missing => MISSING_DISPLAY.to_string(),
            DateValue::Parsed(dt) => dt.format("%-d/%-m/%Y").to_string(),
            DateValue::Invalid(_) => INVALID_DISPLAY.to_string(),
        }
    }
}

pub fn normalize_date(value: &Value) -> DateValue {
    match value {
        Value::Null => DateValue::Missing,
        Value::Number(n) => from_number(n),
        Value::String(s) => from_string(s),
        other => DateValue::Invalid(format!("unsupported date shape: {other}")),
    }
}

fn from_number(n: &Number) -> DateValue {
    if let Some(i) = n.as_i64() {
        return from_epoch(i);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => from_epoch(f.trunc() as i64),
        _ => DateValue::Invalid(format!("non-finite timestamp: {n}")),
    }
}

fn from_string(raw: &str) -> DateValue {
    let s = raw.trim();
    if s.is_empty() {
        return DateValue::Missing;
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        return match s.parse::<i64>() {
            Ok(i) => from_epoch(i),
            Err(e) => DateValue::Invalid(format!("timestamp out of range: {e}")),
        };
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return DateValue::Parsed(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return DateValue::Parsed(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return DateValue::Parsed(Utc.from_utc_datetime(&naive));
        }
    }

    DateValue::Invalid(format!("unrecognised date string: {s}"))
}

fn from_epoch(value: i64) -> DateValue {
    // Zero is what unset timestamps look like on the wire.
    if value == 0 {
        return DateValue::Missing;
    }

    let millis = if value < SECONDS_THRESHOLD {
        value.checked_mul(1000)
    } else {
        Some(value)
    };

    match millis.and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(dt) => DateValue::Parsed(dt),
        None => DateValue::Invalid(format!("timestamp out of range: {value}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_null_is_missing() {
        assert_eq!(normalize_date(&Value::Null), DateValue::Missing);
        assert_eq!(normalize_date(&json!("")), DateValue::Missing);
    }

    #[test]
    fn test_unix_seconds() {
        assert_eq!(
            normalize_date(&json!(1_725_480_000)),
            DateValue::Parsed(utc(2024, 9, 4, 20, 0, 0))
        );
    }

    #[test]
    fn test_unix_millis() {
        assert_eq!(
            normalize_date(&json!(1_725_480_000_000i64)),
            DateValue::Parsed(utc(2024, 9, 4, 20, 0, 0))
        );
    }

    #[test]
    fn test_threshold_boundary() {
        // Just below the threshold is still seconds, the threshold itself is millis.
        let below = normalize_date(&json!(SECONDS_THRESHOLD - 1));
        assert_eq!(below.as_datetime().unwrap().format("%Y").to_string(), "5138");
        let at = normalize_date(&json!(SECONDS_THRESHOLD));
        assert_eq!(at, DateValue::Parsed(utc(1973, 3, 3, 9, 46, 40)));
    }

    #[test]
    fn test_digit_string_is_numeric() {
        assert_eq!(
            normalize_date(&json!("1725480000000")),
            DateValue::Parsed(utc(2024, 9, 4, 20, 0, 0))
        );
    }

    #[test]
    fn test_float_timestamp() {
        assert_eq!(
            normalize_date(&json!(1_725_480_000.75)),
            DateValue::Parsed(utc(2024, 9, 4, 20, 0, 0))
        );
    }

    #[test]
    fn test_iso_with_offset() {
        assert_eq!(
            normalize_date(&json!("2024-09-04T22:00:00+02:00")),
            DateValue::Parsed(utc(2024, 9, 4, 20, 0, 0))
        );
    }

    #[test]
    fn test_naive_iso_with_fraction() {
        assert_eq!(
            normalize_date(&json!("2025-09-04T19:37:39.123456")),
            DateValue::Parsed(
                utc(2025, 9, 4, 19, 37, 39) + chrono::Duration::microseconds(123_456)
            )
        );
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(
            normalize_date(&json!("2025-01-31")),
            DateValue::Parsed(utc(2025, 1, 31, 0, 0, 0))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            normalize_date(&json!("mañana")),
            DateValue::Invalid(_)
        ));
        assert!(matches!(normalize_date(&json!(true)), DateValue::Invalid(_)));
        assert!(matches!(
            normalize_date(&json!("99999999999999999999999")),
            DateValue::Invalid(_)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(normalize_date(&json!(1_725_480_000)).display(), "4/9/2024");
        assert_eq!(DateValue::Missing.display(), "Sin fecha");
        assert_eq!(
            DateValue::Invalid("x".to_string()).display(),
            "Fecha inválida"
        );
    }
}
