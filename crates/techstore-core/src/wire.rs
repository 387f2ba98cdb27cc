//! Serde helpers for the storefront backend's JSON shapes.
//!
//! The backend serialises prices as floats (`29999000.0`) and writes
//! timestamps without a UTC offset (`2024-05-01T09:30:00.123456`). These
//! helpers normalise both at the deserialisation boundary so the domain types
//! can use integer currency units and `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize a price given as any JSON number into whole currency units.
///
/// Fractional values are rounded to the nearest unit. Negative and
/// non-finite values are rejected.
///
/// # Errors
///
/// Returns a deserialisation error if the value is not a number, is
/// negative, or is not finite.
pub fn price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() || raw < 0.0 {
        return Err(D::Error::custom(format!("invalid price: {raw}")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(raw.round() as u64)
}

/// Deserialize a list that may be `null` or absent as an empty `Vec`.
///
/// Pair with `#[serde(default)]` to also cover the absent case.
///
/// # Errors
///
/// Returns a deserialisation error if the value is neither `null` nor a list.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 timestamp interpreted as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// `#[serde(with = "wire::timestamp")]` for required timestamps.
pub mod timestamp {
    use serde::de::Error as _;

    use super::{parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// # Errors
    ///
    /// Returns a deserialisation error if the string is not a recognised timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

/// `#[serde(default, with = "wire::optional_timestamp")]` for optional timestamps.
pub mod optional_timestamp {
    use serde::de::Error as _;

    use super::{parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// # Errors
    ///
    /// Propagates serializer failures.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// # Errors
    ///
    /// Returns a deserialisation error if a present string is not a recognised timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parse_timestamp_accepts_rfc3339() {
        let dt = parse_timestamp("2024-05-01T09:30:00+02:00").expect("rfc3339 should parse");
        assert_eq!(dt.hour(), 7);
    }

    #[test]
    fn parse_timestamp_treats_naive_as_utc() {
        let dt = parse_timestamp("2024-05-01T09:30:00.123456").expect("naive should parse");
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "price")]
        price: u64,
    }

    #[test]
    fn price_accepts_float_and_integer() {
        let p: Priced = serde_json::from_str(r#"{"price": 29999000.0}"#).unwrap();
        assert_eq!(p.price, 29_999_000);
        let p: Priced = serde_json::from_str(r#"{"price": 5999000}"#).unwrap();
        assert_eq!(p.price, 5_999_000);
    }

    #[test]
    fn price_rounds_fractional_units() {
        let p: Priced = serde_json::from_str(r#"{"price": 99.6}"#).unwrap();
        assert_eq!(p.price, 100);
    }

    #[test]
    fn price_rejects_negative() {
        let err = serde_json::from_str::<Priced>(r#"{"price": -1}"#).unwrap_err();
        assert!(err.to_string().contains("invalid price"), "{err}");
    }
}
