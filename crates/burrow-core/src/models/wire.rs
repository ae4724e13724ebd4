//! Serde adapters for the loosely typed fields of the user document.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serializer};

/// `completed` is either `true` or absent/null on the wire. An explicit
/// `false` reads as not completed.
pub(crate) mod completed_flag {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        if *value {
            serializer.serialize_bool(true)
        } else {
            serializer.serialize_none()
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)? == Some(true))
    }
}

/// `date-completed` is written as RFC 3339 by the client, but the backend
/// serializes datetimes as RFC 2822 (`Wed, 15 Oct 2026 10:00:00 GMT`).
pub(crate) mod completion_time {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(ts),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_timestamp(text)
                .map(Some)
                .map_err(<D::Error as serde::de::Error>::custom),
        }
    }

    pub(crate) fn parse_timestamp(text: &str) -> Result<Timestamp, String> {
        if let Ok(ts) = text.parse::<Timestamp>() {
            return Ok(ts);
        }
        jiff::fmt::rfc2822::parse(text)
            .map(|zoned| zoned.timestamp())
            .map_err(|e| format!("invalid completion timestamp '{text}': {e}"))
    }
}

/// Accepts a JSON string or number and keeps it as display text.
pub(crate) fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(text) => text,
        Loose::Int(n) => n.to_string(),
        Loose::Float(n) => n.to_string(),
        Loose::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::completion_time::parse_timestamp;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2025-06-01T12:30:00.000Z").expect("rfc3339");
        assert_eq!(ts.as_second(), 1_748_781_000);
    }

    #[test]
    fn test_parse_rfc2822_from_backend() {
        let ts = parse_timestamp("Sun, 01 Jun 2025 12:30:00 GMT").expect("rfc2822");
        assert_eq!(ts.as_second(), 1_748_781_000);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
