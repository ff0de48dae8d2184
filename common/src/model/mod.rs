//! Records as received from the marketplace API.
//!
//! The API is not consistent about field types, so every optional field is
//! decoded leniently: a value of the wrong shape reads as absent instead of
//! rejecting the whole record. The defaults for absent values live on the
//! accessor methods of each record type.

pub mod category;
pub mod farmer;
pub mod order;
pub mod product;
pub mod user;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A reference to another record that the API may or may not populate.
///
/// Populated references arrive as objects (`{ "_id": ..., "name": ... }`),
/// unpopulated ones as the bare identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Populated(NamedRef),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Populated(named) => &named.id,
            Reference::Id(id) => id,
        }
    }

    /// Display name, only known when the reference was populated.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Populated(named) => named.name.as_deref().filter(|n| !n.is_empty()),
            Reference::Id(_) => None,
        }
    }
}

/// Decodes any JSON value into `Some(T)` when it has the expected shape and
/// `None` otherwise. Never fails.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Identifiers are strings, but some endpoints send numeric ids.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(id) => id,
        Value::Number(id) => id.to_string(),
        _ => String::new(),
    })
}

/// A timestamp field: either text or milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Millis(f64),
}

impl Timestamp {
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Text(raw) => parse_timestamp(raw),
            Timestamp::Millis(millis) if millis.is_finite() => {
                DateTime::from_timestamp_millis(millis.trunc() as i64)
            }
            Timestamp::Millis(_) => None,
        }
    }
}

/// Parses the timestamp formats the API has been seen to emit: RFC 3339,
/// a naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]` (taken as UTC), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_accepts_populated_and_bare_forms() {
        let populated: Reference =
            serde_json::from_value(json!({ "_id": "u1", "name": "Asha" })).unwrap();
        assert_eq!(populated.id(), "u1");
        assert_eq!(populated.name(), Some("Asha"));

        let bare: Reference = serde_json::from_value(json!("u2")).unwrap();
        assert_eq!(bare.id(), "u2");
        assert_eq!(bare.name(), None);
    }

    #[test]
    fn empty_populated_name_reads_as_absent() {
        let populated: Reference = serde_json::from_value(json!({ "_id": "u1", "name": "" })).unwrap();
        assert_eq!(populated.name(), None);
    }

    #[test]
    fn parse_timestamp_formats() {
        let rfc = parse_timestamp("2024-03-01T10:00:00.000Z").unwrap();
        assert_eq!(rfc.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        let offset = parse_timestamp("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(offset, rfc);

        let naive = parse_timestamp("2024-03-01T10:00:00").unwrap();
        assert_eq!(naive, rfc);

        let spaced = parse_timestamp("2024-03-01 10:00:00").unwrap();
        assert_eq!(spaced, rfc);

        let date = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn timestamps_as_text_or_epoch_millis() {
        let text: Timestamp = serde_json::from_value(json!("2024-03-01T10:00:00Z")).unwrap();
        let millis: Timestamp = serde_json::from_value(json!(1709287200000_i64)).unwrap();

        assert_eq!(millis, Timestamp::Millis(1_709_287_200_000.0));
        assert_eq!(text.to_utc(), millis.to_utc());
        assert!(Timestamp::Text("soon".to_string()).to_utc().is_none());
    }

    #[test]
    fn parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
    }
}
