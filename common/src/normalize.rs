//! Extraction of record lists from inconsistently shaped API responses.
//!
//! Depending on the endpoint (and on the server version) a collection may
//! arrive as a bare array, as `{ "data": [...] }`, or under a
//! resource-specific key such as `farmers` or `users`. Each resource has an
//! ordered list of keys that are tried in turn; the first array found wins.
//! An unrecognized payload yields an empty list and a warning in the log,
//! never an error.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope keys for the farmer directory, in priority order.
pub const FARMER_KEYS: &[&str] = &["data", "farmers", "users"];
pub const ORDER_KEYS: &[&str] = &["data", "orders"];
pub const PRODUCT_KEYS: &[&str] = &["data", "products"];
pub const CATEGORY_KEYS: &[&str] = &["data", "categories"];
/// Keys under which single-record endpoints wrap their payload.
pub const SESSION_KEYS: &[&str] = &["user", "data"];

/// Returns the record list carried by `raw`.
///
/// - a bare array is returned as-is (shallow copy);
/// - otherwise the first key of `known_keys` whose value is an array;
/// - otherwise an empty list.
pub fn normalize(raw: &Value, known_keys: &[&str]) -> Vec<Value> {
    if let Some(items) = raw.as_array() {
        return items.clone();
    }

    for key in known_keys {
        if let Some(items) = raw.get(*key).and_then(Value::as_array) {
            return items.clone();
        }
    }

    report_mismatch(raw, known_keys);
    Vec::new()
}

/// [`normalize`], then decodes every entry as `T`.
///
/// Entries that do not decode (`null`, scalars, ...) are skipped.
pub fn normalize_records<T: DeserializeOwned>(raw: &Value, known_keys: &[&str]) -> Vec<T> {
    normalize(raw, known_keys)
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("skipping record #{} that does not decode: {}", index, err);
                None
            }
        })
        .collect()
}

/// [`normalize`], then decodes every entry as `T`, keeping one record per
/// entry: entries that do not decode read as `T::default()`.
///
/// Use this where the number of entries matters, such as order counts.
pub fn normalize_entries<T: DeserializeOwned + Default>(raw: &Value, known_keys: &[&str]) -> Vec<T> {
    normalize(raw, known_keys)
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<T>(item).unwrap_or_else(|err| {
                debug!("record #{} does not decode, using defaults: {}", index, err);
                T::default()
            })
        })
        .collect()
}

/// Single-record counterpart of [`normalize_records`]: decodes the first
/// object found under `known_keys`, falling back to `raw` itself.
pub fn normalize_one<T: DeserializeOwned>(raw: &Value, known_keys: &[&str]) -> Option<T> {
    let inner = known_keys
        .iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| value.is_object())
        .unwrap_or(raw);

    match serde_json::from_value(inner.clone()) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("response did not contain a usable record: {}", err);
            None
        }
    }
}

fn report_mismatch(raw: &Value, known_keys: &[&str]) {
    match raw {
        Value::Null => debug!("no payload to normalize"),
        Value::Object(map) => {
            let present: Vec<&str> = map.keys().map(String::as_str).collect();
            warn!(
                "unrecognized response envelope: expected an array under one of {:?}, found keys {:?}",
                known_keys, present
            );
        }
        other => warn!(
            "unrecognized response envelope: expected an array or object, found {}",
            json_type(other)
        ),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::farmer::Farmer;
    use crate::model::user::SessionUser;
    use serde_json::json;

    fn records() -> Value {
        json!([{ "_id": "f1", "name": "Asha" }, { "_id": "f2", "name": "Ravi" }])
    }

    #[test]
    fn every_supported_envelope_shape() {
        let expected = records().as_array().unwrap().clone();

        assert_eq!(normalize(&records(), FARMER_KEYS), expected);
        assert_eq!(normalize(&json!({ "success": true, "data": records() }), FARMER_KEYS), expected);
        assert_eq!(normalize(&json!({ "success": true, "farmers": records() }), FARMER_KEYS), expected);
        assert_eq!(normalize(&json!({ "users": records() }), FARMER_KEYS), expected);
        assert!(normalize(&json!({ "unknownKey": records() }), FARMER_KEYS).is_empty());
        assert!(normalize(&json!({}), FARMER_KEYS).is_empty());
    }

    #[test]
    fn first_matching_key_wins() {
        let raw = json!({
            "users": [{ "_id": "u" }],
            "data": [{ "_id": "d" }],
            "farmers": [{ "_id": "f" }]
        });
        assert_eq!(normalize(&raw, FARMER_KEYS), vec![json!({ "_id": "d" })]);
    }

    #[test]
    fn non_array_values_under_known_keys_are_skipped() {
        let raw = json!({ "data": { "farmers": [] }, "farmers": [{ "_id": "f" }] });
        assert_eq!(normalize(&raw, FARMER_KEYS), vec![json!({ "_id": "f" })]);
    }

    #[test]
    fn scalars_and_null_degrade_to_empty() {
        for raw in [json!(null), json!(true), json!(3), json!("farmers")] {
            assert!(normalize(&raw, FARMER_KEYS).is_empty(), "{raw}");
        }
    }

    #[test]
    fn normalize_records_skips_entries_that_do_not_decode() {
        let raw = json!({ "data": [{ "_id": "f1", "name": "Asha" }, null, 7, { "name": "Ravi" }] });
        let farmers: Vec<Farmer> = normalize_records(&raw, FARMER_KEYS);

        assert_eq!(farmers.len(), 2);
        assert_eq!(farmers[0].id, "f1");
        assert_eq!(farmers[1].display_name(), Some("Ravi"));
    }

    #[test]
    fn normalize_entries_keeps_one_record_per_entry() {
        let raw = json!({ "data": [null, { "_id": "f1", "name": "Asha" }, "x"] });
        let farmers: Vec<Farmer> = normalize_entries(&raw, FARMER_KEYS);

        assert_eq!(farmers.len(), 3);
        assert_eq!(farmers[0], Farmer::default());
        assert_eq!(farmers[1].id, "f1");
        assert_eq!(farmers[2], Farmer::default());
    }

    #[test]
    fn normalize_one_unwraps_known_keys_or_uses_root() {
        let wrapped: Option<SessionUser> =
            normalize_one(&json!({ "user": { "_id": "u1", "name": "Asha" } }), SESSION_KEYS);
        assert_eq!(wrapped.map(|u| u.id), Some("u1".to_string()));

        let bare: Option<SessionUser> =
            normalize_one(&json!({ "_id": "u2", "role": "farmer" }), SESSION_KEYS);
        assert!(bare.is_some_and(|u| u.is_farmer()));

        let missing: Option<SessionUser> = normalize_one(&json!("nope"), SESSION_KEYS);
        assert!(missing.is_none());
    }
}
