//! Deserialization helpers for content service payloads.
//!
//! The content service writes an object in full the first time it appears in
//! a response and as its bare dbId everywhere after that. A list of people
//! can therefore read `[{"displayName": "Smith, J"}, 12345]`. The helpers
//! here keep inline objects and skip bare references: the referenced object
//! was already delivered earlier in the same response.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A list field where entries may be bare references. Absent or null is empty.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    inline_records(values.unwrap_or_default()).map_err(D::Error::custom)
}

/// An optional list field where entries may be bare references.
pub(crate) fn optional_records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    values
        .map(inline_records)
        .transpose()
        .map_err(D::Error::custom)
}

/// A single optional object that may be a bare reference.
pub(crate) fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) if is_inline(&value) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn inline_records<T: DeserializeOwned>(values: Vec<Value>) -> serde_json::Result<Vec<T>> {
    values
        .into_iter()
        .filter(is_inline)
        .map(serde_json::from_value)
        .collect()
}

fn is_inline(value: &Value) -> bool {
    match value {
        Value::Object(_) => true,
        Value::Null => false,
        reference => {
            tracing::debug!(reference = %reference, "Skipping reference to an earlier object");
            false
        }
    }
}
