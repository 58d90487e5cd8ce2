//! Publication records cited by events.
//!
//! The content service tags every publication with its class
//! (`className`, or `schemaClass` in older dumps). The three classes the
//! report knows how to cite get their own variant; anything else is kept as
//! [`Publication::Other`] with just its display name.

use crate::event::Person;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A string or number value (volume and pages arrive as either).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(i64),
}

impl fmt::Display for StringOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringOrNumber::String(s) => f.write_str(s),
            StringOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StringOrNumber {
    fn from(value: &str) -> Self {
        StringOrNumber::String(value.to_string())
    }
}

/// A journal article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteratureReference {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub author: Vec<Person>,
    pub year: Option<i32>,
    pub title: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<StringOrNumber>,
    pub pages: Option<StringOrNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pubmed_identifier: Option<i64>,
}

/// A book, or a chapter of one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub author: Vec<Person>,
    pub year: Option<i32>,
    pub title: Option<String>,
    pub chapter_title: Option<String>,
    pub pages: Option<StringOrNumber>,
    #[serde(rename = "ISBN", skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// A web resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Url {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uniform_resource_locator: String,
}

/// A cited source.
#[derive(Debug, Clone, PartialEq)]
pub enum Publication {
    LiteratureReference(LiteratureReference),
    Book(Book),
    Url(Url),
    /// A publication the report has no citation rule for: an unknown class,
    /// a bare reference, or a known class whose fields could not be read.
    Other {
        class_name: String,
        display_name: String,
    },
}

const LITERATURE_REFERENCE: &str = "LiteratureReference";
const BOOK: &str = "Book";
const URL: &str = "URL";

impl Publication {
    /// Parse a single publication from JSON.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of publications.
    pub fn list_from_json_str(json: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// The schema class name, as the content service spells it.
    pub fn class_name(&self) -> &str {
        match self {
            Publication::LiteratureReference(_) => LITERATURE_REFERENCE,
            Publication::Book(_) => BOOK,
            Publication::Url(_) => URL,
            Publication::Other { class_name, .. } => class_name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Publication::LiteratureReference(r) => &r.display_name,
            Publication::Book(b) => &b.display_name,
            Publication::Url(u) => &u.display_name,
            Publication::Other { display_name, .. } => display_name,
        }
    }
}

impl<'de> Deserialize<'de> for Publication {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let class_name = value
            .get("className")
            .or_else(|| value.get("schemaClass"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(match class_name.as_str() {
            LITERATURE_REFERENCE => {
                read_or_other(value, class_name, Publication::LiteratureReference)
            }
            BOOK => read_or_other(value, class_name, Publication::Book),
            URL => read_or_other(value, class_name, Publication::Url),
            // Unknown classes and bare references (e.g. a dbId number) keep
            // whatever name they carry.
            _ => Publication::Other {
                display_name: display_name_of(&value),
                class_name,
            },
        })
    }
}

fn display_name_of(value: &Value) -> String {
    value
        .get("displayName")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reads a record of a known class. A record whose fields do not fit the
/// class becomes [`Publication::Other`] so the rest of the event still loads.
fn read_or_other<T, F>(value: Value, class_name: String, wrap: F) -> Publication
where
    T: DeserializeOwned,
    F: FnOnce(T) -> Publication,
{
    let display_name = display_name_of(&value);
    match serde_json::from_value(value) {
        Ok(record) => wrap(record),
        Err(err) => {
            tracing::warn!(
                class_name = %class_name,
                display_name = %display_name,
                error = %err,
                "Unreadable publication record"
            );
            Publication::Other {
                class_name,
                display_name,
            }
        }
    }
}

impl Serialize for Publication {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        let mut value = match self {
            Publication::LiteratureReference(r) => serde_json::to_value(r),
            Publication::Book(b) => serde_json::to_value(b),
            Publication::Url(u) => serde_json::to_value(u),
            Publication::Other { display_name, .. } => {
                Ok(serde_json::json!({ "displayName": display_name }))
            }
        }
        .map_err(S::Error::custom)?;

        if let Value::Object(map) = &mut value {
            map.insert("className".to_string(), Value::from(self.class_name()));
        }
        value.serialize(serializer)
    }
}
