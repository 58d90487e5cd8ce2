//! Event records and the people who curated them.
//!
//! An [`Event`] is either a reaction-like event or a pathway. Pathways are
//! composite: they carry their sub-events in `hasEvent`. Every event records
//! who authored, edited, reviewed and revised it as lists of
//! [`InstanceEdit`]s, plus optional `created`/`modified` edits.
//!
//! Nested records may arrive as bare dbId references to an object delivered
//! earlier in the same response; those entries are skipped on load.

use crate::error::Result;
use crate::publication::Publication;
use serde::{Deserialize, Serialize};

/// An institution a person belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliation {
    #[serde(default)]
    pub display_name: String,
}

impl Affiliation {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// A curator, reviewer or publication author.
///
/// Two people with the same `display_name` are the same author as far as
/// report generation is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub affiliation: Vec<Affiliation>,
}

impl Person {
    /// Create a person without affiliations.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            affiliation: Vec::new(),
        }
    }

    /// Builder-style helper to attach an affiliation.
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation.push(Affiliation::new(affiliation));
        self
    }
}

/// A timestamped curation action and the people who performed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub author: Vec<Person>,
}

impl InstanceEdit {
    pub fn by(author: Vec<Person>) -> Self {
        Self {
            author,
            ..Default::default()
        }
    }
}

/// A pathway or reaction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable identifier (e.g. "R-HSA-109581").
    #[serde(default)]
    pub st_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    /// Schema class (e.g. "Pathway", "Reaction", "BlackBoxEvent").
    #[serde(default)]
    pub schema_class: String,

    #[serde(default, deserialize_with = "crate::de::records")]
    pub authored: Vec<InstanceEdit>,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub edited: Vec<InstanceEdit>,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub reviewed: Vec<InstanceEdit>,
    #[serde(default, deserialize_with = "crate::de::records")]
    pub revised: Vec<InstanceEdit>,
    #[serde(
        default,
        deserialize_with = "crate::de::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<InstanceEdit>,
    #[serde(
        default,
        deserialize_with = "crate::de::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified: Option<InstanceEdit>,

    /// Sub-events. Present (possibly empty) only for composite events.
    #[serde(
        default,
        deserialize_with = "crate::de::optional_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_event: Option<Vec<Event>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub literature_reference: Vec<Publication>,
}

impl Event {
    /// Parse an event tree from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether this event has nested sub-events (a pathway).
    pub fn is_composite(&self) -> bool {
        self.has_event.is_some()
    }

    /// Child events in order; empty for non-composite events.
    pub fn children(&self) -> &[Event] {
        self.has_event.as_deref().unwrap_or(&[])
    }

    /// Every edit attached to this event (not its children), in role order:
    /// authored, edited, reviewed, revised, created, modified.
    pub fn edits(&self) -> impl Iterator<Item = &InstanceEdit> {
        self.authored
            .iter()
            .chain(&self.edited)
            .chain(&self.reviewed)
            .chain(&self.revised)
            .chain(self.created.as_ref())
            .chain(self.modified.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults_missing_roles_to_empty() {
        let event = Event::from_json_str(r#"{"stId": "R-HSA-1", "displayName": "A"}"#).unwrap();
        assert!(event.authored.is_empty());
        assert!(event.created.is_none());
        assert!(!event.is_composite());
        assert!(event.children().is_empty());
    }

    #[test]
    fn test_empty_has_event_is_still_composite() {
        let event = Event::from_json_str(r#"{"stId": "R-HSA-1", "hasEvent": []}"#).unwrap();
        assert!(event.is_composite());
        assert!(event.children().is_empty());
    }

    #[test]
    fn test_edits_follow_role_order() {
        let event = Event {
            authored: vec![InstanceEdit::by(vec![Person::new("A")])],
            reviewed: vec![InstanceEdit::by(vec![Person::new("C")])],
            edited: vec![InstanceEdit::by(vec![Person::new("B")])],
            modified: Some(InstanceEdit::by(vec![Person::new("F")])),
            created: Some(InstanceEdit::by(vec![Person::new("E")])),
            ..Default::default()
        };

        let names: Vec<_> = event
            .edits()
            .flat_map(|edit| &edit.author)
            .map(|p| p.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "E", "F"]);
    }

    #[test]
    fn test_person_affiliations_deserialize() {
        let person: Person = serde_json::from_str(
            r#"{"displayName": "Jassal, B", "affiliation": [{"displayName": "EBI"}]}"#,
        )
        .unwrap();
        assert_eq!(person.display_name, "Jassal, B");
        assert_eq!(person.affiliation, vec![Affiliation::new("EBI")]);
    }

    #[test]
    fn test_bare_edit_references_are_skipped() {
        let event = Event::from_json_str(
            r#"{
                "stId": "R-HSA-1",
                "authored": [{"author": [{"displayName": "A"}, 901]}, 902],
                "created": 902,
                "modified": {"author": [{"displayName": "B"}]}
            }"#,
        )
        .unwrap();
        assert_eq!(event.authored.len(), 1);
        assert_eq!(event.authored[0].author, vec![Person::new("A")]);
        assert!(event.created.is_none());
        assert_eq!(event.edits().count(), 2);
    }
}
