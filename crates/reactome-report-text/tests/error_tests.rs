//! Tests for warning and error Display output.

use reactome_report_text::{OptionsError, ReportTextOptions, Warning};

#[test]
fn test_unknown_publication_kind_display() {
    let warning = Warning::UnknownPublicationKind {
        class_name: "Patent".to_string(),
        display_name: "US 123".to_string(),
    };
    let display = warning.to_string();
    assert!(
        display.contains("Publication subtype not known: 'Patent'"),
        "Got: {}",
        display
    );
    assert!(display.contains("US 123"), "Got: {}", display);
}

#[test]
fn test_missing_field_display() {
    let warning = Warning::MissingField {
        class_name: "Book".to_string(),
        display_name: "Cell death".to_string(),
        field: "year",
    };
    assert_eq!(
        warning.to_string(),
        "Book 'Cell death' is missing required field 'year'"
    );
}

#[test]
fn test_invalid_value_display() {
    let err = OptionsError::InvalidValue {
        key: "citation.max-authors",
        message: "must name at least one author".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid value for 'citation.max-authors': must name at least one author"
    );
}

#[test]
fn test_yaml_error_display() {
    let err = ReportTextOptions::from_yaml_str("citation: 5").unwrap_err();
    let display = err.to_string();
    assert!(
        display.starts_with("Invalid report text options"),
        "Got: {}",
        display
    );
}
