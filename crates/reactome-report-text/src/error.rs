//! Errors and non-fatal warnings.

use thiserror::Error;

/// Something worth reporting that did not stop formatting.
///
/// Warnings travel alongside the output they concern and are also logged
/// through `tracing` where they are detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// The publication class has no citation rule; the display name was used.
    #[error("Publication subtype not known: '{class_name}' ({display_name})")]
    UnknownPublicationKind {
        class_name: String,
        display_name: String,
    },

    /// A field the citation style requires was absent; a fallback was used.
    #[error("{class_name} '{display_name}' is missing required field '{field}'")]
    MissingField {
        class_name: String,
        display_name: String,
        field: &'static str,
    },
}

/// Errors loading or validating [`ReportTextOptions`](crate::ReportTextOptions).
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The YAML could not be read into options.
    #[error("Invalid report text options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value was well-formed but not usable.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Result type for option loading.
pub type OptionsResult<T> = Result<T, OptionsError>;
