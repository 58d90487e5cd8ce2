//! Formatting options.
//!
//! Options deserialize from YAML with kebab-case keys; every key is
//! optional and defaults to the house citation style:
//!
//! ```yaml
//! citation:
//!   max-authors: 6
//!   et-al: " et. al."
//!   missing-year: "n.d."
//! authors:
//!   separator: ", "
//!   shape-names: true
//! ```

use crate::error::{OptionsError, OptionsResult};
use serde::{Deserialize, Serialize};

/// Options for citation strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CitationOptions {
    /// Authors named before the list is cut off.
    pub max_authors: usize,
    /// Appended after the names when authors were cut off.
    pub et_al: String,
    /// Printed in place of a missing publication year.
    pub missing_year: String,
}

impl Default for CitationOptions {
    fn default() -> Self {
        Self {
            max_authors: 6,
            et_al: " et. al.".to_string(),
            missing_year: "n.d.".to_string(),
        }
    }
}

/// Options for the cover page author block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AuthorOptions {
    /// Placed between consecutive people.
    pub separator: String,
    /// Pass each name through [`shape`](crate::shape) so it never wraps.
    pub shape_names: bool,
}

impl Default for AuthorOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            shape_names: true,
        }
    }
}

/// All report text options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportTextOptions {
    pub citation: CitationOptions,
    pub authors: AuthorOptions,
}

impl ReportTextOptions {
    /// Read options from YAML and validate them.
    pub fn from_yaml_str(yaml: &str) -> OptionsResult<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> OptionsResult<()> {
        if self.citation.max_authors == 0 {
            return Err(OptionsError::InvalidValue {
                key: "citation.max-authors",
                message: "must name at least one author".to_string(),
            });
        }
        Ok(())
    }
}
