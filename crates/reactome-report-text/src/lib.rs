//! Author blocks, citations and unbreakable text for Reactome reports.
//!
//! This crate holds the only non-trivial text logic of report generation:
//! - [`collect_authors`] gathers everyone who authored, edited, reviewed or
//!   revised an event and its sub-events, deduplicated by display name
//! - [`format_publication`] renders a cited publication as styled
//!   [`Fragments`] according to its class
//! - [`shape`] makes a string impossible for a layout engine to break or
//!   re-justify mid-name
//!
//! Page layout, fonts and PDF encoding belong to the layout engine; this
//! crate only hands it text through a [`StyledTextSink`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       reactome-report-text                          │
//! │        Event / Publication → author line, citation fragments        │
//! └───────────────────────────┬─────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         reactome-model                              │
//! │          Event, InstanceEdit, Person, Publication (JSON)            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use reactome_model::{Publication, Url};
//! use reactome_report_text::{format_publication, CitationOptions};
//!
//! let publication = Publication::Url(Url {
//!     title: "Reactome".to_string(),
//!     uniform_resource_locator: "https://reactome.org".to_string(),
//!     ..Default::default()
//! });
//! let citation = format_publication(&publication, &CitationOptions::default());
//! assert_eq!(citation.text(), "Reactome. Retrieved from https://reactome.org");
//! ```

pub mod authors;
pub mod citation;
pub mod error;
pub mod options;
pub mod output;
pub mod shape;

pub use authors::{
    affiliation_block, author_line, collect_authors, name_with_period, AffiliationBlock,
    AuthorSet,
};
pub use citation::{
    author_list, format_publication, format_publications, trim_separators, FormattedCitation,
};
pub use error::{OptionsError, OptionsResult, Warning};
pub use options::{AuthorOptions, CitationOptions, ReportTextOptions};
pub use output::{FontStyle, Formatting, Fragment, Fragments, StyledTextSink, VerticalAlign};
pub use shape::{shape, NO_BREAK_SPACE, WORD_JOINER};
