//! Domain records consumed by Reactome report generation.
//!
//! This crate defines the read-only shapes that the data-access layer hands
//! to the report text core:
//! - [`Event`]s (pathways and reactions), with their [`InstanceEdit`]s
//! - [`Person`]s and their [`Affiliation`]s
//! - cited [`Publication`]s
//!
//! Records deserialize from the JSON served by the Reactome content service.
//! Nothing in this crate mutates a record after loading.
//!
//! # Example
//!
//! ```rust
//! use reactome_model::{Event, Publication};
//!
//! let event = Event::from_json_str(r#"{
//!     "stId": "R-HSA-109581",
//!     "displayName": "Apoptosis",
//!     "schemaClass": "Pathway",
//!     "hasEvent": []
//! }"#).unwrap();
//! assert!(event.is_composite());
//!
//! let publication = Publication::from_json_str(r#"{
//!     "className": "URL",
//!     "title": "Reactome",
//!     "uniformResourceLocator": "https://reactome.org"
//! }"#).unwrap();
//! assert_eq!(publication.class_name(), "URL");
//! ```

mod de;
pub mod error;
pub mod event;
pub mod publication;

pub use error::{ModelError, Result};
pub use event::{Affiliation, Event, InstanceEdit, Person};
pub use publication::{Book, LiteratureReference, Publication, StringOrNumber, Url};
