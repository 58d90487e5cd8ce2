//! Citation strings for the references section.
//!
//! One rule per publication class:
//!
//! ```text
//! LiteratureReference  Authors (year). Title. Journal, volume, pages.
//! Book                 Authors (year). Chapter, *Title*, pages.
//! URL                  Title. Retrieved from locator
//! anything else        display name, plus a warning
//! ```
//!
//! Author lists name the first six people and append " et. al." when there
//! are more.

use crate::authors::name_with_period;
use crate::error::Warning;
use crate::options::CitationOptions;
use crate::output::{Formatting, Fragments, FragmentsBuilder};
use once_cell::sync::Lazy;
use reactome_model::{Book, LiteratureReference, Person, Publication, Url};
use regex::Regex;

static LEADING_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s,.]+").expect("static regex"));
static TRAILING_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,.]+$").expect("static regex"));

/// A formatted citation and anything noticed while formatting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedCitation {
    pub fragments: Fragments,
    pub warnings: Vec<Warning>,
}

impl FormattedCitation {
    /// The citation with styles dropped.
    pub fn text(&self) -> String {
        self.fragments.to_plain_text()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Format one publication.
///
/// Never fails: unknown classes and missing fields degrade to readable
/// fallbacks and are reported in [`FormattedCitation::warnings`].
pub fn format_publication(publication: &Publication, options: &CitationOptions) -> FormattedCitation {
    let mut warnings = Vec::new();
    let fragments = match publication {
        Publication::LiteratureReference(reference) => {
            literature_reference(reference, options, &mut warnings)
        }
        Publication::Book(book) => book_citation(book, options, &mut warnings),
        Publication::Url(url) => url_citation(url),
        Publication::Other {
            class_name,
            display_name,
        } => {
            tracing::warn!(
                class_name = %class_name,
                display_name = %display_name,
                "Publication subtype not known"
            );
            warnings.push(Warning::UnknownPublicationKind {
                class_name: class_name.clone(),
                display_name: display_name.clone(),
            });
            let mut out = FragmentsBuilder::new();
            out.push(display_name.as_str());
            out.build()
        }
    };

    FormattedCitation {
        fragments,
        warnings,
    }
}

/// Format every publication independently, in order.
pub fn format_publications(
    publications: &[Publication],
    options: &CitationOptions,
) -> Vec<FormattedCitation> {
    publications
        .iter()
        .map(|publication| format_publication(publication, options))
        .collect()
}

/// `"A., B., C."`, cut after `options.max_authors` names, with
/// `options.et_al` appended when anyone was cut. Input order is kept.
pub fn author_list(people: &[Person], options: &CitationOptions) -> String {
    let mut list = people
        .iter()
        .take(options.max_authors)
        .map(name_with_period)
        .collect::<Vec<_>>()
        .join(", ");
    if people.len() > options.max_authors {
        list.push_str(&options.et_al);
    }
    list
}

/// Strip leading and trailing runs of whitespace, commas and periods.
///
/// `"..Cells, Ageing,.."` becomes `"Cells, Ageing"`; punctuation inside the
/// text is untouched.
pub fn trim_separators(text: &str) -> String {
    let without_leading = LEADING_SEPARATORS.replace(text, "");
    TRAILING_SEPARATORS
        .replace(&without_leading, "")
        .into_owned()
}

fn literature_reference(
    reference: &LiteratureReference,
    options: &CitationOptions,
    warnings: &mut Vec<Warning>,
) -> Fragments {
    let mut required =
        RequiredFields::new("LiteratureReference", &reference.display_name, warnings);
    let year = required.year(reference.year, options);
    let title = required.title(reference.title.as_deref());

    let mut out = FragmentsBuilder::new();
    out.push(format!(
        "{} ({}). {}",
        author_list(&reference.author, options),
        year,
        trim_separators(title)
    ));
    if let Some(journal) = &reference.journal {
        out.push(format!(". {}", journal.trim_end()));
    }
    if let Some(volume) = &reference.volume {
        out.push(format!(", {}", volume));
    }
    if let Some(pages) = &reference.pages {
        out.push(format!(", {}", pages.to_string().trim()));
    }
    out.push(".");
    out.build()
}

fn book_citation(book: &Book, options: &CitationOptions, warnings: &mut Vec<Warning>) -> Fragments {
    let mut required = RequiredFields::new("Book", &book.display_name, warnings);
    let year = required.year(book.year, options);
    let title = required.title(book.title.as_deref());

    let mut out = FragmentsBuilder::new();
    out.push(format!("{} ({})", author_list(&book.author, options), year));
    out.push(". ");
    if let Some(chapter_title) = &book.chapter_title {
        out.push(format!("{}, ", chapter_title));
    }
    out.push_formatted(title.trim(), Formatting::italic());
    if let Some(pages) = &book.pages {
        out.push(format!(", {}", pages.to_string().trim()));
    }
    out.push(".");
    out.build()
}

fn url_citation(url: &Url) -> Fragments {
    let mut out = FragmentsBuilder::new();
    out.push(format!(
        "{}. Retrieved from {}",
        url.title, url.uniform_resource_locator
    ));
    out.build()
}

/// Resolves required fields to their value or fallback, recording a warning
/// for each one that was missing.
struct RequiredFields<'a> {
    class_name: &'a str,
    display_name: &'a str,
    warnings: &'a mut Vec<Warning>,
}

impl<'a> RequiredFields<'a> {
    fn new(class_name: &'a str, display_name: &'a str, warnings: &'a mut Vec<Warning>) -> Self {
        Self {
            class_name,
            display_name,
            warnings,
        }
    }

    fn year(&mut self, year: Option<i32>, options: &CitationOptions) -> String {
        match year {
            Some(year) => year.to_string(),
            None => {
                self.missing("year");
                options.missing_year.clone()
            }
        }
    }

    fn title<'t>(&mut self, title: Option<&'t str>) -> &'t str {
        match title {
            Some(title) => title,
            None => {
                self.missing("title");
                ""
            }
        }
    }

    fn missing(&mut self, field: &'static str) {
        tracing::warn!(
            class_name = self.class_name,
            display_name = self.display_name,
            field,
            "Citation is missing a required field"
        );
        self.warnings.push(Warning::MissingField {
            class_name: self.class_name.to_string(),
            display_name: self.display_name.to_string(),
            field,
        });
    }
}
