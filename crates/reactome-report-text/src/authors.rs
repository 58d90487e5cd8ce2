//! Collecting and presenting the people behind an event.
//!
//! [`collect_authors`] walks an event and, for pathways, every sub-event,
//! gathering everyone named on an authored, edited, reviewed, revised,
//! created or modified edit. People are deduplicated by display name.

use crate::options::AuthorOptions;
use crate::output::{Formatting, Fragments, FragmentsBuilder};
use crate::shape::shape;
use reactome_model::{Event, Person};
use std::collections::{BTreeMap, HashSet};

/// People keyed by display name.
///
/// Iteration is always in ascending display-name order. When two records
/// share a display name the first one inserted is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorSet {
    people: BTreeMap<String, Person>,
}

impl AuthorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person. Returns false if someone with that display name was
    /// already present.
    pub fn insert(&mut self, person: &Person) -> bool {
        if self.people.contains_key(&person.display_name) {
            return false;
        }
        self.people
            .insert(person.display_name.clone(), person.clone());
        true
    }

    /// Add everyone from `people`.
    pub fn extend<'a>(&mut self, people: impl IntoIterator<Item = &'a Person>) {
        for person in people {
            self.insert(person);
        }
    }

    /// Merge another set into this one.
    pub fn union(&mut self, other: AuthorSet) {
        for (name, person) in other.people {
            self.people.entry(name).or_insert(person);
        }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.people.contains_key(display_name)
    }

    /// People in ascending display-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// People in ascending display-name order, collected.
    pub fn sorted(&self) -> Vec<&Person> {
        self.iter().collect()
    }

    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.people.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a Person> for AuthorSet {
    fn from_iter<I: IntoIterator<Item = &'a Person>>(iter: I) -> Self {
        let mut set = AuthorSet::new();
        set.extend(iter);
        set
    }
}

/// Everyone who worked on `event` or any event nested inside it.
///
/// Each event identifier is visited once; a sub-event reachable along two
/// paths (or, in a malformed tree, through a cycle) is not walked again.
/// Events with an empty identifier are always walked.
pub fn collect_authors(event: &Event) -> AuthorSet {
    let mut authors = AuthorSet::new();
    let mut visited = HashSet::new();
    collect_into(event, &mut authors, &mut visited);
    authors
}

fn collect_into<'a>(event: &'a Event, authors: &mut AuthorSet, visited: &mut HashSet<&'a str>) {
    if !event.st_id.is_empty() && !visited.insert(event.st_id.as_str()) {
        tracing::debug!(st_id = %event.st_id, "Event already visited, skipping");
        return;
    }

    for edit in event.edits() {
        authors.extend(&edit.author);
    }

    for child in event.children() {
        collect_into(child, authors, visited);
    }
}

/// A person's name as printed in author lists: display name plus a period.
pub fn name_with_period(person: &Person) -> String {
    format!("{}.", person.display_name)
}

/// The cover page author line: `"Name A., Name B., ..."` in display-name
/// order, each name shaped so it never wraps.
pub fn author_line(authors: &AuthorSet, options: &AuthorOptions) -> String {
    authors
        .iter()
        .map(|person| maybe_shape(&name_with_period(person), options))
        .collect::<Vec<_>>()
        .join(&options.separator)
}

/// Author names annotated with affiliation indices, plus the numbered
/// affiliation legend they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffiliationBlock {
    /// Names, separators and superscript index lists.
    pub names: Fragments,
    /// Affiliations in index order; index `i` is printed as `i + 1`.
    pub affiliations: Vec<String>,
}

impl AffiliationBlock {
    /// `"1. First affiliation\n2. Second affiliation"`.
    pub fn legend(&self) -> String {
        self.affiliations
            .iter()
            .enumerate()
            .map(|(i, affiliation)| format!("{}. {}", i + 1, affiliation))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the author block with affiliation indices.
///
/// Affiliations are numbered from 1 in the order they are first met while
/// walking people in display-name order.
pub fn affiliation_block(authors: &AuthorSet, options: &AuthorOptions) -> AffiliationBlock {
    let mut affiliations: Vec<String> = Vec::new();
    let mut names = FragmentsBuilder::new();

    for (i, person) in authors.iter().enumerate() {
        if i > 0 {
            names.push(options.separator.as_str());
        }
        names.push(maybe_shape(&name_with_period(person), options));

        let mut indices: Vec<usize> = person
            .affiliation
            .iter()
            .map(|affiliation| {
                match affiliations
                    .iter()
                    .position(|known| *known == affiliation.display_name)
                {
                    Some(index) => index + 1,
                    None => {
                        affiliations.push(affiliation.display_name.clone());
                        affiliations.len()
                    }
                }
            })
            .collect();
        indices.sort_unstable();
        indices.dedup();

        if !indices.is_empty() {
            let list = indices
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            names.push_formatted(maybe_shape(&list, options), Formatting::superscript());
        }
    }

    AffiliationBlock {
        names: names.build(),
        affiliations,
    }
}

fn maybe_shape(text: &str, options: &AuthorOptions) -> String {
    if options.shape_names {
        shape(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactome_model::InstanceEdit;

    fn edit(names: &[&str]) -> InstanceEdit {
        InstanceEdit::by(names.iter().map(|n| Person::new(*n)).collect())
    }

    fn plain() -> AuthorOptions {
        AuthorOptions {
            shape_names: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_shared_person_counted_once() {
        let event = Event {
            st_id: "R-HSA-1".to_string(),
            authored: vec![edit(&["Smith, J"]), edit(&["Smith, J"])],
            reviewed: vec![edit(&["Jones, K"])],
            ..Default::default()
        };

        let authors = collect_authors(&event);
        assert_eq!(authors.len(), 2);
        assert!(authors.contains("Smith, J"));
        assert!(authors.contains("Jones, K"));
    }

    #[test]
    fn test_created_and_modified_contribute() {
        let event = Event {
            created: Some(edit(&["Creator, A"])),
            modified: Some(edit(&["Modifier, B"])),
            ..Default::default()
        };

        let names: Vec<_> = collect_authors(&event).display_names().map(str::to_string).collect();
        assert_eq!(names, vec!["Creator, A", "Modifier, B"]);
    }

    #[test]
    fn test_no_edits_is_empty_not_error() {
        assert!(collect_authors(&Event::default()).is_empty());
    }

    #[test]
    fn test_composite_collects_children_recursively() {
        let grandchild = Event {
            st_id: "R-HSA-3".to_string(),
            revised: vec![edit(&["Deep, D"])],
            ..Default::default()
        };
        let child = Event {
            st_id: "R-HSA-2".to_string(),
            edited: vec![edit(&["Middle, M"])],
            has_event: Some(vec![grandchild]),
            ..Default::default()
        };
        let pathway = Event {
            st_id: "R-HSA-1".to_string(),
            authored: vec![edit(&["Top, T"])],
            has_event: Some(vec![child]),
            ..Default::default()
        };

        let authors = collect_authors(&pathway);
        assert_eq!(
            authors.display_names().collect::<Vec<_>>(),
            vec!["Deep, D", "Middle, M", "Top, T"]
        );
    }

    #[test]
    fn test_repeated_identifier_walked_once() {
        let shared = Event {
            st_id: "R-HSA-9".to_string(),
            authored: vec![edit(&["Shared, S"])],
            ..Default::default()
        };
        // Same identifier, different content: only the first is walked.
        let duplicate = Event {
            st_id: "R-HSA-9".to_string(),
            authored: vec![edit(&["Ignored, I"])],
            ..Default::default()
        };
        let pathway = Event {
            st_id: "R-HSA-1".to_string(),
            has_event: Some(vec![shared, duplicate]),
            ..Default::default()
        };

        let authors = collect_authors(&pathway);
        assert!(authors.contains("Shared, S"));
        assert!(!authors.contains("Ignored, I"));
    }

    #[test]
    fn test_first_record_wins_on_name_clash() {
        let mut set = AuthorSet::new();
        assert!(set.insert(&Person::new("Smith, J").with_affiliation("EBI")));
        assert!(!set.insert(&Person::new("Smith, J").with_affiliation("OICR")));
        assert_eq!(set.sorted()[0].affiliation[0].display_name, "EBI");
    }

    #[test]
    fn test_union_merges_sets() {
        let mut left: AuthorSet = [Person::new("B"), Person::new("A")].iter().collect();
        let right: AuthorSet = [Person::new("C"), Person::new("A")].iter().collect();
        left.union(right);
        assert_eq!(left.display_names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_author_line_sorted_with_periods() {
        let authors: AuthorSet = [Person::new("Zhang, Q"), Person::new("Abel, R")]
            .iter()
            .collect();
        assert_eq!(author_line(&authors, &plain()), "Abel, R., Zhang, Q.");
    }

    #[test]
    fn test_author_line_shapes_each_name() {
        let authors: AuthorSet = [Person::new("Li, X"), Person::new("Ma, Y")].iter().collect();
        let line = author_line(&authors, &AuthorOptions::default());
        assert_eq!(line, format!("{}, {}", shape("Li, X."), shape("Ma, Y.")));
    }

    #[test]
    fn test_affiliation_block_numbers_in_first_seen_order() {
        let authors: AuthorSet = [
            Person::new("Beta, B").with_affiliation("OICR").with_affiliation("EBI"),
            Person::new("Alpha, A").with_affiliation("NYU"),
            Person::new("Gamma, G"),
        ]
        .iter()
        .collect();

        let block = affiliation_block(&authors, &plain());
        assert_eq!(block.affiliations, vec!["NYU", "OICR", "EBI"]);
        assert_eq!(
            block.names.to_markdown(),
            "Alpha, A.^1^, Beta, B.^2, 3^, Gamma, G."
        );
        assert_eq!(block.legend(), "1. NYU\n2. OICR\n3. EBI");
    }

    #[test]
    fn test_affiliation_indices_are_sorted() {
        let authors: AuthorSet = [
            Person::new("A").with_affiliation("X").with_affiliation("Y"),
            Person::new("B").with_affiliation("Y").with_affiliation("X"),
        ]
        .iter()
        .collect();

        let block = affiliation_block(&authors, &plain());
        assert_eq!(block.names.to_markdown(), "A.^1, 2^, B.^1, 2^");
    }

    #[test]
    fn test_empty_affiliation_block() {
        let block = affiliation_block(&AuthorSet::new(), &AuthorOptions::default());
        assert!(block.names.is_empty());
        assert_eq!(block.legend(), "");
    }
}
