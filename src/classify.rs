//! Affiliation classification heuristic.
//!
//! Partitions a paper's author list into academic and non-academic authors
//! based on a keyword test against the affiliation string. An author counts
//! as academic if the affiliation contains any of the academic keywords,
//! case-insensitively, as a substring ("Laboratory" matches "lab"). Authors
//! with a blank affiliation are treated as non-academic.

use crate::record::AuthorRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Substring pattern marking an affiliation as academic.
static ACADEMIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|college|institute|lab|school").expect("static pattern is valid")
});

/// Non-academic authors extracted from one author list.
///
/// The two vectors are index-aligned: `affiliations[i]` belongs to
/// `names[i]`. An affiliation entry may be an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub names: Vec<String>,
    pub affiliations: Vec<String>,
}

/// Returns true if the affiliation string looks academic.
pub fn is_academic(affiliation: &str) -> bool {
    ACADEMIC_PATTERN.is_match(affiliation)
}

/// Partition authors, keeping only the non-academic ones.
///
/// Pure function: preserves input author order and has no side effects.
pub fn classify(authors: &[AuthorRecord]) -> Classified {
    let mut classified = Classified::default();

    for author in authors {
        if !is_academic(&author.affiliation) {
            classified.names.push(author.name.clone());
            classified.affiliations.push(author.affiliation.clone());
        }
    }

    classified
}
