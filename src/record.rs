//! Data model and record assembly.
//!
//! Maps raw esummary metadata plus the classifier output into the flat
//! six-field output record. Field semantics follow the esummary document:
//! the "Corresponding Author Email" column is populated from `elocationid`,
//! which in the upstream schema is a location identifier (DOI/pii), not an
//! email address. The mapping is kept verbatim.

use crate::classify::{self, Classified};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One author entry from an esummary record.
///
/// esummary regularly omits the affiliation key, so both fields default to
/// empty strings rather than failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
}

/// Raw per-article metadata from the esummary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperSummary {
    pub title: Option<String>,
    pub pubdate: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorRecord>,
    pub elocationid: Option<String>,
}

/// Final output record, one per resolved PubMed ID.
///
/// Serde renames double as the CSV header row, in this fixed column order.
/// A field is `None` rather than an empty string when no value exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Publication Date")]
    pub publication_date: Option<String>,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: Option<String>,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: Option<String>,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: Option<String>,
}

/// Join a sequence with "; ", collapsing an empty sequence to `None`.
///
/// The emptiness check is on the whole sequence, not per element: a
/// non-academic author with a blank affiliation still contributes an empty
/// segment to "Company Affiliation(s)".
fn join_or_none(parts: &[String]) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

/// Assemble one output record from an ID and its summary.
pub fn assemble(id: &str, summary: &PaperSummary) -> PaperRecord {
    let classified: Classified = classify::classify(&summary.authors);

    PaperRecord {
        pubmed_id: Some(id.to_string()),
        title: summary.title.clone(),
        publication_date: summary.pubdate.clone(),
        non_academic_authors: join_or_none(&classified.names),
        company_affiliations: join_or_none(&classified.affiliations),
        corresponding_author_email: summary
            .elocationid
            .clone()
            .filter(|e| !e.is_empty()),
    }
}

/// Assemble records for every resolved ID, in resolution order.
///
/// IDs missing from the summary map get a default (all-null-field) summary
/// rather than being dropped, so the output length always equals the input
/// ID count.
pub fn assemble_all(ids: &[String], mut summaries: HashMap<String, PaperSummary>) -> Vec<PaperRecord> {
    ids.iter()
        .map(|id| {
            let summary = summaries.remove(id).unwrap_or_default();
            assemble(id, &summary)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, affiliation: &str) -> AuthorRecord {
        AuthorRecord {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
        }
    }

    #[test]
    fn test_assemble_mixed_authors() {
        let summary = PaperSummary {
            title: Some("Trial results".to_string()),
            pubdate: Some("2023 Jun".to_string()),
            authors: vec![
                author("J. Doe", "Acme Biotech Inc."),
                author("A. Smith", "Dept. of Chemistry, MIT University"),
                author("K. Lee", "Novo Nordisk A/S"),
            ],
            elocationid: Some("10.1000/test".to_string()),
        };

        let record = assemble("12345", &summary);
        assert_eq!(record.pubmed_id.as_deref(), Some("12345"));
        assert_eq!(record.title.as_deref(), Some("Trial results"));
        assert_eq!(record.publication_date.as_deref(), Some("2023 Jun"));
        assert_eq!(
            record.non_academic_authors.as_deref(),
            Some("J. Doe; K. Lee")
        );
        assert_eq!(
            record.company_affiliations.as_deref(),
            Some("Acme Biotech Inc.; Novo Nordisk A/S")
        );
        assert_eq!(
            record.corresponding_author_email.as_deref(),
            Some("10.1000/test")
        );
    }

    #[test]
    fn test_assemble_no_authors() {
        let summary = PaperSummary {
            title: Some("X".to_string()),
            pubdate: Some("2020".to_string()),
            ..Default::default()
        };

        let record = assemble("1", &summary);
        assert_eq!(record.title.as_deref(), Some("X"));
        assert_eq!(record.publication_date.as_deref(), Some("2020"));
        assert_eq!(record.non_academic_authors, None);
        assert_eq!(record.company_affiliations, None);
        assert_eq!(record.corresponding_author_email, None);
    }

    #[test]
    fn test_blank_affiliation_joins_empty_segment() {
        let summary = PaperSummary {
            authors: vec![author("N. One", ""), author("N. Two", "Bayer AG")],
            ..Default::default()
        };

        let record = assemble("2", &summary);
        assert_eq!(record.non_academic_authors.as_deref(), Some("N. One; N. Two"));
        // First segment is empty but the joined field is still present
        assert_eq!(record.company_affiliations.as_deref(), Some("; Bayer AG"));
    }

    #[test]
    fn test_all_academic_yields_null_fields() {
        let summary = PaperSummary {
            authors: vec![author("A", "Yale University"), author("B", "Broad Institute")],
            ..Default::default()
        };

        let record = assemble("3", &summary);
        assert_eq!(record.non_academic_authors, None);
        assert_eq!(record.company_affiliations, None);
    }

    #[test]
    fn test_empty_elocationid_is_null() {
        let summary = PaperSummary {
            elocationid: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(assemble("4", &summary).corresponding_author_email, None);
    }

    #[test]
    fn test_assemble_all_preserves_count_and_order() {
        let ids = vec!["10".to_string(), "20".to_string(), "30".to_string()];
        let mut summaries = HashMap::new();
        summaries.insert(
            "20".to_string(),
            PaperSummary {
                title: Some("Only this one".to_string()),
                ..Default::default()
            },
        );

        let records = assemble_all(&ids, summaries);
        assert_eq!(records.len(), ids.len());
        assert_eq!(records[0].pubmed_id.as_deref(), Some("10"));
        assert_eq!(records[1].pubmed_id.as_deref(), Some("20"));
        assert_eq!(records[2].pubmed_id.as_deref(), Some("30"));
        // Missing summaries become null-field records, not dropped rows
        assert_eq!(records[0].title, None);
        assert_eq!(records[1].title.as_deref(), Some("Only this one"));
        assert_eq!(records[2].title, None);
    }
}
