//! NCBI E-utilities API client.
//!
//! Wraps the two PubMed endpoints the pipeline needs:
//! - `esearch.fcgi` - resolve a free-text query into an ordered PubMed ID list
//! - `esummary.fcgi` - batched per-ID summary metadata lookup
//!
//! API etiquette (per NCBI E-utilities docs):
//! - Send `tool` and `email` parameters identifying the client
//! - Request `retmode=json` for machine-readable envelopes
//!
//! Neither call retries: any transport failure or non-success status fails
//! the whole run.

use crate::error::{PubmedError, Result};
use crate::record::PaperSummary;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// E-utilities base URL
const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Client identification for NCBI request etiquette
const TOOL: &str = "rustpubmed";
const MAILTO: &str = "rustpubmed@example.com";

/// Client configuration, fixed at construction time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the E-utilities service (overridable for tests/mirrors)
    pub base_url: String,
    /// Maximum IDs returned per search (esearch `retmax`)
    pub retmax: usize,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: EUTILS_BASE.to_string(),
            retmax: 20,
            timeout: Duration::from_secs(30),
        }
    }
}

/// PubMed E-utilities client.
pub struct PubmedClient {
    client: Client,
    config: ClientConfig,
}

impl PubmedClient {
    /// Create a new client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/1.0 (mailto:{})", TOOL, MAILTO))
            .timeout(config.timeout)
            .build()
            .map_err(|e| PubmedError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Resolve a search term into an ordered PubMed ID list.
    ///
    /// The server's relevance order is preserved. Returns an empty list when
    /// the response envelope lacks the `esearchresult.idlist` field.
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        let url = format!("{}/esearch.fcgi", self.config.base_url);
        let retmax = self.config.retmax.to_string();

        debug!(url = %url, query = query, "Sending esearch request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("db", "pubmed"),
                ("term", query),
                ("retmax", retmax.as_str()),
                ("retmode", "json"),
                ("tool", TOOL),
                ("email", MAILTO),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PubmedError::Api {
                code: status.as_u16() as i32,
                message: format!("esearch error: {}", status),
            });
        }

        let body = response.text().await?;
        let ids = parse_search_response(&body)?;
        info!(count = ids.len(), "Resolved PubMed IDs");
        Ok(ids)
    }

    /// Fetch summary metadata for the given IDs in one batched request.
    ///
    /// IDs are comma-joined into a single call; there is no chunking, so a
    /// very large ID list could exceed request-size limits. IDs absent from
    /// the response are simply missing from the returned map.
    pub async fn summaries(&self, ids: &[String]) -> Result<HashMap<String, PaperSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = format!("{}/esummary.fcgi", self.config.base_url);
        let joined = ids.join(",");

        debug!(url = %url, count = ids.len(), "Sending esummary request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("db", "pubmed"),
                ("id", joined.as_str()),
                ("retmode", "json"),
                ("tool", TOOL),
                ("email", MAILTO),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PubmedError::Api {
                code: status.as_u16() as i32,
                message: format!("esummary error: {}", status),
            });
        }

        let body = response.text().await?;
        let summaries = parse_summary_response(&body)?;
        info!(
            requested = ids.len(),
            returned = summaries.len(),
            "Fetched paper summaries"
        );
        Ok(summaries)
    }
}

// === E-utilities response envelopes ===

#[derive(Debug, Deserialize)]
struct EsearchEnvelope {
    esearchresult: Option<EsearchResult>,
}

#[derive(Debug, Default, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EsummaryEnvelope {
    #[serde(default)]
    result: SummaryMap,
}

/// The esummary `result` object is keyed by ID, with one extra `uids` key
/// listing the IDs. The named field consumes `uids` so the flatten only
/// sees per-ID records.
#[derive(Debug, Default, Deserialize)]
struct SummaryMap {
    #[serde(default)]
    #[allow(dead_code)]
    uids: Vec<String>,
    #[serde(flatten)]
    records: HashMap<String, PaperSummary>,
}

/// Extract the ID list from an esearch response body.
fn parse_search_response(body: &str) -> Result<Vec<String>> {
    let envelope: EsearchEnvelope = serde_json::from_str(body)
        .map_err(|e| PubmedError::Parse(format!("Failed to parse esearch response: {}", e)))?;

    Ok(envelope.esearchresult.unwrap_or_default().idlist)
}

/// Extract per-ID summaries from an esummary response body.
fn parse_summary_response(body: &str) -> Result<HashMap<String, PaperSummary>> {
    let envelope: EsummaryEnvelope = serde_json::from_str(body)
        .map_err(|e| PubmedError::Parse(format!("Failed to parse esummary response: {}", e)))?;

    Ok(envelope.result.records)
}
