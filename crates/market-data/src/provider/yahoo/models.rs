//! Yahoo Finance API response models.
//!
//! The quote endpoint backs the fast summary, the quoteSummary endpoint backs
//! the full info view. Both keep their payloads as raw JSON maps because the
//! set of fields varies per instrument type.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response wrapper for the v7 quote API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResponse {
    pub quote_response: YahooQuoteResult,
}

/// Quote container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteResult {
    #[serde(default)]
    pub result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
///
/// Unknown symbols come back with `result: null` and a populated `error`.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub error: Option<YahooApiError>,
}

/// Error object embedded in Yahoo responses
#[derive(Debug, Deserialize, Clone)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooApiError {
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .map(|code| code.eq_ignore_ascii_case("not found"))
            .unwrap_or(false)
    }

    pub fn message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{}: {}", code, description),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}
