//! Lookup request and response models.

use indexmap::IndexMap;
use marketcap_market_data::FailureKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    ERROR_INVALID_INPUT_JSON, ERROR_NETWORK_OR_DNS, ERROR_PROVIDER_UNAVAILABLE,
    ERROR_SESSION_INIT, MAX_REPORTED_ERRORS, SYMBOLS_FIELD,
};
use crate::resolver::MarketCap;
use crate::symbols::Symbol;

use super::lookup_errors::InputError;

/// Decoded stdin payload. Only the raw `symbols` value is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupRequest {
    symbols: Option<Value>,
}

impl LookupRequest {
    /// Decode a request. Blank input is an empty request.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(mut payload) => Ok(Self {
                symbols: payload.remove(SYMBOLS_FIELD),
            }),
            _ => Err(InputError::NotAnObject),
        }
    }

    pub fn symbols(&self) -> Option<&Value> {
        self.symbols.as_ref()
    }
}

/// The single JSON object printed for a run.
///
/// Optional fields are omitted from the output when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_yfinance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: IndexMap<Symbol, MarketCap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl LookupResponse {
    /// The request could not be decoded or was not an object.
    pub fn invalid_input() -> Self {
        Self {
            ok: false,
            missing_yfinance: None,
            error: Some(ERROR_INVALID_INPUT_JSON.to_string()),
            results: IndexMap::new(),
            input_count: None,
            resolved_count: None,
            errors: None,
        }
    }

    /// Nothing to look up.
    pub fn empty() -> Self {
        Self::aborted(true, None, 0)
    }

    /// The provider could not be constructed.
    pub fn provider_unavailable(input_count: usize, kind: FailureKind) -> Self {
        let mut response = Self::aborted(
            false,
            Some(format!("{}:{}", ERROR_PROVIDER_UNAVAILABLE, kind.tag())),
            input_count,
        );
        response.missing_yfinance = Some(true);
        response
    }

    /// The batch session could not be opened.
    pub fn session_failed(input_count: usize, kind: FailureKind) -> Self {
        Self::aborted(
            false,
            Some(format!("{}:{}", ERROR_SESSION_INIT, kind.tag())),
            input_count,
        )
    }

    /// The per-symbol loop ran to completion.
    ///
    /// `errors` is capped at [`MAX_REPORTED_ERRORS`]. When nothing resolved and at
    /// least one failure looked like a network outage, the run as a whole fails.
    pub fn completed(
        results: IndexMap<Symbol, MarketCap>,
        mut errors: Vec<String>,
        input_count: usize,
        network_failures: usize,
    ) -> Self {
        let outage = network_failures > 0 && results.is_empty();
        errors.truncate(MAX_REPORTED_ERRORS);
        Self {
            ok: !outage,
            missing_yfinance: None,
            error: outage.then(|| ERROR_NETWORK_OR_DNS.to_string()),
            resolved_count: Some(results.len()),
            results,
            input_count: Some(input_count),
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }

    fn aborted(ok: bool, error: Option<String>, input_count: usize) -> Self {
        Self {
            ok,
            missing_yfinance: None,
            error,
            results: IndexMap::new(),
            input_count: Some(input_count),
            resolved_count: Some(0),
            errors: None,
        }
    }

    /// Serialize as a single line of JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
