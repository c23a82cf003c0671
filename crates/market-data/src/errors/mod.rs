//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all provider operations
//! - [`FailureKind`]: Stable classification used for diagnostics and outage detection

mod kind;

pub use kind::FailureKind;

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
///
/// Each variant is classified into a [`FailureKind`] via the [`kind`](Self::kind)
/// method. Callers never inspect the message text to decide what happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// The provider host name could not be resolved.
    #[error("DNS lookup failed: {provider} - {message}")]
    Dns {
        /// The provider that could not be reached
        provider: String,
        /// The resolver error message
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The connection to the provider failed for a non-DNS reason.
    #[error("Connection failed: {provider} - {message}")]
    Connection {
        /// The provider that could not be reached
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider answered with an unexpected HTTP status.
    #[error("Unexpected HTTP status {status}: {provider}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider rejected the session credentials.
    #[error("Authentication expired: {provider}")]
    AuthExpired {
        /// The provider that rejected the request
        provider: String,
    },

    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The response body could not be decoded.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The provider that returned the body
        provider: String,
        /// The decoder error message
        message: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider client could not be constructed.
    #[error("Client initialization failed: {provider} - {message}")]
    ClientInit {
        /// The provider being constructed
        provider: String,
        /// Why construction failed
        message: String,
    },
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketcap_market_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Timeout);
    /// assert!(error.kind().is_network());
    ///
    /// let error = MarketDataError::SymbolNotFound("INVALID".to_string());
    /// assert_eq!(error.kind().tag(), "SymbolNotFound");
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Dns { .. } => FailureKind::Dns,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::Connection { .. } => FailureKind::Connection,
            Self::RateLimited { .. } => FailureKind::RateLimited,
            Self::HttpStatus { .. } => FailureKind::HttpStatus,
            Self::AuthExpired { .. } => FailureKind::AuthExpired,
            Self::SymbolNotFound(_) => FailureKind::SymbolNotFound,
            Self::Decode { .. } => FailureKind::Decode,
            Self::ProviderError { .. } => FailureKind::Provider,
            Self::ClientInit { .. } => FailureKind::ClientInit,
        }
    }

    /// Translate a transport error from the HTTP client into the taxonomy.
    pub fn from_transport(provider: &str, err: &reqwest::Error) -> Self {
        let provider = provider.to_string();
        if err.is_timeout() {
            return Self::Timeout { provider };
        }
        if err.is_connect() {
            let message = error_chain_message(err);
            if mentions_dns_failure(&message) {
                return Self::Dns { provider, message };
            }
            return Self::Connection { provider, message };
        }
        if err.is_decode() {
            return Self::Decode {
                provider,
                message: err.to_string(),
            };
        }
        Self::ProviderError {
            provider,
            message: error_chain_message(err),
        }
    }
}

/// Flatten an error and all of its sources into one message.
pub(crate) fn error_chain_message(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Whether a flattened transport error describes a name-resolution failure.
///
/// hyper reports resolver failures as `dns error`, and the system resolver adds
/// messages such as `failed to lookup address information`.
pub(crate) fn mentions_dns_failure(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("dns error")
        || lower.contains("failed to lookup address")
        || lower.contains("name or service not known")
        || lower.contains("no such host")
        || lower.contains("nodename nor servname")
}
