//! Yahoo Finance market data provider.
//!
//! This provider uses the Yahoo Finance query API to serve both lookup tiers:
//! - Fast summary: the v7 quote endpoint (one small JSON object per symbol)
//! - Full info: the quoteSummary endpoint (several modules, flattened)
//!
//! Both endpoints require a cookie/crumb pair. Opening a session does no I/O;
//! the pair is fetched by the first lookup and shared by every ticker of the
//! batch, so a handshake failure surfaces as that lookup's error.

mod models;

use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::{FailureKind, MarketDataError};
use crate::models::{FastSummary, FullInfo};
use crate::provider::{MarketDataProvider, TickerHandle, TickerSession};

use models::{YahooQuoteResponse, YahooQuoteSummaryResponse};

/// Provider identifier used in errors and logs.
pub const YAHOO_PROVIDER_ID: &str = "YAHOO";

const DEFAULT_QUERY_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Modules requested for the full info view, in precedence order.
const FULL_INFO_MODULES: [&str; 3] = ["price", "summaryDetail", "defaultKeyStatistics"];

// ============================================================================
// Configuration
// ============================================================================

/// Connection settings for the Yahoo provider.
#[derive(Clone, Debug)]
pub struct YahooConfig {
    /// Base URL of the query API, without a trailing path.
    pub query_url: String,
    /// URL answering with the session cookie.
    pub cookie_url: String,
    pub user_agent: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout: Duration,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            query_url: DEFAULT_QUERY_URL.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: reqwest::Client,
    query_url: String,
    cookie_url: String,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    ///
    /// Fails with [`MarketDataError::ClientInit`] when the configuration cannot
    /// produce a working HTTP client. No request is sent.
    pub fn new(config: YahooConfig) -> Result<Self, MarketDataError> {
        let query_url = validate_url(&config.query_url)?;
        let cookie_url = validate_url(&config.cookie_url)?;

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|e| client_init_error(e.to_string()))?;
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, user_agent);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| client_init_error(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            query_url,
            cookie_url,
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        YAHOO_PROVIDER_ID
    }

    async fn open_session(&self, symbols: &str) -> Result<TickerSession, MarketDataError> {
        let tickers = parse_session_symbols(symbols);
        let mut session = TickerSession::new();
        if tickers.is_empty() {
            return Ok(session);
        }

        let shared = Arc::new(YahooSession {
            client: self.client.clone(),
            query_url: self.query_url.clone(),
            cookie_url: self.cookie_url.clone(),
            crumb: RwLock::new(None),
        });

        debug!("Opened Yahoo session for {} symbols", tickers.len());

        for symbol in tickers {
            session.insert(Box::new(YahooTicker {
                symbol,
                session: Arc::clone(&shared),
            }));
        }
        Ok(session)
    }
}

// ============================================================================
// Session
// ============================================================================

/// State shared by every ticker of one batch.
struct YahooSession {
    client: reqwest::Client,
    query_url: String,
    cookie_url: String,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooSession {
    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = self.crumb.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }

        let crumb = self.fetch_crumb().await?;
        if let Ok(mut guard) = self.crumb.write() {
            *guard = Some(crumb.clone());
        }
        Ok(crumb)
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie. The page itself answers 404; only the header matters.
        let response = self
            .client
            .get(&self.cookie_url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(YAHOO_PROVIDER_ID, &e))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: YAHOO_PROVIDER_ID.to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let response = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.query_url))
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(YAHOO_PROVIDER_ID, &e))?;

        if let Some(error) = status_error(response.status(), "") {
            return Err(error);
        }

        let crumb = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_transport(YAHOO_PROVIDER_ID, &e))?;
        let crumb = crumb.trim().to_string();

        if crumb.is_empty() || crumb.contains('<') || crumb.contains(' ') {
            return Err(MarketDataError::ProviderError {
                provider: YAHOO_PROVIDER_ID.to_string(),
                message: "Yahoo returned an invalid crumb".to_string(),
            });
        }

        Ok(CrumbData { cookie, crumb })
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = self.crumb.write() {
            *guard = None;
        }
    }

    /// Authenticated GET returning a decoded JSON body.
    ///
    /// `url` must already carry a query string; the crumb is appended.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        symbol: &str,
    ) -> Result<T, MarketDataError> {
        let crumb = self.ensure_crumb().await?;
        let url = format!("{}&crumb={}", url, encode(&crumb.crumb));

        let response = self
            .client
            .get(&url)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(YAHOO_PROVIDER_ID, &e))?;

        if let Some(error) = status_error(response.status(), symbol) {
            if error.kind() == FailureKind::AuthExpired {
                self.clear_crumb();
            }
            return Err(error);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MarketDataError::from_transport(YAHOO_PROVIDER_ID, &e))
    }
}

// ============================================================================
// Ticker
// ============================================================================

struct YahooTicker {
    symbol: String,
    session: Arc<YahooSession>,
}

#[async_trait]
impl TickerHandle for YahooTicker {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    async fn fast_summary(&self) -> Result<FastSummary, MarketDataError> {
        debug!("Fetching fast summary for {} from Yahoo", self.symbol);

        let url = format!(
            "{}/v7/finance/quote?symbols={}",
            self.session.query_url,
            encode(&self.symbol)
        );
        let data: YahooQuoteResponse = self.session.get_json(&url, &self.symbol).await?;

        if let Some(error) = data.quote_response.error {
            return Err(MarketDataError::ProviderError {
                provider: YAHOO_PROVIDER_ID.to_string(),
                message: error.message(),
            });
        }

        let quote = data
            .quote_response
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(self.symbol.clone()))?;

        Ok(fast_summary_from_quote(quote))
    }

    async fn full_info(&self) -> Result<FullInfo, MarketDataError> {
        debug!("Fetching full info for {} from Yahoo", self.symbol);

        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.session.query_url,
            encode(&self.symbol),
            FULL_INFO_MODULES.join(",")
        );
        let data: YahooQuoteSummaryResponse = self.session.get_json(&url, &self.symbol).await?;

        if let Some(error) = data.quote_summary.error {
            if error.is_not_found() {
                return Err(MarketDataError::SymbolNotFound(self.symbol.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: YAHOO_PROVIDER_ID.to_string(),
                message: error.message(),
            });
        }

        let result = data
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(self.symbol.clone()))?;

        Ok(flatten_quote_summary(&result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn client_init_error(message: String) -> MarketDataError {
    MarketDataError::ClientInit {
        provider: YAHOO_PROVIDER_ID.to_string(),
        message,
    }
}

/// Check that a configured URL is absolute http(s) and strip any trailing slash.
fn validate_url(raw: &str) -> Result<String, MarketDataError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| client_init_error(format!("Invalid URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(client_init_error(format!(
            "Unsupported URL scheme '{}' in '{}'",
            url.scheme(),
            raw
        )));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Map a non-success HTTP status to an error. Success statuses return `None`.
fn status_error(status: StatusCode, symbol: &str) -> Option<MarketDataError> {
    if status.is_success() {
        return None;
    }
    let provider = YAHOO_PROVIDER_ID.to_string();
    let error = match status {
        StatusCode::UNAUTHORIZED => MarketDataError::AuthExpired { provider },
        StatusCode::NOT_FOUND if !symbol.is_empty() => {
            MarketDataError::SymbolNotFound(symbol.to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => MarketDataError::RateLimited { provider },
        _ => {
            warn!("Yahoo answered {} for '{}'", status, symbol);
            MarketDataError::HttpStatus {
                provider,
                status: status.as_u16(),
            }
        }
    };
    Some(error)
}

/// Split a space-separated batch into unique, upper-cased symbols.
///
/// Every token gets a handle; Yahoo itself decides whether it knows it.
fn parse_session_symbols(symbols: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    symbols
        .split_whitespace()
        .map(str::to_uppercase)
        .filter(|symbol| seen.insert(symbol.clone()))
        .collect()
}

/// Build the fast summary from one quote object.
///
/// Scalar fields are copied as-is. `market_cap` is derived from shares
/// outstanding and the last price, next to Yahoo's own `marketCap`.
fn fast_summary_from_quote(quote: Map<String, Value>) -> FastSummary {
    let shares = quote.get("sharesOutstanding").and_then(Value::as_f64);
    let price = quote.get("regularMarketPrice").and_then(Value::as_f64);

    let mut summary = FastSummary::from_map(
        quote
            .into_iter()
            .filter(|(_, value)| !value.is_object() && !value.is_array())
            .collect(),
    );

    if let (Some(shares), Some(price)) = (shares, price) {
        if let Some(market_cap) = Number::from_f64(shares * price) {
            summary.insert("market_cap", Value::Number(market_cap));
        }
    }
    summary
}

/// Flatten the requested quoteSummary modules into one mapping.
///
/// Yahoo wraps numbers as `{"raw": .., "fmt": ..}` and uses `{}` for missing
/// values. Earlier modules win when a key appears more than once.
fn flatten_quote_summary(result: &Map<String, Value>) -> FullInfo {
    let mut info = Map::new();
    for module in FULL_INFO_MODULES {
        let Some(Value::Object(fields)) = result.get(module) else {
            continue;
        };
        for (key, value) in fields {
            if info.contains_key(key) {
                continue;
            }
            if let Some(value) = unwrap_raw(value) {
                info.insert(key.clone(), value);
            }
        }
    }
    FullInfo::from(info)
}

fn unwrap_raw(value: &Value) -> Option<Value> {
    match value {
        Value::Object(wrapped) => wrapped.get("raw").filter(|raw| !raw.is_null()).cloned(),
        Value::Array(_) | Value::Null => None,
        scalar => Some(scalar.clone()),
    }
}

// ============================================================================
// Tests
// ============================================================================
