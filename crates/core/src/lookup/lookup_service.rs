//! Batch orchestrator.

use indexmap::IndexMap;
use log::{debug, error, info, warn};
use marketcap_market_data::{MarketDataError, MarketDataProvider};

use crate::constants::{REASON_MARKET_CAP_UNAVAILABLE, REASON_TICKER_NOT_FOUND};
use crate::resolver::{resolve_market_cap, Resolution};
use crate::symbols::{normalize_symbols, Symbol};

use super::lookup_model::{LookupRequest, LookupResponse};

/// Run one batch from raw stdin text to the response.
///
/// Degenerate inputs short-circuit before the provider is touched. The
/// provider is only constructed, through `bootstrap`, once there is at least
/// one symbol to look up. Every outcome, including failures, is a response.
pub async fn run_lookup<P, F>(raw_input: &str, bootstrap: F) -> LookupResponse
where
    P: MarketDataProvider,
    F: FnOnce() -> Result<P, MarketDataError>,
{
    let request = match LookupRequest::parse(raw_input) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejecting request: {}", e);
            return LookupResponse::invalid_input();
        }
    };

    let symbols = normalize_symbols(request.symbols());
    if symbols.is_empty() {
        debug!("No symbols to look up");
        return LookupResponse::empty();
    }

    let provider = match bootstrap() {
        Ok(provider) => provider,
        Err(e) => {
            error!("Market data provider unavailable: {}", e);
            return LookupResponse::provider_unavailable(symbols.len(), e.kind());
        }
    };

    lookup_symbols(&provider, &symbols).await
}

/// Resolve every symbol through one provider session.
///
/// Symbols are processed in order, one provider call at a time.
pub async fn lookup_symbols(
    provider: &dyn MarketDataProvider,
    symbols: &[Symbol],
) -> LookupResponse {
    let joined = symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    let session = match provider.open_session(&joined).await {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to open {} session: {}", provider.id(), e);
            return LookupResponse::session_failed(symbols.len(), e.kind());
        }
    };

    let mut results = IndexMap::new();
    let mut errors = Vec::new();
    let mut network_failures = 0usize;

    for symbol in symbols {
        let Some(ticker) = session.get(symbol.as_str()) else {
            errors.push(format!("{}:{}", symbol, REASON_TICKER_NOT_FOUND));
            continue;
        };

        match resolve_market_cap(ticker).await {
            Resolution::Resolved(market_cap) => {
                debug!("{} market cap {}", symbol, market_cap);
                results.insert(symbol.clone(), market_cap);
            }
            unresolved => {
                if unresolved.is_network_failure() {
                    network_failures += 1;
                }
                let reason = unresolved
                    .detail()
                    .unwrap_or_else(|| REASON_MARKET_CAP_UNAVAILABLE.to_string());
                errors.push(format!("{}:{}", symbol, reason));
            }
        }
    }

    info!(
        "Resolved {}/{} symbols via {} ({} failures, {} network)",
        results.len(),
        symbols.len(),
        provider.id(),
        errors.len(),
        network_failures
    );

    let response = LookupResponse::completed(results, errors, symbols.len(), network_failures);
    if !response.ok {
        warn!("Every symbol failed and the network looks unreachable");
    }
    response
}
