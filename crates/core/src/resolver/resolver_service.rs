//! Two-tier market-cap lookup for a single ticker.

use log::debug;
use marketcap_market_data::TickerHandle;
use serde_json::Value;

use crate::constants::{FAST_MARKET_CAP_ALT_FIELD, FAST_MARKET_CAP_FIELD, INFO_MARKET_CAP_FIELD};

use super::resolver_model::{Diagnostic, LookupStage, MarketCap, Resolution};

/// Resolve the market cap of one ticker.
///
/// The fast summary is tried first (`market_cap`, then `marketCap`); the full
/// info is only requested when that yields nothing valid. A failing call is
/// recorded as a diagnostic and never aborts the lookup. A value found by
/// either tier resolves the symbol with no diagnostics.
pub async fn resolve_market_cap(ticker: &dyn TickerHandle) -> Resolution {
    let mut diagnostics = Vec::new();

    let fast_value = match ticker.fast_summary().await {
        Ok(summary) => market_cap_from_value(summary.get(FAST_MARKET_CAP_FIELD))
            .or_else(|| market_cap_from_value(summary.get(FAST_MARKET_CAP_ALT_FIELD))),
        Err(e) => {
            debug!("Fast summary failed for {}: {}", ticker.symbol(), e);
            diagnostics.push(Diagnostic::new(LookupStage::FastInfo, e.kind()));
            None
        }
    };
    if let Some(market_cap) = fast_value {
        return Resolution::Resolved(market_cap);
    }

    let info_value = match ticker.full_info().await {
        Ok(info) => market_cap_from_value(info.get(INFO_MARKET_CAP_FIELD)),
        Err(e) => {
            debug!("Full info failed for {}: {}", ticker.symbol(), e);
            diagnostics.push(Diagnostic::new(LookupStage::Info, e.kind()));
            None
        }
    };

    match info_value {
        Some(market_cap) => Resolution::Resolved(market_cap),
        None => Resolution::Unresolved { diagnostics },
    }
}

/// Validate a raw provider value as a market cap.
///
/// Accepts JSON numbers and numeric strings; see [`MarketCap::from_f64`] for
/// the range rules. Booleans, nulls and containers are never market caps.
pub fn market_cap_from_value(value: Option<&Value>) -> Option<MarketCap> {
    let number = match value? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    MarketCap::from_f64(number)
}
