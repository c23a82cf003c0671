//! Market Cap Core - Symbol normalization, market-cap resolution and batch lookup.
//!
//! This crate holds the lookup logic and is provider-agnostic: it talks to
//! market data only through the traits defined in `marketcap-market-data`.

pub mod constants;
pub mod lookup;
pub mod resolver;
pub mod symbols;

#[cfg(test)]
mod test_utils;

pub use lookup::{lookup_symbols, run_lookup, InputError, LookupRequest, LookupResponse};
pub use resolver::{resolve_market_cap, MarketCap, Resolution};
pub use symbols::{normalize_symbols, Symbol};
