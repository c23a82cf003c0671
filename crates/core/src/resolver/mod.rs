//! Market-cap resolver module.
//!
//! - [`resolver_model`] - `MarketCap`, `Diagnostic` and the per-symbol `Resolution`
//! - [`resolver_service`] - The two-tier lookup that extracts a valid market cap

pub mod resolver_model;
pub mod resolver_service;

pub use resolver_model::{Diagnostic, LookupStage, MarketCap, Resolution};
pub use resolver_service::{market_cap_from_value, resolve_market_cap};
