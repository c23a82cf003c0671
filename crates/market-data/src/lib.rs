//! Market-Cap Market Data Crate
//!
//! This crate provides the provider-agnostic capability interface used to
//! look up market capitalization figures, together with a Yahoo Finance
//! implementation.
//!
//! # Overview
//!
//! ```text
//! +------------------+
//! | MarketDataProvider |  open_session("AAPL MSFT ...")
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  TickerSession   |  symbol -> handle (missing symbols have none)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  TickerHandle    |  fast_summary() / full_info()
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Opens a batch session
//! - [`TickerHandle`] - Two lookup tiers for one symbol
//! - [`FastSummary`] / [`FullInfo`] - Raw provider views
//! - [`MarketDataError`] / [`FailureKind`] - Errors and their stable classification

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{FailureKind, MarketDataError};
pub use models::{FastSummary, FullInfo};
pub use provider::yahoo::{YahooConfig, YahooProvider, YAHOO_PROVIDER_ID};
pub use provider::{MarketDataProvider, TickerHandle, TickerSession};
