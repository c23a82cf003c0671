//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that opens a batch session
//! - The `TickerHandle` trait exposing the two lookup tiers per symbol
//! - `TickerSession`, the per-batch map of symbol to handle
//! - Concrete provider implementations (Yahoo)
//!
//! # Architecture
//!
//! Callers depend only on the traits. A provider decides during
//! `open_session` which symbols it can serve; symbols without a handle are
//! reported as not found by the caller, never as errors of the session.

mod session;
mod traits;

pub mod yahoo;

// Re-exports
pub use session::TickerSession;
pub use traits::{MarketDataProvider, TickerHandle};
