//! Market data provider trait definitions.
//!
//! This module defines the capability interface every market data source
//! implements: a batch session constructor plus two lookup tiers per ticker.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{FastSummary, FullInfo};

use super::session::TickerSession;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketcap_market_data::provider::{MarketDataProvider, TickerSession};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn open_session(&self, symbols: &str) -> Result<TickerSession, MarketDataError> {
///         // authenticate once, then build one handle per symbol
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and error context.
    fn id(&self) -> &'static str;

    /// Open one session covering every symbol of a batch.
    ///
    /// # Arguments
    ///
    /// * `symbols` - Space-separated list of symbols (e.g., "AAPL MSFT 7203.T")
    ///
    /// # Returns
    ///
    /// A session holding a handle for every symbol the provider can serve,
    /// or a `MarketDataError` if the session itself cannot be established.
    async fn open_session(&self, symbols: &str) -> Result<TickerSession, MarketDataError>;
}

/// Per-symbol handle with two lookup tiers.
///
/// Both calls may fail independently; neither caches nor retries.
#[async_trait]
pub trait TickerHandle: Send + Sync {
    /// The symbol this handle was created for.
    fn symbol(&self) -> &str;

    /// Cheap lookup returning a few headline fields.
    async fn fast_summary(&self) -> Result<FastSummary, MarketDataError>;

    /// Expensive lookup returning the provider's complete info payload.
    async fn full_info(&self) -> Result<FullInfo, MarketDataError>;
}
