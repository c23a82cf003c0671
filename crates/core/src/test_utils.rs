//! Mock provider and tickers shared by the resolver and lookup tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use marketcap_market_data::{
    FastSummary, FullInfo, MarketDataError, MarketDataProvider, TickerHandle, TickerSession,
};
use serde_json::{json, Value};

// =========================================================================
// Mock TickerHandle
// =========================================================================

#[derive(Clone)]
pub struct MockTicker {
    symbol: String,
    fast: Result<FastSummary, MarketDataError>,
    info: Result<FullInfo, MarketDataError>,
    fast_calls: Arc<AtomicUsize>,
    info_calls: Arc<AtomicUsize>,
}

impl MockTicker {
    /// A ticker whose provider knows nothing about market caps.
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            fast: Ok(FastSummary::new()),
            info: Ok(FullInfo::new(json!({}))),
            fast_calls: Arc::new(AtomicUsize::new(0)),
            info_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_fast_field(mut self, key: &str, value: Value) -> Self {
        let summary = self.fast.unwrap_or_default().with_field(key, value);
        self.fast = Ok(summary);
        self
    }

    pub fn with_fast_error(mut self, error: MarketDataError) -> Self {
        self.fast = Err(error);
        self
    }

    pub fn with_info(mut self, value: Value) -> Self {
        self.info = Ok(FullInfo::new(value));
        self
    }

    pub fn with_info_error(mut self, error: MarketDataError) -> Self {
        self.info = Err(error);
        self
    }

    pub fn fast_calls(&self) -> usize {
        self.fast_calls.load(Ordering::SeqCst)
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickerHandle for MockTicker {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    async fn fast_summary(&self) -> Result<FastSummary, MarketDataError> {
        self.fast_calls.fetch_add(1, Ordering::SeqCst);
        self.fast.clone()
    }

    async fn full_info(&self) -> Result<FullInfo, MarketDataError> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.info.clone()
    }
}

// =========================================================================
// Mock MarketDataProvider
// =========================================================================

#[derive(Default)]
pub struct MockProvider {
    tickers: Vec<MockTicker>,
    session_error: Option<MarketDataError>,
    opened_with: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(tickers: Vec<MockTicker>) -> Self {
        Self {
            tickers,
            ..Default::default()
        }
    }

    pub fn failing(error: MarketDataError) -> Self {
        Self {
            session_error: Some(error),
            ..Default::default()
        }
    }

    /// Every argument `open_session` was called with.
    pub fn opened_with(&self) -> Vec<String> {
        self.opened_with
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn open_session(&self, symbols: &str) -> Result<TickerSession, MarketDataError> {
        if let Ok(mut calls) = self.opened_with.lock() {
            calls.push(symbols.to_string());
        }
        if let Some(error) = &self.session_error {
            return Err(error.clone());
        }
        let mut session = TickerSession::new();
        for ticker in &self.tickers {
            session.insert(Box::new(ticker.clone()));
        }
        Ok(session)
    }
}

pub fn timeout() -> MarketDataError {
    MarketDataError::Timeout {
        provider: "MOCK".to_string(),
    }
}

pub fn dns() -> MarketDataError {
    MarketDataError::Dns {
        provider: "MOCK".to_string(),
        message: "dns error: failed to lookup address information".to_string(),
    }
}

pub fn not_found(symbol: &str) -> MarketDataError {
    MarketDataError::SymbolNotFound(symbol.to_string())
}
