use std::collections::HashMap;
use std::fmt;

use super::traits::TickerHandle;

/// Handles for one batch, keyed by symbol.
#[derive(Default)]
pub struct TickerSession {
    tickers: HashMap<String, Box<dyn TickerHandle>>,
}

impl TickerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under its own symbol, replacing any previous one.
    pub fn insert(&mut self, handle: Box<dyn TickerHandle>) {
        self.tickers.insert(handle.symbol().to_string(), handle);
    }

    /// Exact-match lookup. Symbols the provider could not serve return `None`.
    pub fn get(&self, symbol: &str) -> Option<&dyn TickerHandle> {
        self.tickers.get(symbol).map(|handle| handle.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl fmt::Debug for TickerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<&str> = self.tickers.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        f.debug_struct("TickerSession")
            .field("symbols", &symbols)
            .finish()
    }
}
