//! Request symbol normalization.

use std::collections::HashSet;

use log::debug;
use serde_json::Value;

use super::symbols_model::Symbol;

/// Turn the raw `symbols` value of a request into canonical symbols.
///
/// Anything that is not an array yields an empty list. Non-string entries,
/// blank strings and repeats are skipped; order follows the first occurrence.
/// This never fails.
pub fn normalize_symbols(raw: Option<&Value>) -> Vec<Symbol> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut symbols = Vec::with_capacity(items.len());
    for item in items {
        let Some(text) = item.as_str() else {
            debug!("Skipping non-string symbol entry: {}", item);
            continue;
        };
        let Some(symbol) = Symbol::parse(text) else {
            continue;
        };
        if seen.insert(symbol.clone()) {
            symbols.push(symbol);
        }
    }
    symbols
}
