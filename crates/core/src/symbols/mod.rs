//! Ticker symbol module - canonical symbols and input normalization.

mod normalizer;
mod symbols_model;

pub use normalizer::normalize_symbols;
pub use symbols_model::Symbol;
