//! Market data models
//!
//! This module contains the provider-agnostic views returned per ticker:
//! - `summary` - The cheap fast summary and the complete info views (FastSummary, FullInfo)

mod summary;

pub use summary::{FastSummary, FullInfo};
