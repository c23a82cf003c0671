//! Batch lookup module.
//!
//! - [`lookup_model`] - Request parsing and the response written to stdout
//! - [`lookup_errors`] - Request decoding errors
//! - [`lookup_service`] - The orchestrator: normalize, bootstrap, open session, resolve, aggregate
//!
//! ```text
//! run_lookup → normalize_symbols → bootstrap → open_session → resolve_market_cap (per symbol)
//!                                                                  ↓
//!                                                           LookupResponse
//! ```

pub mod lookup_errors;
pub mod lookup_model;
pub mod lookup_service;

#[cfg(test)]
mod lookup_service_tests;

pub use lookup_errors::InputError;
pub use lookup_model::{LookupRequest, LookupResponse};
pub use lookup_service::{lookup_symbols, run_lookup};
