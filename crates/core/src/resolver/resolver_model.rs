//! Resolver domain models.

use std::fmt;

use marketcap_market_data::FailureKind;
use serde::{Deserialize, Serialize};

/// At most this many diagnostics are rendered for one symbol.
pub const MAX_RENDERED_DIAGNOSTICS: usize = 2;

/// Separator between rendered diagnostics.
pub const DIAGNOSTIC_SEPARATOR: &str = "|";

/// Market capitalization in whole currency units. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCap(u64);

impl MarketCap {
    /// Truncate a provider figure toward zero.
    ///
    /// Returns `None` for non-finite or non-positive input, for values that
    /// truncate to zero, and for values beyond the `u64` range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        let truncated = value.trunc();
        if truncated < 1.0 || truncated >= u64::MAX as f64 {
            return None;
        }
        Some(Self(truncated as u64))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarketCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which provider call a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    FastInfo,
    Info,
}

impl LookupStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FastInfo => "fast_info",
            Self::Info => "info",
        }
    }
}

/// A failed provider call, rendered as `stage:kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: LookupStage,
    pub kind: FailureKind,
}

impl Diagnostic {
    pub fn new(stage: LookupStage, kind: FailureKind) -> Self {
        Self { stage, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.stage.as_str(), self.kind.tag())
    }
}

/// Outcome of resolving one symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(MarketCap),
    /// No valid figure. Empty diagnostics mean the provider answered without one.
    Unresolved { diagnostics: Vec<Diagnostic> },
}

impl Resolution {
    pub fn market_cap(&self) -> Option<MarketCap> {
        match self {
            Self::Resolved(market_cap) => Some(*market_cap),
            Self::Unresolved { .. } => None,
        }
    }

    /// The reported diagnostics, capped at [`MAX_RENDERED_DIAGNOSTICS`].
    pub fn reported_diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Resolved(_) => &[],
            Self::Unresolved { diagnostics } => {
                &diagnostics[..diagnostics.len().min(MAX_RENDERED_DIAGNOSTICS)]
            }
        }
    }

    /// Rendered diagnostic text, e.g. `fast_info:Timeout|info:DNSError`.
    pub fn detail(&self) -> Option<String> {
        let reported = self.reported_diagnostics();
        if reported.is_empty() {
            return None;
        }
        Some(
            reported
                .iter()
                .map(Diagnostic::to_string)
                .collect::<Vec<_>>()
                .join(DIAGNOSTIC_SEPARATOR),
        )
    }

    /// Whether a reported diagnostic points at a network outage.
    pub fn is_network_failure(&self) -> bool {
        self.reported_diagnostics()
            .iter()
            .any(|diagnostic| diagnostic.kind.is_network())
    }
}
