//! Symbol domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical ticker symbol: trimmed, upper-cased and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Canonicalize a raw token. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = raw.trim().to_uppercase();
        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
