use std::fmt;

/// Classification of a provider failure.
///
/// Every [`MarketDataError`](super::MarketDataError) maps to exactly one kind.
/// The kind's [`tag`](Self::tag) is what ends up in per-symbol diagnostics, so the
/// strings are part of the output contract and must stay stable.
///
/// # Behavior Summary
///
/// | Kind | Tag | Network outage? |
/// |------|-----|-----------------|
/// | `Dns` | `DNSError` | Yes |
/// | `Timeout` | `Timeout` | Yes |
/// | `Connection` | `ConnectionError` | No |
/// | `RateLimited` | `RateLimited` | No |
/// | `HttpStatus` | `HTTPError` | No |
/// | `AuthExpired` | `AuthError` | No |
/// | `SymbolNotFound` | `SymbolNotFound` | No |
/// | `Decode` | `DecodeError` | No |
/// | `Provider` | `ProviderError` | No |
/// | `ClientInit` | `ClientInitError` | No |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// Host name could not be resolved.
    Dns,

    /// The request did not complete within the client timeout.
    Timeout,

    /// The connection could not be established for a reason other than DNS.
    Connection,

    /// The provider answered with HTTP 429.
    RateLimited,

    /// The provider answered with an unexpected non-success status.
    HttpStatus,

    /// The provider rejected the session credentials.
    AuthExpired,

    /// The provider does not know the symbol.
    SymbolNotFound,

    /// The response body could not be decoded.
    Decode,

    /// Any other provider-side failure.
    Provider,

    /// The provider client could not be constructed.
    ClientInit,
}

impl FailureKind {
    /// Short machine-readable tag used in diagnostics and error codes.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Dns => "DNSError",
            Self::Timeout => "Timeout",
            Self::Connection => "ConnectionError",
            Self::RateLimited => "RateLimited",
            Self::HttpStatus => "HTTPError",
            Self::AuthExpired => "AuthError",
            Self::SymbolNotFound => "SymbolNotFound",
            Self::Decode => "DecodeError",
            Self::Provider => "ProviderError",
            Self::ClientInit => "ClientInitError",
        }
    }

    /// Whether this failure points at the network rather than at the symbol.
    ///
    /// When every symbol of a batch fails and at least one failure is of a
    /// network kind, the whole batch is reported as an outage.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Dns | Self::Timeout)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
