/// Maximum number of per-symbol failures reported in a response
pub const MAX_REPORTED_ERRORS: usize = 50;

/// Request field holding the raw symbol list
pub const SYMBOLS_FIELD: &str = "symbols";

/// Fast summary field holding the derived market cap
pub const FAST_MARKET_CAP_FIELD: &str = "market_cap";

/// Fast summary field holding the provider-reported market cap
pub const FAST_MARKET_CAP_ALT_FIELD: &str = "marketCap";

/// Full info field holding the market cap
pub const INFO_MARKET_CAP_FIELD: &str = "marketCap";

/// Error code for an unreadable or non-object request
pub const ERROR_INVALID_INPUT_JSON: &str = "invalid_input_json";

/// Error code prefix when the provider cannot be constructed
pub const ERROR_PROVIDER_UNAVAILABLE: &str = "failed_to_import_yfinance";

/// Error code prefix when the batch session cannot be opened
pub const ERROR_SESSION_INIT: &str = "failed_to_initialize_tickers";

/// Error code when every symbol failed and the network looks down
pub const ERROR_NETWORK_OR_DNS: &str = "network_or_dns_failure";

/// Per-symbol reason when the session has no handle for the symbol
pub const REASON_TICKER_NOT_FOUND: &str = "ticker_not_found";

/// Per-symbol reason when the provider answered without a usable market cap
pub const REASON_MARKET_CAP_UNAVAILABLE: &str = "market_cap_unavailable";
