use marketcap_core::{run_lookup, LookupResponse};
use marketcap_market_data::YahooProvider;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Silences the HTTP stack; the lookup reports its own failures.
const DEFAULT_LOG_DIRECTIVES: &str = "warn,hyper=off,hyper_util=off,reqwest=off,rustls=off";

/// Route `tracing` and `log` records to stderr. Stdout carries only the response.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
    let registry = tracing_subscriber::registry().with(filter);

    let initialized = match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    if let Err(e) = initialized {
        eprintln!("tracing already initialized: {}", e);
    }
}

/// Run one lookup against Yahoo Finance.
///
/// The provider is only built once the request holds at least one symbol.
pub async fn handle_input(raw: &str, config: &Config) -> LookupResponse {
    run_lookup(raw, || YahooProvider::new(config.yahoo_config())).await
}

/// Same as [`handle_input`] for raw stdin bytes. Non-UTF-8 input is invalid.
pub async fn handle_bytes(raw: &[u8], config: &Config) -> LookupResponse {
    match std::str::from_utf8(raw) {
        Ok(text) => handle_input(text, config).await,
        Err(e) => {
            tracing::warn!("Request is not valid UTF-8: {}", e);
            LookupResponse::invalid_input()
        }
    }
}
