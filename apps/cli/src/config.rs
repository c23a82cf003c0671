use std::time::Duration;

use marketcap_market_data::YahooConfig;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
    pub yahoo_query_url: String,
    pub yahoo_cookie_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Unset or
    /// unparseable values fall back to their defaults.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = YahooConfig::default();

        let log_format = match var("MC_LOG_FORMAT") {
            Some(format) if format.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let yahoo_query_url = var("MC_YAHOO_QUERY_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.query_url);
        let yahoo_cookie_url = var("MC_YAHOO_COOKIE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.cookie_url);
        let timeout_ms: u64 = var("MC_REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let user_agent = var("MC_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        Self {
            log_format,
            yahoo_query_url,
            yahoo_cookie_url,
            request_timeout: Duration::from_millis(timeout_ms),
            user_agent,
        }
    }

    pub fn yahoo_config(&self) -> YahooConfig {
        YahooConfig {
            query_url: self.yahoo_query_url.clone(),
            cookie_url: self.yahoo_cookie_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: self.request_timeout,
        }
    }
}
