//! Tests for the batch orchestrator.
//!
//! # Critical Contract Points
//!
//! 1. Degenerate inputs never touch the provider
//! 2. `inputCount` is the normalized count, `resolvedCount` the size of `results`
//! 3. A failing symbol never aborts the batch
//! 4. An all-failed batch with network-classified failures is an outage

#[cfg(test)]
mod tests {
    use crate::lookup::{lookup_symbols, run_lookup, LookupResponse};
    use crate::symbols::Symbol;
    use crate::test_utils::{dns, not_found, timeout, MockProvider, MockTicker};
    use marketcap_market_data::MarketDataError;
    use serde_json::json;
    use std::cell::Cell;

    fn bootstrap_with(
        provider: MockProvider,
    ) -> impl FnOnce() -> Result<MockProvider, MarketDataError> {
        move || Ok(provider)
    }

    fn unreachable_bootstrap() -> Result<MockProvider, MarketDataError> {
        panic!("provider must not be constructed for this input")
    }

    fn symbols(raw: &[&str]) -> Vec<Symbol> {
        raw.iter().filter_map(|s| Symbol::parse(s)).collect()
    }

    // =========================================================================
    // Degenerate inputs
    // =========================================================================

    #[tokio::test]
    async fn test_malformed_json_is_exact() {
        let response = run_lookup("not json", unreachable_bootstrap).await;
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"ok":false,"error":"invalid_input_json","results":{}}"#
        );
    }

    #[tokio::test]
    async fn test_non_object_payload_is_invalid() {
        let response = run_lookup(r#"["AAPL"]"#, unreachable_bootstrap).await;
        assert_eq!(response, LookupResponse::invalid_input());
    }

    #[tokio::test]
    async fn test_absent_or_empty_symbols_are_trivially_ok() {
        let expected = json!({"ok": true, "results": {}, "inputCount": 0, "resolvedCount": 0});
        for input in [
            "",
            "   ",
            "{}",
            r#"{"symbols": []}"#,
            r#"{"symbols": "AAPL"}"#,
            r#"{"symbols": [1, null, "  "]}"#,
        ] {
            let response = run_lookup(input, unreachable_bootstrap).await;
            assert_eq!(serde_json::to_value(&response).unwrap(), expected, "input: {input:?}");
        }
    }

    #[tokio::test]
    async fn test_bootstrap_failure_reports_missing_provider() {
        let response = run_lookup(r#"{"symbols": ["aapl", "msft"]}"#, || {
            Err::<MockProvider, _>(MarketDataError::ClientInit {
                provider: "MOCK".to_string(),
                message: "no TLS backend".to_string(),
            })
        })
        .await;

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": false,
                "missingYfinance": true,
                "error": "failed_to_import_yfinance:ClientInitError",
                "results": {},
                "inputCount": 2,
                "resolvedCount": 0
            })
        );
    }

    #[tokio::test]
    async fn test_session_failure_aborts_batch() {
        let input = r#"{"symbols": ["AAPL", "MSFT", "7203.T"]}"#;
        let response = run_lookup(input, bootstrap_with(MockProvider::failing(dns()))).await;

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": false,
                "error": "failed_to_initialize_tickers:DNSError",
                "results": {},
                "inputCount": 3,
                "resolvedCount": 0
            })
        );
    }

    // =========================================================================
    // Per-symbol resolution
    // =========================================================================

    #[tokio::test]
    async fn test_full_batch_mixed_outcomes() {
        let provider = MockProvider::new(vec![
            MockTicker::new("MSFT").with_fast_field("market_cap", json!(3.1e12)),
            MockTicker::new("AAPL")
                .with_fast_error(timeout())
                .with_info(json!({"marketCap": 2_800_000_000_000u64})),
            MockTicker::new("ZZZZ").with_info_error(not_found("ZZZZ")),
            MockTicker::new("EURUSD=X"),
        ]);
        let input = r#"{"symbols": ["msft", " MSFT ", "AAPL", 5, "aapl", "zzzz", "eurusd=x", "gone"]}"#;

        let cell = Cell::new(0);
        let response = run_lookup(input, || {
            cell.set(cell.get() + 1);
            Ok(provider)
        })
        .await;

        assert_eq!(cell.get(), 1);
        assert_eq!(
            response.to_json().unwrap(),
            concat!(
                r#"{"ok":true,"results":{"MSFT":3100000000000,"AAPL":2800000000000},"#,
                r#""inputCount":5,"resolvedCount":2,"#,
                r#""errors":["ZZZZ:info:SymbolNotFound","EURUSD=X:market_cap_unavailable","GONE:ticker_not_found"]}"#
            )
        );
    }

    #[tokio::test]
    async fn test_session_opened_once_with_space_joined_symbols() {
        let provider = MockProvider::new(vec![]);
        let response = lookup_symbols(&provider, &symbols(&["AAPL", "MSFT", "7203.T"])).await;

        assert_eq!(provider.opened_with(), vec!["AAPL MSFT 7203.T".to_string()]);
        assert_eq!(response.input_count, Some(3));
        assert_eq!(response.resolved_count, Some(0));
        assert!(response.ok);
        assert_eq!(
            response.errors,
            Some(vec![
                "AAPL:ticker_not_found".to_string(),
                "MSFT:ticker_not_found".to_string(),
                "7203.T:ticker_not_found".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_all_network_failures_is_outage() {
        let provider = MockProvider::new(vec![
            MockTicker::new("AAPL")
                .with_fast_error(dns())
                .with_info_error(dns()),
            MockTicker::new("MSFT")
                .with_fast_error(timeout())
                .with_info_error(timeout()),
        ]);

        let response = lookup_symbols(&provider, &symbols(&["AAPL", "MSFT"])).await;

        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("network_or_dns_failure"));
        assert_eq!(
            response.errors,
            Some(vec![
                "AAPL:fast_info:DNSError|info:DNSError".to_string(),
                "MSFT:fast_info:Timeout|info:Timeout".to_string(),
            ])
        );
        assert!(response.results.is_empty());
        assert_eq!(response.resolved_count, Some(0));
    }

    #[tokio::test]
    async fn test_network_failure_with_one_success_is_not_outage() {
        let provider = MockProvider::new(vec![
            MockTicker::new("AAPL")
                .with_fast_error(timeout())
                .with_info_error(timeout()),
            MockTicker::new("MSFT").with_fast_field("marketCap", json!(10)),
        ]);

        let response = lookup_symbols(&provider, &symbols(&["AAPL", "MSFT"])).await;

        assert!(response.ok);
        assert_eq!(response.error, None);
        assert_eq!(response.resolved_count, Some(1));
    }

    #[tokio::test]
    async fn test_missing_tickers_are_not_network_failures() {
        let provider = MockProvider::new(vec![MockTicker::new("AAPL")
            .with_fast_error(MarketDataError::Connection {
                provider: "MOCK".to_string(),
                message: "connection refused".to_string(),
            })
            .with_info_error(not_found("AAPL"))]);

        let response = lookup_symbols(&provider, &symbols(&["AAPL", "MSFT"])).await;

        assert!(response.ok);
        assert_eq!(response.error, None);
        assert_eq!(
            response.errors,
            Some(vec![
                "AAPL:fast_info:ConnectionError|info:SymbolNotFound".to_string(),
                "MSFT:ticker_not_found".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_errors_capped_at_fifty() {
        let names: Vec<String> = (0..60).map(|i| format!("SYM{}", i)).collect();
        let provider = MockProvider::new(names.iter().map(|n| MockTicker::new(n)).collect());
        let batch: Vec<Symbol> = names.iter().filter_map(|n| Symbol::parse(n)).collect();

        let response = lookup_symbols(&provider, &batch).await;

        assert_eq!(response.input_count, Some(60));
        assert_eq!(response.errors.as_ref().map(Vec::len), Some(50));
        assert_eq!(
            response.errors.as_ref().and_then(|e| e.last()).map(String::as_str),
            Some("SYM49:market_cap_unavailable")
        );
    }

    #[tokio::test]
    async fn test_counts_match_results() {
        let provider = MockProvider::new(vec![
            MockTicker::new("A").with_fast_field("market_cap", json!("123.9")),
            MockTicker::new("B").with_fast_field("market_cap", json!(0.4)),
            MockTicker::new("C").with_info(json!({"marketCap": 77})),
        ]);

        let response = lookup_symbols(&provider, &symbols(&["A", "B", "C"])).await;

        assert_eq!(response.resolved_count, Some(response.results.len()));
        assert!(response.results.values().all(|cap| cap.value() > 0));
        assert_eq!(
            serde_json::to_value(&response.results).unwrap(),
            json!({"A": 123, "C": 77})
        );
    }
}
