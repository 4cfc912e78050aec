//! # Integration Tests
//!
//! End-to-end tests for the fetch -> select -> dispatch chain.
//!
//! Responsibilities:
//! - Exercise the real component chain against mock HTTP servers
//! - Pin the external wire formats (log API in, dispatch API out)

#[cfg(test)]
mod e2e_tests {
    use contracts::{ContractError, FailurePolicy};
    use dispatcher::{DispatchEmitter, DryRunSink, GithubSink};
    use fetcher::LogFetcher;
    use selector::select_and_order;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FROM: &str = "2026-08-21T00:00:00+02:00";
    const EVENT: &str = "aem-publish";

    fn entry(route: &str, timestamp: &str, path: &str) -> serde_json::Value {
        json!({
            "route": route,
            "timestamp": timestamp,
            "user": "jdoe",
            "status": 200,
            "path": path
        })
    }

    async fn mount_dispatch_endpoint(server: &MockServer, expect: u64) {
        Mock::given(method("POST"))
            .and(path("/repos/acme/site/dispatches"))
            .and(header("authorization", "token gh-token"))
            .and(header("accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(expect)
            .mount(server)
            .await;
    }

    fn github_sink(server: &MockServer) -> GithubSink {
        GithubSink::new(
            format!("{}/repos/acme/site/dispatches", server.uri()),
            "gh-token",
        )
        .unwrap()
    }

    /// Full chain: two chained log pages, filter, sort, dispatch.
    ///
    /// Verifies that dispatch requests go out in entry-then-path order
    /// after sorting, with the exact wire body per path.
    #[tokio::test]
    async fn test_e2e_paginated_fetch_to_dispatch() {
        let log_server = MockServer::start().await;
        let dispatch_server = MockServer::start().await;

        // Page 2 carries the earliest entry so sorting matters.
        Mock::given(method("GET"))
            .and(path("/log"))
            .and(query_param("from", FROM))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": [
                    entry("live", "2026-08-22T10:00:00Z", "/late"),
                    entry("preview", "2026-08-22T09:00:00Z", "/filtered-out"),
                ],
                "links": { "next": format!("{}/log-page2", log_server.uri()) }
            })))
            .expect(1)
            .mount(&log_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/log-page2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": [
                    json!({
                        "route": "live",
                        "timestamp": "2026-08-22T08:00:00Z",
                        "path": "/early",
                        "paths": ["/early-extra", ""]
                    })
                ]
            })))
            .expect(1)
            .mount(&log_server)
            .await;

        mount_dispatch_endpoint(&dispatch_server, 3).await;

        let fetcher = LogFetcher::new("acme/site", "admin-token").unwrap();
        let entries = fetcher
            .fetch_since(&format!("{}/log", log_server.uri()), FROM)
            .await
            .unwrap();
        assert_eq!(entries.len(), 3);

        let selected = select_and_order(entries, "live");
        assert_eq!(selected.len(), 2);

        let emitter = DispatchEmitter::new(
            github_sink(&dispatch_server),
            EVENT,
            false,
            FailurePolicy::Abort,
        );
        let outcomes = emitter.emit_all(&selected).await.unwrap();
        assert_eq!(outcomes.len(), 3);

        // Bodies arrive sorted: /early (plus its extra path) before /late.
        let requests = dispatch_server.received_requests().await.unwrap();
        let dispatched_paths: Vec<String> = requests
            .iter()
            .map(|req| {
                let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
                assert_eq!(body["event_type"], EVENT);
                assert_eq!(body["client_payload"]["user"], "jdoe");
                body["client_payload"]["path"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(dispatched_paths, vec!["/early", "/early-extra", "/late"]);
    }

    /// A failing page aborts the run before any dispatch goes out, even
    /// when an earlier page succeeded.
    #[tokio::test]
    async fn test_e2e_fetch_error_prevents_all_dispatches() {
        let log_server = MockServer::start().await;
        let dispatch_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": [entry("live", "2026-08-22T10:00:00Z", "/accumulated")],
                "links": { "next": format!("{}/log-page2", log_server.uri()) }
            })))
            .mount(&log_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/log-page2"))
            .respond_with(ResponseTemplate::new(500).set_body_string("log backend down"))
            .mount(&log_server)
            .await;

        mount_dispatch_endpoint(&dispatch_server, 0).await;

        let fetcher = LogFetcher::new("acme/site", "admin-token").unwrap();
        let err = fetcher
            .fetch_since(&format!("{}/log", log_server.uri()), FROM)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ContractError::FetchStatus { status: 500, .. }
        ));
        // The accumulated first page is never dispatched; the mock's
        // expect(0) is asserted on drop.
    }

    /// Zero fetched entries short-circuit the run without dispatching.
    #[tokio::test]
    async fn test_e2e_zero_entries_no_dispatch() {
        let log_server = MockServer::start().await;
        let dispatch_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entries": [] })))
            .expect(1)
            .mount(&log_server)
            .await;

        mount_dispatch_endpoint(&dispatch_server, 0).await;

        let fetcher = LogFetcher::new("acme/site", "admin-token").unwrap();
        let entries = fetcher
            .fetch_since(&format!("{}/log", log_server.uri()), FROM)
            .await
            .unwrap();

        assert!(entries.is_empty());
        assert!(select_and_order(entries, "live").is_empty());
    }

    /// Entries that all fail the route filter also short-circuit.
    #[tokio::test]
    async fn test_e2e_route_filter_short_circuit() {
        let log_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": [
                    entry("preview", "2026-08-22T10:00:00Z", "/a"),
                    entry("code", "2026-08-22T11:00:00Z", "/b"),
                ]
            })))
            .mount(&log_server)
            .await;

        let fetcher = LogFetcher::new("acme/site", "admin-token").unwrap();
        let entries = fetcher
            .fetch_since(&format!("{}/log", log_server.uri()), FROM)
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(select_and_order(entries, "live").is_empty());
    }

    /// Dry-run mode suppresses every POST while still producing outcomes.
    #[tokio::test]
    async fn test_e2e_dry_run_sends_nothing() {
        let log_server = MockServer::start().await;
        let dispatch_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": [entry("live", "2026-08-22T10:00:00Z", "/a")]
            })))
            .mount(&log_server)
            .await;

        mount_dispatch_endpoint(&dispatch_server, 0).await;

        let fetcher = LogFetcher::new("acme/site", "admin-token").unwrap();
        let entries = fetcher
            .fetch_since(&format!("{}/log", log_server.uri()), FROM)
            .await
            .unwrap();
        let selected = select_and_order(entries, "live");

        let emitter = DispatchEmitter::new(DryRunSink, EVENT, false, FailurePolicy::Abort);
        let outcomes = emitter.emit_all(&selected).await.unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(emitter.metrics().suppressed, 1);
    }

    /// Under the continue policy a failed dispatch does not stop the rest.
    #[tokio::test]
    async fn test_e2e_continue_policy_delivers_remaining() {
        let dispatch_server = MockServer::start().await;

        // First POST fails, later ones succeed.
        Mock::given(method("POST"))
            .and(path("/repos/acme/site/dispatches"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .up_to_n_times(1)
            .mount(&dispatch_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/repos/acme/site/dispatches"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&dispatch_server)
            .await;

        let entries: Vec<contracts::LogEntry> = vec![
            serde_json::from_value(entry("live", "2026-08-22T10:00:00Z", "/first")).unwrap(),
            serde_json::from_value(entry("live", "2026-08-22T11:00:00Z", "/second")).unwrap(),
        ];

        let emitter = DispatchEmitter::new(
            github_sink(&dispatch_server),
            EVENT,
            false,
            FailurePolicy::Continue,
        );
        let outcomes = emitter.emit_all(&entries).await.unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].status.is_failure());
        assert!(!outcomes[1].status.is_failure());
    }
}
