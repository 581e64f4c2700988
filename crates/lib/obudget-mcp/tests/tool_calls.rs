use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use obudget_core::{ClientConfig, ObudgetClient};
use obudget_mcp::ObudgetMcp;
use rmcp::model::{CallToolResult, ErrorCode, LoggingMessageNotificationParam};
use rmcp::service::{NotificationContext, RunningService, ServiceError};
use rmcp::{ClientHandler, RoleClient, serve_client, serve_server};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Messages = Arc<Mutex<Vec<(String, Instant)>>>;

/// Host stand-in that records every logging notification it receives.
#[derive(Clone, Default)]
struct RecordingHost {
    messages: Messages,
}

impl ClientHandler for RecordingHost {
    fn on_logging_message(
        &self,
        params: LoggingMessageNotificationParam,
        _context: NotificationContext<RoleClient>,
    ) -> impl Future<Output = ()> + Send + '_ {
        if params.logger.as_deref() == Some("obudget")
            && let Some(text) = params.data.as_str()
        {
            self.messages
                .lock()
                .expect("message log lock")
                .push((text.to_string(), Instant::now()));
        }
        std::future::ready(())
    }
}

async fn connect(upstream: &MockServer) -> (RunningService<RoleClient, RecordingHost>, Messages) {
    let api = ObudgetClient::new(&ClientConfig::new(upstream.uri()))
        .expect("mock server URI should be a valid base URL");
    let (server_io, host_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(running) = serve_server(ObudgetMcp::new(api), server_io).await {
            let _ = running.waiting().await;
        }
    });

    let host = RecordingHost::default();
    let messages = host.messages.clone();
    let running = serve_client(host, host_io)
        .await
        .expect("host should complete the MCP handshake");
    (running, messages)
}

async fn call(
    host: &RunningService<RoleClient, RecordingHost>,
    name: &str,
    arguments: Value,
) -> Result<CallToolResult, ServiceError> {
    let params = serde_json::from_value(json!({ "name": name, "arguments": arguments }))
        .expect("tool call params should deserialize");
    host.call_tool(params).await
}

fn result_text(result: &CallToolResult) -> String {
    let content = serde_json::to_value(&result.content[0]).expect("content should serialize");
    content["text"]
        .as_str()
        .expect("tool result should be text content")
        .to_string()
}

async fn wait_for_messages(messages: &Messages) -> Vec<(String, Instant)> {
    for _ in 0..50 {
        let recorded = messages.lock().expect("message log lock").clone();
        if !recorded.is_empty() {
            return recorded;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    Vec::new()
}

fn recorded_query(requests: &[wiremock::Request]) -> String {
    requests[0]
        .url
        .query_pairs()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned())
        .expect("query parameter should be present")
}

#[tokio::test]
async fn contract_tool_announces_then_returns_upstream_body() {
    let raw = r#"{"rows":[{"budget_code":"0015","min_year":2022,"supplier":"x","executed":5,"purpose":"y"}]}"#;
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(raw, "application/json")
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let (host, messages) = connect(&upstream).await;
    let result = call(&host, "get_contract", json!({ "code": "0015" }))
        .await
        .expect("get_contract should succeed");
    let finished_at = Instant::now();

    let recorded = wait_for_messages(&messages).await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "Searching for contracts for code 0015...");
    assert!(recorded[0].1 < finished_at, "message should arrive before the result");

    let body: Value = serde_json::from_str(&result_text(&result)).expect("result should be JSON");
    assert_eq!(serde_json::to_string(&body).expect("body should serialize"), raw);

    let requests = upstream.received_requests().await.unwrap_or_default();
    assert!(recorded_query(&requests).contains("budget_code LIKE '0015%"));

    let _ = host.cancel().await;
}

#[tokio::test]
async fn omitted_parent_defaults_to_root_code() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&upstream)
        .await;

    let (host, messages) = connect(&upstream).await;
    call(&host, "get_detailed_budget_for_specific_parent", json!({}))
        .await
        .expect("parent query should succeed");

    let requests = upstream.received_requests().await.unwrap_or_default();
    assert!(recorded_query(&requests).contains("parent LIKE '00%"));
    let recorded = wait_for_messages(&messages).await;
    assert_eq!(recorded[0].0, "Searching budget for parent: 00...");

    let _ = host.cancel().await;
}

#[tokio::test]
async fn unknown_search_type_is_rejected_before_any_request() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&upstream)
        .await;

    let (host, messages) = connect(&upstream).await;
    let err = call(
        &host,
        "search",
        json!({ "searchTerm": "hospital", "searchType": "hospitals" }),
    )
    .await
    .expect_err("unknown search type should fail");
    match err {
        ServiceError::McpError(error) => assert_eq!(error.code, ErrorCode::INVALID_PARAMS),
        other => panic!("expected an MCP error, got {other}"),
    }

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(messages.lock().expect("message log lock").is_empty());
    assert!(upstream.received_requests().await.unwrap_or_default().is_empty());

    let _ = host.cancel().await;
}

#[tokio::test]
async fn upstream_error_fails_only_its_own_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/tenders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1])))
        .mount(&upstream)
        .await;

    let (host, _messages) = connect(&upstream).await;
    let (failed, succeeded) = tokio::join!(
        call(&host, "search", json!({ "searchTerm": "hospital", "searchType": "tenders" })),
        call(&host, "get_budget", json!({}))
    );

    match failed.expect_err("503 should fail the search call") {
        ServiceError::McpError(error) => {
            assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
            assert!(error.message.contains("503"));
        }
        other => panic!("expected an MCP error, got {other}"),
    }
    let budget = succeeded.expect("budget call should succeed");
    let body: Value = serde_json::from_str(&result_text(&budget)).expect("result should be JSON");
    assert_eq!(body, json!([1]));

    let _ = host.cancel().await;
}
