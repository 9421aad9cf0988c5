//! Suggestion, summary and probe behaviour against the AI service.

use std::sync::Arc;

use serde_json::json;

use super::harness::{clock, gateway, settings_store, task};
use crate::gateway::{
    adapters::{RecordedMethod, RecordingTransport},
    domain::{BOOTSTRAP_SUGGESTIONS, IntegrationError},
    ports::MockHttpTransport,
    services::IntegrationGateway,
};
use crate::settings::{domain::IntegrationDefaults, services::ConfigResolver};
use rstest::{fixture, rstest};

#[fixture]
fn transport() -> RecordingTransport {
    RecordingTransport::new()
}

fn completion(text: &str) -> String {
    json!({"model": "llama2", "response": text, "done": true}).to_string()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_task_list_returns_bootstrap_without_network_call() {
    let mut transport = MockHttpTransport::new();
    transport.expect_post_json().never();
    let resolver = ConfigResolver::new(
        Arc::new(settings_store(None)),
        IntegrationDefaults::default(),
    );
    let gateway = IntegrationGateway::new(Arc::new(transport), resolver, clock());

    let suggestions = gateway.suggest(&[]).await;

    assert_eq!(suggestions, BOOTSTRAP_SUGGESTIONS.to_vec());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_ai_returns_no_suggestions_and_empty_summary(transport: RecordingTransport) {
    let gateway = gateway(&transport, Some(r#"{"ollamaEnabled":false}"#));

    assert!(gateway.suggest(&[]).await.is_empty());
    assert_eq!(
        gateway
            .summarize(&[task("Deploy", "", "Backlog")])
            .await
            .expect("disabled summary is not an error"),
        ""
    );
    assert!(transport.requests().expect("requests").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn suggest_sends_non_streaming_request_and_normalises(transport: RecordingTransport) {
    transport
        .respond_with(
            200,
            completion("1. Write tests\n- Fix bug\n\n* Refactor\nExtra line ignored by slice"),
        )
        .expect("queue response");
    let gateway = gateway(
        &transport,
        Some(r#"{"ollamaEndpoint":"http://gpu-box:11434/","ollamaModel":"mistral"}"#),
    );

    let suggestions = gateway.suggest(&[task("Ship v2", "", "Backlog")]).await;

    assert_eq!(suggestions, vec!["Write tests", "Fix bug", "Refactor"]);
    let requests = transport.requests().expect("requests");
    let request = requests.first().expect("one request");
    assert_eq!(request.method, RecordedMethod::Post);
    assert_eq!(request.url, "http://gpu-box:11434/api/generate");
    let body = request.body.as_ref().expect("json body");
    assert_eq!(body["model"], "mistral");
    assert_eq!(body["stream"], false);
    assert!(
        body["prompt"]
            .as_str()
            .expect("prompt string")
            .contains("\"Ship v2\"")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_swallowed_by_suggest_but_raised_by_summarize(
    transport: RecordingTransport,
) {
    transport.respond_with(500, "model not loaded").expect("queue response");
    transport.respond_with(500, "model not loaded").expect("queue response");
    let gateway = gateway(&transport, None);
    let tasks = vec![task("Deploy", "", "Backlog")];

    let suggestions = gateway.suggest(&tasks).await;
    let summary = gateway.summarize(&tasks).await;

    assert!(suggestions.is_empty());
    assert!(matches!(
        summary,
        Err(IntegrationError::Status { status: 500 })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn network_failure_is_swallowed_by_suggest_but_raised_by_summarize(
    transport: RecordingTransport,
) {
    transport.fail_with("connection refused").expect("queue failure");
    transport.fail_with("connection refused").expect("queue failure");
    let gateway = gateway(&transport, None);
    let tasks = vec![task("Deploy", "", "Backlog")];

    assert!(gateway.suggest(&tasks).await.is_empty());
    assert!(matches!(
        gateway.summarize(&tasks).await,
        Err(IntegrationError::Transport(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_response_field_yields_empty_results(transport: RecordingTransport) {
    transport.respond_with(200, r#"{"done":true}"#).expect("queue response");
    transport.respond_with(200, r#"{"done":true}"#).expect("queue response");
    let gateway = gateway(&transport, None);
    let tasks = vec![task("Deploy", "", "Backlog")];

    assert!(gateway.suggest(&tasks).await.is_empty());
    assert_eq!(gateway.summarize(&tasks).await.expect("summary succeeds"), "");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summarize_returns_response_verbatim(transport: RecordingTransport) {
    let text = "  Two tasks are in flight.\nOne is blocked on review.  ";
    transport.respond_with(200, completion(text)).expect("queue response");
    let gateway = gateway(&transport, None);

    let summary = gateway
        .summarize(&[
            task("Deploy", "", "In Progress"),
            task("Review PR", "", "Needs Review"),
        ])
        .await
        .expect("summary succeeds");

    assert_eq!(summary, text);
    let requests = transport.requests().expect("requests");
    let body = requests
        .first()
        .and_then(|request| request.body.as_ref())
        .expect("json body");
    assert_eq!(body["model"], "llama2");
    assert_eq!(
        body["prompt"],
        "Summarize these tasks in 2-3 sentences:\n1. Deploy (In Progress)\n2. Review PR (Needs Review)"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summarize_rejects_undecodable_body(transport: RecordingTransport) {
    transport.respond_with(200, "<html>").expect("queue response");
    let gateway = gateway(&transport, None);

    assert!(matches!(
        gateway.summarize(&[]).await,
        Err(IntegrationError::Decode(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ai_probe_lists_tags_and_maps_outcomes(transport: RecordingTransport) {
    transport.respond_with(200, r#"{"models":[]}"#).expect("queue response");
    transport.respond_with(503, "").expect("queue response");
    transport.fail_with("refused").expect("queue failure");
    let gateway = gateway(&transport, Some(r#"{"ollamaEnabled":false}"#));

    assert!(gateway.test_ai().await);
    assert!(!gateway.test_ai().await);
    assert!(!gateway.test_ai().await);

    let requests = transport.requests().expect("requests");
    assert!(requests.iter().all(|request| request.method == RecordedMethod::Get));
    assert!(
        requests
            .iter()
            .all(|request| request.url == "http://localhost:11434/api/tags")
    );
}
