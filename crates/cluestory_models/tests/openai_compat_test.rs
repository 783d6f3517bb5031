// Tests for OpenAiCompatibleClient against a local mock endpoint.

use cluestory_core::{ApiKey, CompletionOptions, CompletionRequest};
use cluestory_error::{ClueStoryErrorKind, CompletionErrorKind};
use cluestory_interface::CompletionDriver;
use cluestory_models::{OpenAiCompatibleClient, TokenLimitField};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiCompatibleClient {
    OpenAiCompatibleClient::new(
        format!("{}/v1/chat/completions", server.uri()),
        Duration::from_secs(5),
        "test",
    )
    .expect("client builds")
}

fn request(options: CompletionOptions) -> CompletionRequest {
    CompletionRequest::prompt(
        "gpt-4o-mini",
        "You write children's adventure stories.",
        "=== STAGE 1 === please",
        options,
    )
}

fn completion_kind(err: &cluestory_error::ClueStoryError) -> &CompletionErrorKind {
    match err.kind() {
        ClueStoryErrorKind::Completion(e) => &e.kind,
        other => panic!("expected completion error, got {other}"),
    }
}

#[tokio::test]
async fn test_complete_returns_first_choice_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 300,
            "messages": [
                {"role": "system", "content": "You write children's adventure stories."},
                {"role": "user", "content": "=== STAGE 1 === please"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "=== STAGE 1 ===\nOnce upon a time"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .complete(&ApiKey::new("sk-test"), &request(CompletionOptions::text(300)))
        .await?;

    assert_eq!(text, "=== STAGE 1 ===\nOnce upon a time");
    Ok(())
}

#[tokio::test]
async fn test_json_mode_and_completion_token_field() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "max_completion_tokens": 2000,
            "response_format": {"type": "json_object"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "{\"problems\": []}"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_token_limit_field(TokenLimitField::MaxCompletionTokens);
    let text = client
        .complete(&ApiKey::new("k"), &request(CompletionOptions::json(2000)))
        .await?;

    assert_eq!(text, "{\"problems\": []}");
    Ok(())
}

#[tokio::test]
async fn test_structured_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided: sk-bad", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&ApiKey::new("sk-bad"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    assert_eq!(
        completion_kind(&err),
        &CompletionErrorKind::Api {
            status: 401,
            message: "Incorrect API key provided: sk-bad".to_string()
        }
    );
}

#[tokio::test]
async fn test_unstructured_error_body_is_kept_raw() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&ApiKey::new("k"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    match completion_kind(&err) {
        CompletionErrorKind::Api { status, message } => {
            assert_eq!(*status, 503);
            assert_eq!(message, "upstream overloaded");
        }
        other => panic!("unexpected kind {other}"),
    }
    assert!(completion_kind(&err).is_retryable());
}

#[tokio::test]
async fn test_null_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": null, "refusal": "no"}}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&ApiKey::new("k"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::EmptyResponse(_)
    ));
}

#[tokio::test]
async fn test_empty_choices_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(&ApiKey::new("k"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::EmptyResponse(_)
    ));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({"choices": [{"message": {"content": "late"}}]})),
        )
        .mount(&server)
        .await;

    let client = OpenAiCompatibleClient::new(
        format!("{}/v1/chat/completions", server.uri()),
        Duration::from_millis(200),
        "test",
    )
    .expect("client builds");

    let err = client
        .complete(&ApiKey::new("k"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::Transport(_)
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Port 9 (discard) is closed on test hosts.
    let client = OpenAiCompatibleClient::new(
        "http://127.0.0.1:9/v1/chat/completions",
        Duration::from_secs(2),
        "test",
    )
    .expect("client builds");

    let err = client
        .complete(&ApiKey::new("k"), &request(CompletionOptions::text(10)))
        .await
        .unwrap_err();

    assert!(matches!(
        completion_kind(&err),
        CompletionErrorKind::Transport(_)
    ));
}
