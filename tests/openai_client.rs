//! OpenAiClient against a local mock of the chat-completions endpoint.

mod common;

use common::mock_openai::{MockOpenAi, MockResponse};
use formula_assistant::completion::{CompletionClient, CompletionError, OpenAiClient};
use formula_assistant::config::{Config, SecureString};
use formula_assistant::prompt::{build_messages, Mode};

fn client_for(server: &MockOpenAi) -> OpenAiClient {
    let mut config = Config::with_credential_path("unused".into());
    config.base_url = server.base_url();
    OpenAiClient::new(&SecureString::new("sk-test".to_string()), &config).unwrap()
}

#[tokio::test]
async fn test_success_returns_first_choice() {
    let server = MockOpenAi::start(vec![MockResponse::completion("=SUMIF(A:A,\">0\")")]).await;
    let client = client_for(&server);

    let text = client
        .complete(build_messages(Mode::GenerateFormula, "Sum positive values"))
        .await
        .unwrap();
    assert_eq!(text, "=SUMIF(A:A,\">0\")");

    let captured = server.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].authorization.as_deref(), Some("Bearer sk-test"));
    assert_eq!(captured[0].body["model"], "gpt-4o-mini");
    assert_eq!(captured[0].body["messages"][0]["role"], "system");
    assert_eq!(
        captured[0].body["messages"][1]["content"],
        "Generate a formula for the following requirement: Sum positive values"
    );
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let server = MockOpenAi::start(vec![MockResponse::error(401, "Incorrect API key provided")]).await;
    let client = client_for(&server);

    let err = client
        .complete(build_messages(Mode::ExplainFormula, "=A1"))
        .await
        .unwrap_err();
    match &err {
        CompletionError::Api { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Error code: 401 - Incorrect API key provided");
}

#[tokio::test]
async fn test_plain_error_body_is_kept() {
    let server = MockOpenAi::start(vec![MockResponse::raw(502, "upstream unavailable")]).await;
    let client = client_for(&server);

    let err = client
        .complete(build_messages(Mode::GenerateFormula, "x"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Error code: 502 - upstream unavailable");
}

#[tokio::test]
async fn test_no_choices_is_empty_response() {
    let server = MockOpenAi::start(vec![MockResponse::raw(200, r#"{"choices": []}"#)]).await;
    let client = client_for(&server);

    let err = client
        .complete(build_messages(Mode::GenerateFormula, "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::EmptyResponse));
}

#[tokio::test]
async fn test_null_content_is_empty_response() {
    let server = MockOpenAi::start(vec![MockResponse::raw(
        200,
        r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#,
    )])
    .await;
    let client = client_for(&server);

    let err = client
        .complete(build_messages(Mode::GenerateFormula, "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::EmptyResponse));
}

#[tokio::test]
async fn test_garbage_body_is_parse_error() {
    let server = MockOpenAi::start(vec![MockResponse::raw(200, "not json")]).await;
    let client = client_for(&server);

    let err = client
        .complete(build_messages(Mode::GenerateFormula, "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::Parse(_)));
}
