use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use llm::{CompletionClient, CompletionRequest, LLMError, OpenAIClient};
use serde_json::json;

fn chat_reply(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn complete_returns_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .header("authorization", "Bearer sk-test")
                .json_body_partial(r#"{"model":"gpt-3.5-turbo","messages":[{"role":"system","content":"sys"},{"role":"user","content":"hi"}]}"#);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(chat_reply("hello there"));
        })
        .await;

    let client = OpenAIClient::new(server.base_url(), "sk-test");
    let req = CompletionRequest::new("gpt-3.5-turbo", "sys", "hi").temperature(0.7);
    let out = client.complete(&req).await.unwrap();
    mock.assert_async().await;
    assert_eq!(out, "hello there");
}

#[tokio::test]
async fn json_mode_sends_response_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .json_body_partial(r#"{"response_format":{"type":"json_object"}}"#);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(chat_reply("{\"niche\":\"food\"}"));
        })
        .await;

    let client = OpenAIClient::new(format!("{}/", server.base_url()), "k");
    let req = CompletionRequest::new("m", "sys", "hi").temperature(0.3).json_object();
    let out = client.complete(&req).await.unwrap();
    mock.assert_async().await;
    assert_eq!(out, "{\"niche\":\"food\"}");
}

#[tokio::test]
async fn api_error_carries_status_and_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(401)
                .header("content-type", "application/json")
                .json_body(json!({"error": {"message": "Incorrect API key provided"}}));
        })
        .await;

    let client = OpenAIClient::new(server.base_url(), "bad");
    let err = client
        .complete(&CompletionRequest::new("m", "s", "u"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LLMError::Api {
            status: 401,
            message: "Incorrect API key provided".into()
        }
    );
}

#[tokio::test]
async fn null_content_is_empty_completion() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"choices": [{"message": {"role": "assistant", "content": null}}]}));
        })
        .await;

    let client = OpenAIClient::new(server.base_url(), "k");
    let err = client
        .complete(&CompletionRequest::new("m", "s", "u"))
        .await
        .unwrap_err();
    assert_eq!(err, LLMError::EmptyCompletion);
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).body("not json");
        })
        .await;

    let client = OpenAIClient::new(server.base_url(), "k");
    let err = client
        .complete(&CompletionRequest::new("m", "s", "u"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::InvalidResponse(_)));
}

#[tokio::test]
async fn list_models_reads_ids() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/models").header("authorization", "Bearer k");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"object": "list", "data": [{"id": "gpt-3.5-turbo"}, {"id": "gpt-4o"}]}));
        })
        .await;

    let client = OpenAIClient::new(server.base_url(), "k");
    let models = client.list_models().await.unwrap();
    mock.assert_async().await;
    assert_eq!(models, vec!["gpt-3.5-turbo".to_string(), "gpt-4o".to_string()]);
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = OpenAIClient::new("http://127.0.0.1:1", "k");
    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, LLMError::Network(_)));
}
