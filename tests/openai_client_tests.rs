use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use taxchat::{ChatClient, CompletionSettings, OpenAiClient, SYSTEM_PROMPT};

/// What the stub saw: the Authorization header and the JSON body.
type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Serve `/v1/chat/completions` on an ephemeral port, answering every request
/// with `status` and `reply`.
async fn spawn_stub(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();

    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = recorder.clone();
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                recorder.lock().unwrap().push((auth, body));
                (status, Json(reply))
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn test_complete_returns_first_choice() {
    let (base_url, _) = spawn_stub(StatusCode::OK, completion(json!("Income tax is..."))).await;
    let client = OpenAiClient::new("sk-test", base_url);

    let reply = client
        .complete(&CompletionSettings::default(), "What is income tax?")
        .await
        .unwrap();

    assert_eq!(reply.as_deref(), Some("Income tax is..."));
}

#[tokio::test]
async fn test_request_carries_key_prompt_and_settings() {
    let (base_url, seen) = spawn_stub(StatusCode::OK, completion(json!("ok"))).await;
    let client = OpenAiClient::new("sk-test", base_url);
    let settings = CompletionSettings::default().with_model("gpt-4o-mini");

    client.complete(&settings, "What is VAT?").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 500);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "What is VAT?");
}

#[tokio::test]
async fn test_null_content_is_none() {
    let (base_url, _) = spawn_stub(StatusCode::OK, completion(Value::Null)).await;
    let client = OpenAiClient::new("sk-test", base_url);

    let reply = client
        .complete(&CompletionSettings::default(), "Hello")
        .await
        .unwrap();

    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_no_choices_is_none() {
    let (base_url, _) = spawn_stub(StatusCode::OK, json!({ "choices": [] })).await;
    let client = OpenAiClient::new("sk-test", base_url);

    let reply = client
        .complete(&CompletionSettings::default(), "Hello")
        .await
        .unwrap();

    assert_eq!(reply, None);
}

#[tokio::test]
async fn test_error_status_is_upstream_error() {
    let (base_url, _) = spawn_stub(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    )
    .await;
    let client = OpenAiClient::new("sk-wrong", base_url);

    let err = client
        .complete(&CompletionSettings::default(), "Hello")
        .await
        .unwrap_err();

    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_unreachable_server_is_upstream_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = OpenAiClient::new("sk-test", format!("http://{addr}"));

    let err = client
        .complete(&CompletionSettings::default(), "Hello")
        .await
        .unwrap_err();

    assert!(err.is_upstream());
}
