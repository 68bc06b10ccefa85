// ABOUTME: Tests for the OpenAI client - request mapping, response parsing,
// ABOUTME: and HTTP behaviour against a wiremock server.

use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::openai::parse_arguments;
use super::*;
use crate::error::LlmError;

fn extraction_tool() -> ToolDefinition {
    ToolDefinition {
        name: "extract_web_data_with_rest_api".to_string(),
        description: "Extract structured data".to_string(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "url": {"type": "string"},
                "query": {"type": "string"}
            },
            "required": ["url", "query"]
        }),
    }
}

#[test]
fn test_request_mapping() {
    let req = Request::new("gpt-4o")
        .system("Be helpful")
        .message(Message::user("Hello"))
        .tools(vec![extraction_tool()])
        .max_tokens(100);

    let openai_req = OpenAIRequest::from(&req);
    assert_eq!(openai_req.model, "gpt-4o");
    assert_eq!(openai_req.messages.len(), 2);
    assert_eq!(openai_req.messages[0].role, "system");
    assert_eq!(openai_req.messages[1].role, "user");
    assert_eq!(openai_req.tools.len(), 1);
    assert_eq!(openai_req.tools[0].tool_type, "function");
    assert_eq!(
        openai_req.tools[0].function.name,
        "extract_web_data_with_rest_api"
    );
}

#[test]
fn test_tool_round_trip_mapping() {
    let req = Request::new("gpt-4o")
        .message(Message::user("extract"))
        .message(Message::assistant(vec![ContentBlock::tool_use(
            "call_1",
            "extract_web_data_with_rest_api",
            serde_json::json!({"url": "https://example.com", "query": "{ title }"}),
        )]))
        .message(Message::tool_results(vec![
            ContentBlock::tool_result("call_1", "{\"title\": \"Example\"}"),
        ]));

    let openai_req = OpenAIRequest::from(&req);
    assert_eq!(openai_req.messages.len(), 3);

    let assistant = &openai_req.messages[1];
    assert_eq!(assistant.role, "assistant");
    assert!(assistant.content.is_none());
    let calls = assistant.tool_calls.as_ref().unwrap();
    let args: serde_json::Value = serde_json::from_str(&calls[0].function.arguments).unwrap();
    assert_eq!(args["query"], "{ title }");

    let tool = &openai_req.messages[2];
    assert_eq!(tool.role, "tool");
    assert_eq!(tool.tool_call_id.as_deref(), Some("call_1"));
}

#[test]
fn test_response_parses_tool_calls() {
    let raw = serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {
                        "name": "extract_web_data_with_rest_api",
                        "arguments": "{\"url\":\"https://example.com\",\"query\":\"{ title }\"}"
                    }
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
    });
    let parsed: OpenAIResponse = serde_json::from_value(raw).unwrap();
    let response = Response::try_from(parsed).unwrap();

    assert_eq!(response.stop_reason, StopReason::ToolUse);
    assert_eq!(response.usage.input_tokens, 12);
    let uses = response.tool_uses();
    assert_eq!(uses.len(), 1);
    assert_eq!(
        uses[0].input,
        &serde_json::json!({"url": "https://example.com", "query": "{ title }"})
    );
}

#[test]
fn test_response_rejects_malformed_arguments() {
    let raw = serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{
            "message": {
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {"name": "x", "arguments": "{not json"}
                }]
            },
            "finish_reason": "tool_calls"
        }]
    });
    let parsed: OpenAIResponse = serde_json::from_value(raw).unwrap();
    assert!(matches!(
        Response::try_from(parsed),
        Err(LlmError::Deserialize(_))
    ));
}

#[test]
fn test_empty_arguments_are_an_empty_object() {
    assert_eq!(parse_arguments("").unwrap(), serde_json::json!({}));
}

#[tokio::test]
async fn test_create_message_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(bearer_token("sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-2",
            "model": "gpt-4o",
            "choices": [{
                "message": {"role": "assistant", "content": "Hello!"},
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAIClient::new("sk-test").with_base_url(server.uri());
    let response = client
        .create_message(&Request::new("gpt-4o").message(Message::user("Hi")))
        .await
        .unwrap();

    assert_eq!(response.text(), "Hello!");
    assert_eq!(response.stop_reason, StopReason::EndTurn);
}

#[tokio::test]
async fn test_api_error_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
        })))
        .mount(&server)
        .await;

    let client = OpenAIClient::new("bad").with_base_url(server.uri());
    let err = client
        .create_message(&Request::new("gpt-4o").message(Message::user("Hi")))
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error: {other}"),
    }
}
