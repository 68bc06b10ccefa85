// ABOUTME: Tests for AgentQlRestApiToolSpec as seen by an agent - spec
// ABOUTME: conformance, and the tool call a prompt produces.

mod common;

use std::sync::Arc;

use agentql_tools::prelude::*;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{extraction_prompt, get_testing_data, live_credentials};

fn assert_tool_spec<T: ToolSpec>() {}

#[test]
fn test_class() {
    assert_tool_spec::<AgentQlRestApiToolSpec>();
}

/// Mock OpenAI that asks for one extraction call, then answers.
async fn mount_openai(server: &MockServer, url: &str, query: &str) {
    let arguments = serde_json::json!({"url": url, "query": query}).to_string();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "extract_web_data_with_rest_api",
                            "arguments": arguments
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .with_priority(5)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("\"role\":\"tool\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "chatcmpl-2",
            "model": "gpt-4o",
            "choices": [{
                "message": {"role": "assistant", "content": "Found 1 product."},
                "finish_reason": "stop"
            }]
        })))
        .with_priority(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_extract_web_data_tool_call_against_mocks() {
    let data = get_testing_data();
    let openai = MockServer::start().await;
    let agentql = MockServer::start().await;

    mount_openai(&openai, &data.test_url, &data.test_query).await;
    Mock::given(method("POST"))
        .and(path("/v1/query-data"))
        .and(header("X-API-Key", "aq-test"))
        .and(body_partial_json(serde_json::json!({
            "url": data.test_url,
            "query": data.test_query
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"products": [{"product_name": "Qwilfish", "product_price": 77}]},
            "metadata": {"request_id": "req-1"}
        })))
        .expect(1)
        .mount(&agentql)
        .await;

    let spec = AgentQlRestApiToolSpec::new(AgentQlConfig::new("aq-test").api_base(agentql.uri()))
        .unwrap();
    let llm = OpenAIClient::new("sk-test").with_base_url(openai.uri());
    let agent = FunctionAgent::builder(Arc::new(llm))
        .tools(spec.to_tool_list())
        .build();

    let res = agent.run(&extraction_prompt(&data)).await.unwrap();

    let tool_output = &res.tool_calls[0];
    assert_eq!(tool_output.tool_name, "extract_web_data_with_rest_api");
    assert_eq!(
        tool_output.kwargs_value(),
        serde_json::json!({"url": data.test_url, "query": data.test_query})
    );
    assert!(!tool_output.tool_output.is_error);
    assert!(tool_output.tool_output.content.contains("Qwilfish"));
    assert_eq!(res.response, "Found 1 product.");
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY and AGENTQL_API_KEY"]
async fn test_extract_web_data_llm_tool_call() {
    let Some(creds) = live_credentials("test_extract_web_data_llm_tool_call") else {
        return;
    };
    let data = get_testing_data();

    let spec = AgentQlRestApiToolSpec::new(AgentQlConfig::new(creds.agentql_api_key)).unwrap();
    let agent = FunctionAgent::builder(Arc::new(OpenAIClient::new(creds.openai_api_key)))
        .model("gpt-4o")
        .tools(spec.to_tool_list())
        .build();

    let res = agent.run(&extraction_prompt(&data)).await.unwrap();

    let tool_output = &res.tool_calls[0];
    assert_eq!(tool_output.tool_name, "extract_web_data_with_rest_api");
    assert_eq!(
        tool_output.kwargs_value(),
        serde_json::json!({"url": data.test_url, "query": data.test_query})
    );
}
