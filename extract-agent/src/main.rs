// ABOUTME: Interactive extraction agent backed by OpenAI and AgentQL.
// ABOUTME: Each line typed is run as a prompt; tool calls are printed.

use std::sync::Arc;

use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use agentql_tools::prelude::*;

const SYSTEM_PROMPT: &str = "You extract structured data from web pages. When the user gives \
a URL and an AgentQL query, call extract_web_data_with_rest_api with exactly that URL and \
query, then summarize the result briefly.";

fn print_output(output: &AgentOutput) {
    for call in &output.tool_calls {
        println!("\n[{} {}]", call.tool_name, call.kwargs_value());
        let content = &call.tool_output.content;
        if content.len() > 500 {
            let cut = content
                .char_indices()
                .take_while(|(i, _)| *i < 500)
                .last()
                .map_or(0, |(i, c)| i + c.len_utf8());
            println!("{}...\n[truncated, {} bytes total]", &content[..cut], content.len());
        } else {
            println!("{}", content);
        }
    }
    if !output.response.is_empty() {
        println!("\n{}\n", output.response);
    }
}

async fn run_repl(agent: &FunctionAgent) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Extract Agent - Type 'quit' to exit.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        let _ = rl.add_history_entry(line);

        match agent.run(line).await {
            Ok(output) => print_output(&output),
            Err(e) => eprintln!("Error: {}\n", e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let creds = Credentials::from_env();
    let Some(creds) = creds.live() else {
        anyhow::bail!("{} must be set", creds.missing().join(" and "));
    };

    let mut config = AgentQlConfig::from_env().context("loading AgentQL config")?;
    if let Ok(mode) = std::env::var("AGENTQL_MODE") {
        config = config.mode(mode.parse()?);
    }
    let spec = AgentQlRestApiToolSpec::new(config)?;

    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
    let agent = FunctionAgent::builder(Arc::new(OpenAIClient::new(creds.openai_api_key)))
        .model(model)
        .system_prompt(SYSTEM_PROMPT)
        .tool_spec(&spec)
        .build();

    let tools = agent.registry().list().await;
    tracing::info!(tools = %tools.join(", "), model = agent.model(), "agent ready");

    run_repl(&agent).await
}
