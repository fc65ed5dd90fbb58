use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use std::collections::HashSet;
use std::time::Duration;
use tokio::process::Command;

mod support;

const CALL_TIMEOUT: Duration = Duration::from_secs(10);

async fn call(
    service: &rmcp::service::RunningService<rmcp::RoleClient, ()>,
    name: &'static str,
    arguments: serde_json::Value,
) -> Result<serde_json::Value> {
    let result = tokio::time::timeout(
        CALL_TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: arguments.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;

    assert_ne!(result.is_error, Some(true), "{name} returned error");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .with_context(|| format!("{name} missing text output"))?;
    serde_json::from_str(text).with_context(|| format!("{name} output is not JSON: {text}"))
}

async fn spawn_server() -> Result<rmcp::service::RunningService<rmcp::RoleClient, ()>> {
    let bin = support::locate_text_intel_mcp_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(CALL_TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}

#[tokio::test]
async fn mcp_exposes_exactly_the_two_analysis_tools() -> Result<()> {
    let service = spawn_server().await?;

    let tools = tokio::time::timeout(CALL_TIMEOUT, service.list_tools(Default::default()))
        .await
        .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(
        tool_names,
        HashSet::from(["extract_outcomes", "trim_context"]),
        "unexpected tool surface"
    );

    service.cancel().await.ok();
    Ok(())
}

#[tokio::test]
async fn extract_outcomes_returns_categorized_lists() -> Result<()> {
    let service = spawn_server().await?;

    let value = call(
        &service,
        "extract_outcomes",
        serde_json::json!({
            "text": "We decided to use PostgreSQL. The team agreed to move forward."
        }),
    )
    .await?;
    let decisions = value["decisions"].as_array().context("decisions")?;
    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0], "We decided to use PostgreSQL.");
    assert_eq!(value["action_items"].as_array().context("actions")?.len(), 0);
    assert_eq!(
        value["open_questions"].as_array().context("questions")?.len(),
        0
    );

    let value = call(
        &service,
        "extract_outcomes",
        serde_json::json!({
            "text": "Should we use Docker? How do we handle authentication? This works fine."
        }),
    )
    .await?;
    assert_eq!(
        value["open_questions"],
        serde_json::json!(["Should we use Docker?", "How do we handle authentication?"])
    );

    // Empty text is a well-formed empty result, not an error.
    let value = call(&service, "extract_outcomes", serde_json::json!({ "text": "" })).await?;
    assert_eq!(
        value,
        serde_json::json!({ "decisions": [], "action_items": [], "open_questions": [] })
    );

    service.cancel().await.ok();
    Ok(())
}

#[tokio::test]
async fn trim_context_ranks_and_bounds_chunks() -> Result<()> {
    let service = spawn_server().await?;

    let value = call(
        &service,
        "trim_context",
        serde_json::json!({
            "text": "Hi there! The deadline is March 15th. We need JSON support.",
            "goal": "deadline",
            "max_chunks": 2
        }),
    )
    .await?;
    let chunks = value["selected_chunks"].as_array().context("chunks")?;
    assert!(chunks.len() <= 2);
    assert_eq!(chunks[0]["text"], "The deadline is March 15th.");
    assert_eq!(chunks[0]["reason"], "High relevance to goal (score: 1.00)");
    assert!(!chunks
        .iter()
        .any(|c| c["text"].as_str().unwrap_or_default().starts_with("Hi")));

    // Missing goal yields an empty selection.
    let value = call(
        &service,
        "trim_context",
        serde_json::json!({ "text": "Some text here.", "goal": "" }),
    )
    .await?;
    assert_eq!(value, serde_json::json!({ "selected_chunks": [] }));

    service.cancel().await.ok();
    Ok(())
}

#[tokio::test]
async fn trim_context_rejects_non_numeric_max_chunks() -> Result<()> {
    let service = spawn_server().await?;

    let result = tokio::time::timeout(
        CALL_TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: "trim_context".into(),
            arguments: serde_json::json!({
                "text": "The deadline is March 15th.",
                "goal": "deadline",
                "max_chunks": "five"
            })
            .as_object()
            .cloned(),
        }),
    )
    .await
    .context("timeout calling trim_context")?;

    // A malformed parameter type must fail loudly, never silently default.
    match result {
        Err(_) => {}
        Ok(res) => assert_eq!(
            res.is_error,
            Some(true),
            "non-numeric max_chunks was accepted"
        ),
    }

    service.cancel().await.ok();
    Ok(())
}
