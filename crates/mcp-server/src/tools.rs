//! MCP Tools for Text Intel
//!
//! Exposes outcome extraction and context trimming to AI agents via MCP
//! protocol. All analysis lives in `text-intel-engine`; this layer only
//! maps tool parameters to engine calls and engine results to tool output.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use text_intel_engine as engine;

/// Text Intel MCP Service
#[derive(Clone)]
pub struct TextIntelService {
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl TextIntelService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for TextIntelService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for TextIntelService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Text Intel provides deterministic, pattern-based text analysis. Use 'extract_outcomes' to pull explicitly stated decisions, action items, and open questions out of text, and 'trim_context' to reduce long text to the sentences most relevant to a goal.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input/Output Schemas
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExtractOutcomesRequest {
    /// Text to analyze. An absent or empty text yields all-empty lists
    /// rather than an error.
    #[serde(default)]
    #[schemars(description = "The text to analyze for outcomes")]
    pub text: String,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct ExtractOutcomesResult {
    /// Explicit decisions, in first-match order
    pub decisions: Vec<String>,
    /// Explicit action items, in first-match order
    pub action_items: Vec<String>,
    /// Explicit open questions, in first-match order
    pub open_questions: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TrimContextRequest {
    /// Text to reduce; absent or empty yields an empty selection
    #[serde(default)]
    #[schemars(description = "The text to reduce")]
    pub text: String,

    /// Goal the retained context should support
    #[serde(default)]
    #[schemars(description = "The goal that the context should support")]
    pub goal: String,

    /// Maximum number of chunks to return (default: 5). Fractions truncate;
    /// non-numeric values are rejected at the protocol layer.
    #[schemars(description = "Maximum number of chunks to return (default: 5)")]
    pub max_chunks: Option<f64>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct TrimContextResult {
    /// Retained sentences, highest relevance first
    pub selected_chunks: Vec<SelectedChunk>,
}

#[derive(Debug, Serialize, schemars::JsonSchema)]
pub struct SelectedChunk {
    /// Retained sentence
    pub text: String,
    /// Why it was kept, with its relevance score
    pub reason: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TextIntelService {
    /// Extract explicit outcomes from text
    #[tool(description = "Extract explicit decisions, action items, and open questions from text. Returns only items explicitly stated in the input.")]
    pub async fn extract_outcomes(
        &self,
        Parameters(request): Parameters<ExtractOutcomesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcomes = engine::extract_outcomes(&request.text);

        let result = ExtractOutcomesResult {
            decisions: outcomes.decisions,
            action_items: outcomes.action_items,
            open_questions: outcomes.open_questions,
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }

    /// Trim text down to goal-relevant context
    #[tool(description = "Reduce long text to the minimum context required to accomplish a goal. Removes filler and preserves essential facts, constraints, and decisions.")]
    pub async fn trim_context(
        &self,
        Parameters(request): Parameters<TrimContextRequest>,
    ) -> Result<CallToolResult, McpError> {
        let max_chunks = request.max_chunks.unwrap_or(engine::DEFAULT_MAX_CHUNKS);

        let chunks = match engine::trim_context(&request.text, &request.goal, max_chunks) {
            Ok(chunks) => chunks,
            Err(e) => return Ok(CallToolResult::error(vec![Content::text(format!("Error: {e}"))])),
        };

        let result = TrimContextResult {
            selected_chunks: chunks
                .into_iter()
                .map(|chunk| SelectedChunk {
                    text: chunk.text,
                    reason: chunk.reason,
                })
                .collect(),
        };

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&result).unwrap_or_default(),
        )]))
    }
}
