use obudget_core::SearchType;
use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::ObudgetMcp;

/// Payload listing the MCP commands and accepted search categories.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
    pub search_types: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands offered by this server.".to_string(),
                "get_budget - Top-level budget lines (depth < 3) for 2025.".to_string(),
                "get_detailed_budget_for_specific_parent - Budget lines under a parent code."
                    .to_string(),
                "get_budget_history_for_code - History of a single budget code.".to_string(),
                "get_supports - Support payments and grants under a budget code.".to_string(),
                "get_contract - Contract spending under a budget code.".to_string(),
                "search - Free-text search in one dataset (see search_types).".to_string(),
            ],
            search_types: SearchType::ALL
                .iter()
                .map(|kind| format!("{kind} - {}", kind.description()))
                .collect(),
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl ObudgetMcp {
    #[tool(description = "List the MCP commands offered by this server and the accepted search types.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
