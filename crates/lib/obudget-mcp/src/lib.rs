//! MCP server implementation for obudget-mcp.
//!
//! This crate wires the upstream budget client into rmcp tool handlers and
//! exposes the MCP-facing API surface over stdio and streamable HTTP.

mod helpers;
mod messages;
mod tools;
pub mod server;

use obudget_core::ObudgetClient;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};

const SERVER_NAME: &str = "obudget-mcp";
const SERVER_TITLE: &str = "Israeli Budget Data API Server";

const SERVER_INSTRUCTIONS: &str = r"obudget-mcp answers questions about the Israeli state budget using the public budget API.

You can ask about:
- A general free-text search in the budget (`search`).
- The top-level budget structure (`get_budget`).
- All items under a specific parent item (`get_detailed_budget_for_specific_parent`).
- The history of a budget item (`get_budget_history_for_code`).
- Support payments and contracts paid from a budget item (`get_supports`, `get_contract`).

Notes:
- Budget codes are strings. Keep leading zeros: '0015' and '15' are different codes.
- Codes are hierarchical: '00' is the root, '0015' a ministry, '001523' a program.
- `search` accepts searchType entities, national-budget-changes, supports, tenders or contract-spending.
- Results are returned exactly as the upstream API sends them.
- Use `help` for a command summary. `health` returns `ok`.";

/// MCP server wrapper around the upstream client and tool routers.
#[derive(Clone)]
pub struct ObudgetMcp {
    tool_router: ToolRouter<Self>,
    client: ObudgetClient,
}

impl ObudgetMcp {
    /// Creates a new server with every tool registered.
    #[must_use]
    pub fn new(client: ObudgetClient) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_budget()
            + Self::tool_router_spending()
            + Self::tool_router_search()
            + Self::tool_router_context();
        Self {
            tool_router,
            client,
        }
    }

    pub(crate) const fn client(&self) -> &ObudgetClient {
        &self.client
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl ObudgetMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for ObudgetMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some(SERVER_TITLE.to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_logging()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
