use rmcp::{
    ErrorData,
    Peer,
    RoleServer,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use super::default_code;
use crate::{ObudgetMcp, helpers, messages};

/// Parameters for listing the budget lines under a parent code.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ParentBudgetParams {
    /// Parent budget code as a string with leading zeros preserved (use '0015', not '15').
    /// Defaults to "00" for the top level.
    #[serde(default = "default_code")]
    pub parent: String,
}

/// Parameters for fetching the history of one budget code.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BudgetHistoryParams {
    /// Budget code as a string with leading zeros preserved (use '0015', not '15').
    #[serde(default = "default_code")]
    pub code: String,
}

#[tool_router(router = tool_router_budget, vis = "pub")]
impl ObudgetMcp {
    #[tool(description = "Get the high-level Israeli state budget structure. Returns the top-level budget lines (depth < 3) for 2025 with parent, code, title, net_allocated, net_revised and net_executed. Codes are strings with leading zeros preserved (e.g. '00', '0015', '001523').")]
    async fn get_budget(&self, peer: Peer<RoleServer>) -> Result<CallToolResult, ErrorData> {
        helpers::announce(&peer, messages::budget()).await;
        let body = self.client().get_budget().await.map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }

    #[tool(description = "Get detailed budget information for a specific parent budget code. Returns every budget line under the parent with codes, titles, allocations, revisions and execution data.")]
    async fn get_detailed_budget_for_specific_parent(
        &self,
        peer: Peer<RoleServer>,
        Parameters(params): Parameters<ParentBudgetParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::announce(&peer, messages::parent_budget(&params.parent)).await;
        let body = self
            .client()
            .get_detailed_budget_for_specific_parent(&params.parent)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }

    #[tool(description = "Get the historical data for a specific budget code: past allocations, revisions and execution data for that exact code.")]
    async fn get_budget_history_for_code(
        &self,
        peer: Peer<RoleServer>,
        Parameters(params): Parameters<BudgetHistoryParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::announce(&peer, messages::budget_history(&params.code)).await;
        let body = self
            .client()
            .get_budget_history_for_code(&params.code)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }
}
