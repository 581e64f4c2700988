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

/// Parameters for spending lookups by budget code prefix.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SpendingParams {
    /// Budget code as a string with leading zeros preserved (use '0015', not '15').
    /// Defaults to "00" for all codes.
    #[serde(default = "default_code")]
    pub code: String,
}

#[tool_router(router = tool_router_spending, vis = "pub")]
impl ObudgetMcp {
    #[tool(description = "Get support payments and grants by budget code. Returns recipient, amount paid, year and support title for payments from 2021 onwards with amount_paid > 0.")]
    async fn get_supports(
        &self,
        peer: Peer<RoleServer>,
        Parameters(params): Parameters<SpendingParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::announce(&peer, messages::supports(&params.code)).await;
        let body = self
            .client()
            .get_supports(&params.code)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }

    #[tool(description = "Get government contract spending by budget code. Returns supplier, executed amount, purpose and year for contracts from 2021 onwards with executed > 0.")]
    async fn get_contract(
        &self,
        peer: Peer<RoleServer>,
        Parameters(params): Parameters<SpendingParams>,
    ) -> Result<CallToolResult, ErrorData> {
        helpers::announce(&peer, messages::contracts(&params.code)).await;
        let body = self
            .client()
            .get_contract(&params.code)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }
}
