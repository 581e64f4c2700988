use obudget_core::{ClientError, SearchType};
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

use crate::{ObudgetMcp, helpers, messages};

/// Parameters for a free-text search.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchParams {
    /// The text to search for.
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// One of: entities, national-budget-changes, supports, tenders, contract-spending.
    #[serde(rename = "searchType", default = "default_search_type")]
    pub search_type: String,
}

fn default_search_type() -> String {
    SearchType::default().as_str().to_string()
}

#[tool_router(router = tool_router_search, vis = "pub")]
impl ObudgetMcp {
    #[tool(description = "Free-text search across the Israeli budget database. searchType selects the dataset: 'entities' (government entities), 'national-budget-changes' (budget modifications), 'supports' (grants and support payments), 'tenders' (government tenders) or 'contract-spending' (government contracts). Returns up to 20 results.")]
    async fn search(
        &self,
        peer: Peer<RoleServer>,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let search_type: SearchType = params
            .search_type
            .parse()
            .map_err(|err| helpers::map_err(ClientError::from(err)))?;
        helpers::announce(&peer, messages::search(&params.search_term, search_type)).await;
        let body = self
            .client()
            .search_in(&params.search_term, search_type)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(body)?]))
    }
}
