//! MCP tool modules.
//!
//! Tools are grouped by upstream dataset: budget lines, spending (supports
//! and contracts), free-text search, and contextual help.

pub mod budget;
pub mod search;
pub mod spending;
mod context;

use obudget_core::templates::DEFAULT_CODE;

fn default_code() -> String {
    DEFAULT_CODE.to_string()
}
