//! Upstream request construction.
//!
//! Requests are plain values built before any I/O, so two calls with the
//! same arguments always produce the same path and parameters.

use crate::search::{SEARCH_PAGE_SIZE, SearchType};
use crate::templates;

/// Path of the SQL-style query endpoint, relative to the base URL.
pub const QUERY_PATH: &str = "api/query";
/// Path prefix of the free-text search endpoint.
pub const SEARCH_PATH: &str = "search";

/// A single GET against the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    /// Query endpoint request for a fully formatted query text.
    #[must_use]
    pub fn query(query: String) -> Self {
        Self {
            path: QUERY_PATH.to_string(),
            params: vec![("query", query), ("page", "0".to_string())],
        }
    }

    /// Free-text search request against one search category.
    #[must_use]
    pub fn search(term: &str, search_type: SearchType) -> Self {
        Self {
            path: format!("{SEARCH_PATH}/{search_type}"),
            params: vec![
                ("q", term.to_string()),
                ("size", SEARCH_PAGE_SIZE.to_string()),
                ("offset", "0".to_string()),
            ],
        }
    }

    #[must_use]
    pub fn supports(code: &str) -> Self {
        Self::query(templates::supports_query(code))
    }

    #[must_use]
    pub fn contracts(code: &str) -> Self {
        Self::query(templates::contracts_query(code))
    }

    #[must_use]
    pub fn budget() -> Self {
        Self::query(templates::BUDGET_QUERY.to_string())
    }

    #[must_use]
    pub fn parent_budget(parent: &str) -> Self {
        Self::query(templates::parent_budget_query(parent))
    }

    #[must_use]
    pub fn budget_history(code: &str) -> Self {
        Self::query(templates::budget_history_query(code))
    }

    /// Returns the value of the first parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}
