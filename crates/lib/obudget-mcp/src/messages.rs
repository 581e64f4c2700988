//! Advisory messages sent to the host before each upstream request.

use obudget_core::SearchType;

pub fn supports(code: &str) -> String {
    format!("Searching for supports for code {code}...")
}

pub fn contracts(code: &str) -> String {
    format!("Searching for contracts for code {code}...")
}

pub fn budget() -> String {
    "Searching for available budget codes...".to_string()
}

pub fn parent_budget(parent: &str) -> String {
    format!("Searching budget for parent: {parent}...")
}

pub fn budget_history(code: &str) -> String {
    format!("Searching history for code: {code}...")
}

pub fn search(term: &str, search_type: SearchType) -> String {
    format!("Searching '{search_type}' for: {term}...")
}
