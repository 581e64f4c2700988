//! Fixed query templates sent to the upstream `api/query` endpoint.
//!
//! Codes are interpolated verbatim: no escaping and no numeric parsing, so
//! leading zeros survive (`"0015"` stays `0015`). The `%%` suffix and the
//! surrounding whitespace are part of the text the upstream service expects.

/// Default budget code used when a caller omits one.
pub const DEFAULT_CODE: &str = "00";

/// Top-level budget rows for the current budget year.
pub const BUDGET_QUERY: &str = "SELECT parent, code, title, net_allocated, net_revised, net_executed FROM budget WHERE YEAR=2025 and depth < 3";

const PARENT_BUDGET_QUERY: &str = "SELECT parent, code, title, net_allocated, net_revised, net_executed FROM budget WHERE YEAR=2025 AND parent LIKE '{code}%%' ";
const BUDGET_HISTORY_QUERY: &str = "SELECT history FROM budget WHERE YEAR=2025 AND code = '{code}'";
const CONTRACTS_QUERY: &str = " SELECT budget_code, min_year, coalesce(entity_name, supplier_name->>0) AS supplier,executed, purpose FROM contract_spending WHERE budget_code LIKE '{code}%%' AND executed > 0 AND min_year > 2020";
const SUPPORTS_QUERY: &str = " SELECT budget_code, year_paid, coalesce(entity_name, recipient) AS supplier,amount_paid, support_title FROM supports_by_payment_year WHERE budget_code LIKE '{code}%%' AND amount_paid > 0 AND year_paid > 2020";

const SLOT: &str = "{code}";

fn fill(template: &str, code: &str) -> String {
    template.replacen(SLOT, code, 1)
}

/// Support and grant payments under a budget code prefix.
#[must_use]
pub fn supports_query(code: &str) -> String {
    fill(SUPPORTS_QUERY, code)
}

/// Contract spending under a budget code prefix.
#[must_use]
pub fn contracts_query(code: &str) -> String {
    fill(CONTRACTS_QUERY, code)
}

/// Budget lines whose parent starts with `parent`.
#[must_use]
pub fn parent_budget_query(parent: &str) -> String {
    fill(PARENT_BUDGET_QUERY, parent)
}

/// History series for one exact budget code.
#[must_use]
pub fn budget_history_query(code: &str) -> String {
    fill(BUDGET_HISTORY_QUERY, code)
}
