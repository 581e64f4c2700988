use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of results requested per search page.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// Search categories exposed by the upstream `search/{type}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchType {
    Entities,
    NationalBudgetChanges,
    #[default]
    Supports,
    Tenders,
    ContractSpending,
}

impl SearchType {
    pub const ALL: [Self; 5] = [
        Self::Entities,
        Self::NationalBudgetChanges,
        Self::Supports,
        Self::Tenders,
        Self::ContractSpending,
    ];

    /// Path segment used by the upstream service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::NationalBudgetChanges => "national-budget-changes",
            Self::Supports => "supports",
            Self::Tenders => "tenders",
            Self::ContractSpending => "contract-spending",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Entities => "government entities",
            Self::NationalBudgetChanges => "budget modifications",
            Self::Supports => "government grants and support payments",
            Self::Tenders => "government tenders",
            Self::ContractSpending => "government contracts",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSearchType(pub String);

impl fmt::Display for UnknownSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accepted = SearchType::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "unknown search type '{}' (expected one of: {accepted})", self.0)
    }
}

impl Error for UnknownSearchType {}

impl FromStr for SearchType {
    type Err = UnknownSearchType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownSearchType(value.to_string()))
    }
}
