//! Search and status filtering for the item list.
//!
//! # Invariants
//! - Output preserves input order; nothing is re-sorted.
//! - The source slice is only borrowed, never mutated.
//! - No match yields an empty list, not an error.

use crate::engine::status::{classify, ExpiryPolicy, ItemStatus};
use crate::model::item::GroceryItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// List filter selected in the status dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Fresh,
    Expiring,
    Expired,
}

impl StatusFilter {
    /// Parses one of `all|fresh|expiring|expired`.
    pub fn parse(value: &str) -> Result<Self, StatusFilterError> {
        match value.trim() {
            "all" => Ok(Self::All),
            "fresh" => Ok(Self::Fresh),
            "expiring" => Ok(Self::Expiring),
            "expired" => Ok(Self::Expired),
            other => Err(StatusFilterError(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Fresh => "fresh",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }

    pub fn matches(self, status: ItemStatus) -> bool {
        match self {
            Self::All => true,
            Self::Fresh => status == ItemStatus::Fresh,
            Self::Expiring => status == ItemStatus::Expiring,
            Self::Expired => status == ItemStatus::Expired,
        }
    }
}

impl From<ItemStatus> for StatusFilter {
    fn from(value: ItemStatus) -> Self {
        match value {
            ItemStatus::Fresh => Self::Fresh,
            ItemStatus::Expiring => Self::Expiring,
            ItemStatus::Expired => Self::Expired,
        }
    }
}

/// Unknown status filter id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilterError(pub String);

impl Display for StatusFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported status filter `{}`; expected all|fresh|expiring|expired",
            self.0
        )
    }
}

impl Error for StatusFilterError {}

/// View parameters for the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Case-insensitive name substring; empty matches everything.
    pub search_text: String,
    pub status: StatusFilter,
}

impl ItemQuery {
    pub fn new(search_text: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search_text: search_text.into(),
            status,
        }
    }
}

/// Item paired with its status for one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedItem<'a> {
    pub item: &'a GroceryItem,
    pub status: ItemStatus,
}

/// Classifies every item in input order.
pub fn classified(
    items: &[GroceryItem],
    today: NaiveDate,
    policy: ExpiryPolicy,
) -> Vec<ClassifiedItem<'_>> {
    items
        .iter()
        .map(|item| ClassifiedItem {
            item,
            status: classify(item.expiry_date, today, policy),
        })
        .collect()
}

/// Returns items matching both the search text and the status filter.
pub fn query<'a>(
    items: &'a [GroceryItem],
    query: &ItemQuery,
    today: NaiveDate,
    policy: ExpiryPolicy,
) -> Vec<&'a GroceryItem> {
    items
        .iter()
        .filter(|item| item.name_contains(&query.search_text))
        .filter(|item| {
            query
                .status
                .matches(classify(item.expiry_date, today, policy))
        })
        .collect()
}
