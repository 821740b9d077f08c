//! Inventory classification and query engine.
//!
//! # Responsibility
//! - Derive per-item status, dashboard counts, filtered list views and the
//!   notification feed from a borrowed item slice.
//!
//! # Invariants
//! - Every function is pure over its inputs; none mutates the items.
//! - One classification pass uses exactly one `today`.

pub mod notify;
pub mod query;
pub mod status;
pub mod summary;

use crate::engine::query::{ClassifiedItem, ItemQuery};
use crate::engine::status::{ExpiryPolicy, ItemStatus};
use crate::engine::summary::InventorySummary;
use crate::model::item::GroceryItem;
use crate::model::notification::Notification;
use chrono::NaiveDate;

/// Binds `today` and the expiry policy for a consistent classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryClassifier {
    today: NaiveDate,
    policy: ExpiryPolicy,
}

impl ExpiryClassifier {
    pub fn new(today: NaiveDate, policy: ExpiryPolicy) -> Self {
        Self { today, policy }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    pub fn status(&self, item: &GroceryItem) -> ItemStatus {
        status::classify(item.expiry_date, self.today, self.policy)
    }

    pub fn summary(&self, items: &[GroceryItem]) -> InventorySummary {
        summary::aggregate(items, self.today, self.policy)
    }

    pub fn query<'a>(&self, items: &'a [GroceryItem], params: &ItemQuery) -> Vec<&'a GroceryItem> {
        query::query(items, params, self.today, self.policy)
    }

    pub fn classified<'a>(&self, items: &'a [GroceryItem]) -> Vec<ClassifiedItem<'a>> {
        query::classified(items, self.today, self.policy)
    }

    pub fn notifications(&self, items: &[GroceryItem]) -> Vec<Notification> {
        notify::notifications_for(items, self.today, self.policy)
    }
}
