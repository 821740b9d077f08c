//! Dashboard aggregation over classified items.

use crate::engine::status::{classify, ExpiryPolicy, ItemStatus};
use crate::model::item::GroceryItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-status counts for one classification pass.
///
/// `fresh + expiring + expired == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub fresh: usize,
    pub expiring: usize,
    pub expired: usize,
}

impl InventorySummary {
    pub fn count(&self, status: ItemStatus) -> usize {
        match status {
            ItemStatus::Fresh => self.fresh,
            ItemStatus::Expiring => self.expiring,
            ItemStatus::Expired => self.expired,
        }
    }

    fn record(&mut self, status: ItemStatus) {
        self.total += 1;
        match status {
            ItemStatus::Fresh => self.fresh += 1,
            ItemStatus::Expiring => self.expiring += 1,
            ItemStatus::Expired => self.expired += 1,
        }
    }
}

/// Counts items per status using one `today` for the whole pass.
pub fn aggregate(items: &[GroceryItem], today: NaiveDate, policy: ExpiryPolicy) -> InventorySummary {
    items
        .iter()
        .fold(InventorySummary::default(), |mut summary, item| {
            summary.record(classify(item.expiry_date, today, policy));
            summary
        })
}
