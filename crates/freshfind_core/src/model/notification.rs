//! Expiry notification model.
//!
//! # Invariants
//! - Notifications only exist for expiring or expired items.
//! - `id` is derived from `(item_id, kind)`, so regenerating the feed for the
//!   same item state yields the same id.

use crate::model::item::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Alert category. Fresh items never produce a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Expiring,
    Expired,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }
}

/// Deterministic notification identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId {
    pub item_id: ItemId,
    pub kind: NotificationKind,
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.item_id, self.kind.as_str())
    }
}

/// User-facing alert derived from one item's classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    /// Serialized as `type` to match the view schema.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Expiry date of the referenced item.
    pub date: NaiveDate,
}

impl Notification {
    pub fn item_id(&self) -> ItemId {
        self.id.item_id
    }
}
