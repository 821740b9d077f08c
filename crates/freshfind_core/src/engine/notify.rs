//! Expiry notification feed and dismissal tracking.
//!
//! # Responsibility
//! - Derive one notification per expiring or expired item.
//! - Track which notifications the user dismissed.
//!
//! # Invariants
//! - Fresh items never produce a notification.
//! - Dismissal only touches the dismissed-id set; items and their
//!   classification are never modified.

use crate::engine::status::{classify, days_until, ExpiryPolicy, ItemStatus};
use crate::model::item::{GroceryItem, ItemId};
use crate::model::notification::{Notification, NotificationId, NotificationKind};
use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;

/// Builds the notification feed in item order.
pub fn notifications_for(
    items: &[GroceryItem],
    today: NaiveDate,
    policy: ExpiryPolicy,
) -> Vec<Notification> {
    items
        .iter()
        .filter_map(|item| notification_for(item, today, policy))
        .collect()
}

/// Returns the notification for one item, or `None` when it is fresh.
pub fn notification_for(
    item: &GroceryItem,
    today: NaiveDate,
    policy: ExpiryPolicy,
) -> Option<Notification> {
    let kind = match classify(item.expiry_date, today, policy) {
        ItemStatus::Fresh => return None,
        ItemStatus::Expiring => NotificationKind::Expiring,
        ItemStatus::Expired => NotificationKind::Expired,
    };
    let days = days_until(item.expiry_date, today);

    Some(Notification {
        id: NotificationId {
            item_id: item.id,
            kind,
        },
        title: notification_title(&item.name, kind),
        message: notification_message(&item.name, kind, days),
        kind,
        date: item.expiry_date,
    })
}

fn notification_title(name: &str, kind: NotificationKind) -> String {
    match kind {
        NotificationKind::Expiring => format!("{name} expiring soon"),
        NotificationKind::Expired => format!("{name} expired"),
    }
}

fn notification_message(name: &str, kind: NotificationKind, days: i64) -> String {
    let name = name.to_lowercase();
    match kind {
        NotificationKind::Expiring => match days {
            0 => format!("Your {name} expires today."),
            1 => format!("Your {name} will expire tomorrow."),
            n => format!("Your {name} will expire in {n} days."),
        },
        NotificationKind::Expired => match -days {
            1 => format!("Your {name} expired yesterday."),
            n => format!("Your {name} expired {n} days ago."),
        },
    }
}

/// Active-set bookkeeping for the notifications view.
///
/// The feed itself is always regenerated from items; the center only
/// remembers which ids were dismissed.
#[derive(Debug, Default, Clone)]
pub struct NotificationCenter {
    dismissed: HashSet<NotificationId>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated feed minus dismissed notifications.
    pub fn active(
        &self,
        items: &[GroceryItem],
        today: NaiveDate,
        policy: ExpiryPolicy,
    ) -> Vec<Notification> {
        notifications_for(items, today, policy)
            .into_iter()
            .filter(|notification| !self.dismissed.contains(&notification.id))
            .collect()
    }

    /// Dismisses one notification of the current active set.
    ///
    /// Returns `false` when `id` is not active for `today`, either because
    /// it was already dismissed or because it has not been generated.
    pub fn dismiss(
        &mut self,
        id: NotificationId,
        items: &[GroceryItem],
        today: NaiveDate,
        policy: ExpiryPolicy,
    ) -> bool {
        let is_active = self
            .active(items, today, policy)
            .iter()
            .any(|notification| notification.id == id);
        if is_active {
            self.dismissed.insert(id);
        }
        debug!(
            "event=notification_dismiss module=notify status={} kind={}",
            if is_active { "ok" } else { "noop" },
            id.kind.as_str()
        );
        is_active
    }

    /// Dismisses every currently active notification in one call.
    ///
    /// Returns the number of notifications cleared.
    pub fn dismiss_all(
        &mut self,
        items: &[GroceryItem],
        today: NaiveDate,
        policy: ExpiryPolicy,
    ) -> usize {
        let active = self.active(items, today, policy);
        let cleared = active.len();
        self.dismissed
            .extend(active.into_iter().map(|notification| notification.id));
        debug!("event=notification_dismiss_all module=notify status=ok cleared={cleared}");
        cleared
    }

    pub fn is_dismissed(&self, id: NotificationId) -> bool {
        self.dismissed.contains(&id)
    }

    /// Drops dismissals that reference a removed item.
    pub fn forget_item(&mut self, item_id: ItemId) {
        self.dismissed.retain(|id| id.item_id != item_id);
    }
}
