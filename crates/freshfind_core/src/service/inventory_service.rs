//! Inventory use-case service.
//!
//! # Responsibility
//! - Own the session item collection on behalf of the hosting app.
//! - Provide add/delete entry points and the dashboard, list and
//!   notification views derived through the engine.
//!
//! # Invariants
//! - `add_item` is all-or-nothing: a rejected draft never touches storage.
//! - Every view call classifies with the `today` passed by the caller.
//! - Notification dismissal never mutates items.

use crate::config::{ConfigError, InventoryConfig};
use crate::engine::notify::NotificationCenter;
use crate::engine::query::{ClassifiedItem, ItemQuery};
use crate::engine::status::ExpiryPolicy;
use crate::engine::summary::InventorySummary;
use crate::engine::ExpiryClassifier;
use crate::model::item::{GroceryItem, ItemId, ItemValidationError, NewGroceryItem};
use crate::model::notification::{Notification, NotificationId};
use crate::repo::item_repo::{ItemRepository, RepoError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Service error for inventory use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Add-form input failed validation; nothing was stored.
    InvalidInput(ItemValidationError),
    /// Target item does not exist.
    ItemNotFound(ItemId),
    /// Storage-level failure.
    Repo(RepoError),
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InventoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::ItemNotFound(_) => None,
        }
    }
}

impl From<ItemValidationError> for InventoryError {
    fn from(value: ItemValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<RepoError> for InventoryError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidInput(err),
            RepoError::NotFound(id) => Self::ItemNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Dashboard view: counts plus the latest additions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot<'a> {
    pub summary: InventorySummary,
    /// Newest first.
    pub recently_added: Vec<ClassifiedItem<'a>>,
}

/// Inventory service facade over a repository implementation.
pub struct InventoryService<R: ItemRepository> {
    repo: R,
    notifications: NotificationCenter,
    policy: ExpiryPolicy,
    recent_items_limit: usize,
}

impl<R: ItemRepository> InventoryService<R> {
    /// Creates a service with default configuration.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            notifications: NotificationCenter::new(),
            policy: ExpiryPolicy::default(),
            recent_items_limit: InventoryConfig::default().recent_items_limit,
        }
    }

    /// Creates a service using validated configuration.
    pub fn with_config(repo: R, config: &InventoryConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            repo,
            notifications: NotificationCenter::new(),
            policy: config.policy()?,
            recent_items_limit: config.recent_items_limit,
        })
    }

    pub fn policy(&self) -> ExpiryPolicy {
        self.policy
    }

    /// Validates add-form input and stores the new item.
    pub fn add_item(&mut self, draft: &NewGroceryItem) -> InventoryResult<GroceryItem> {
        let item = match GroceryItem::new(draft) {
            Ok(item) => item,
            Err(err) => {
                warn!(
                    "event=item_add module=inventory status=rejected reason={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        self.insert_item(item.clone())?;
        Ok(item)
    }

    /// Stores an item that was validated earlier, e.g. by a delayed submit.
    pub fn insert_item(&mut self, item: GroceryItem) -> InventoryResult<ItemId> {
        let item_id = self.repo.insert_item(item).map_err(|err| {
            warn!(
                "event=item_insert module=inventory status=error reason={}",
                repo_error_code(&err)
            );
            InventoryError::from(err)
        })?;
        info!("event=item_insert module=inventory status=ok item_id={item_id}");
        Ok(item_id)
    }

    /// Removes an item and forgets its notification dismissals.
    pub fn delete_item(&mut self, item_id: ItemId) -> InventoryResult<GroceryItem> {
        let removed = self.repo.delete_item(item_id)?;
        self.notifications.forget_item(item_id);
        info!("event=item_delete module=inventory status=ok item_id={item_id}");
        Ok(removed)
    }

    pub fn get_item(&self, item_id: ItemId) -> Option<&GroceryItem> {
        self.repo.get_item(item_id)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[GroceryItem] {
        self.repo.list_items()
    }

    /// Classifier bound to `today` and this service's policy.
    pub fn classifier(&self, today: NaiveDate) -> ExpiryClassifier {
        ExpiryClassifier::new(today, self.policy)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSnapshot<'_> {
        let classifier = self.classifier(today);
        let recently_added = self
            .repo
            .recent_items(self.recent_items_limit)
            .into_iter()
            .map(|item| ClassifiedItem {
                item,
                status: classifier.status(item),
            })
            .collect();

        DashboardSnapshot {
            summary: classifier.summary(self.items()),
            recently_added,
        }
    }

    /// Filtered list view with derived status, in insertion order.
    pub fn list(&self, today: NaiveDate, params: &ItemQuery) -> Vec<ClassifiedItem<'_>> {
        let classifier = self.classifier(today);
        classifier
            .query(self.items(), params)
            .into_iter()
            .map(|item| ClassifiedItem {
                item,
                status: classifier.status(item),
            })
            .collect()
    }

    /// Active (not dismissed) notifications.
    pub fn notifications(&self, today: NaiveDate) -> Vec<Notification> {
        self.notifications.active(self.items(), today, self.policy)
    }

    /// Dismisses `id` if it is in the active set for `today`.
    pub fn dismiss_notification(&mut self, id: NotificationId, today: NaiveDate) -> bool {
        self.notifications
            .dismiss(id, self.repo.list_items(), today, self.policy)
    }

    /// Clears the active notification set in one call.
    pub fn dismiss_all_notifications(&mut self, today: NaiveDate) -> usize {
        self.notifications
            .dismiss_all(self.repo.list_items(), today, self.policy)
    }
}

fn repo_error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(inner) => inner.code(),
        RepoError::Duplicate(_) => "duplicate",
        RepoError::NotFound(_) => "not_found",
    }
}
