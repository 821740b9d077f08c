//! Item repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Hold the session-scoped item collection owned by the hosting app.
//! - Keep insertion order, which the list and "recently added" views use.
//!
//! # Invariants
//! - Write paths call `GroceryItem::validate()` before mutating.
//! - A failed write leaves the collection untouched.

use crate::model::item::{GroceryItem, ItemId, ItemValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for item storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ItemValidationError),
    Duplicate(ItemId),
    NotFound(ItemId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Duplicate(id) => write!(f, "item already exists: {id}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Duplicate(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the tracked item collection.
pub trait ItemRepository {
    fn insert_item(&mut self, item: GroceryItem) -> RepoResult<ItemId>;
    fn get_item(&self, id: ItemId) -> Option<&GroceryItem>;
    /// All items in insertion order.
    fn list_items(&self) -> &[GroceryItem];
    fn delete_item(&mut self, id: ItemId) -> RepoResult<GroceryItem>;

    /// Latest additions, newest first.
    fn recent_items(&self, limit: usize) -> Vec<&GroceryItem> {
        self.list_items().iter().rev().take(limit).collect()
    }
}

/// Insertion-ordered, session-lifetime item store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Vec<GroceryItem>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, rejecting the whole batch on the first bad item.
    pub fn with_items(items: Vec<GroceryItem>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for item in items {
            repo.insert_item(item)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn insert_item(&mut self, item: GroceryItem) -> RepoResult<ItemId> {
        item.validate()?;
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(RepoError::Duplicate(item.id));
        }
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    fn get_item(&self, id: ItemId) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn list_items(&self) -> &[GroceryItem] {
        &self.items
    }

    fn delete_item(&mut self, id: ItemId) -> RepoResult<GroceryItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }
}
