//! Core domain logic for Fresh Find Grocer.
//! This crate is the single source of truth for inventory invariants.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod task;

pub use config::{ConfigError, InventoryConfig};
pub use engine::notify::{notification_for, notifications_for, NotificationCenter};
pub use engine::query::{
    classified, query, ClassifiedItem, ItemQuery, StatusFilter, StatusFilterError,
};
pub use engine::status::{
    classify, days_until, ExpiryPolicy, ItemStatus, PolicyError, DEFAULT_THRESHOLD_DAYS,
};
pub use engine::summary::{aggregate, InventorySummary};
pub use engine::ExpiryClassifier;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Barcode, GroceryItem, ItemId, ItemValidationError, NewGroceryItem};
pub use model::notification::{Notification, NotificationId, NotificationKind};
pub use repo::item_repo::{InMemoryItemRepository, ItemRepository, RepoError, RepoResult};
pub use service::inventory_service::{
    DashboardSnapshot, InventoryError, InventoryResult, InventoryService,
};
pub use task::delay::{DelayQueue, TimerId, TimerScope};
pub use task::flows::{
    simulate_barcode_scan, submit_add_item, ADD_ITEM_SUBMIT_DELAY, BARCODE_SCAN_DELAY,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
