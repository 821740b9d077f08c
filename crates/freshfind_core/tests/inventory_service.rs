use chrono::NaiveDate;
use freshfind_core::{
    ConfigError, InMemoryItemRepository, InventoryConfig, InventoryError, InventoryService,
    InventorySummary, ItemQuery, ItemStatus, ItemValidationError, NewGroceryItem,
    NotificationId, NotificationKind, PolicyError, StatusFilter,
};
use uuid::Uuid;

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
}

fn seeded_service() -> InventoryService<InMemoryItemRepository> {
    let mut service = InventoryService::new(InMemoryItemRepository::new());
    for (name, quantity, expiry) in [
        ("Milk", 1, "2025-04-10"),
        ("Bread", 1, "2025-04-08"),
        ("Eggs", 12, "2025-04-15"),
        ("Yogurt", 4, "2025-04-02"),
        ("Chicken", 1, "2025-04-06"),
    ] {
        service
            .add_item(&NewGroceryItem::new(name, quantity, expiry))
            .expect("seed item should be added");
    }
    service
}

#[test]
fn add_item_with_empty_name_is_rejected_without_mutation() {
    let mut service = seeded_service();
    let before = service.items().to_vec();

    let err = service
        .add_item(&NewGroceryItem::new("", 1, "2025-04-10"))
        .expect_err("empty name should be rejected");
    assert_eq!(err, InventoryError::InvalidInput(ItemValidationError::EmptyName));
    assert_eq!(service.items(), before.as_slice());
}

#[test]
fn add_item_rejects_bad_quantity_and_date() {
    let mut service = InventoryService::new(InMemoryItemRepository::new());

    let err = service
        .add_item(&NewGroceryItem::new("Milk", -2, "2025-04-10"))
        .expect_err("negative quantity should be rejected");
    assert_eq!(
        err,
        InventoryError::InvalidInput(ItemValidationError::NonPositiveQuantity(-2))
    );

    let err = service
        .add_item(&NewGroceryItem::new("Milk", 1, "tomorrow"))
        .expect_err("unparseable date should be rejected");
    assert!(matches!(
        err,
        InventoryError::InvalidInput(ItemValidationError::InvalidExpiryDate(_))
    ));
    assert!(service.items().is_empty());
}

#[test]
fn add_then_get_and_delete() {
    let mut service = InventoryService::new(InMemoryItemRepository::new());
    let added = service
        .add_item(&NewGroceryItem::new("Paneer", 2, "2025-04-12"))
        .expect("valid item should be added");
    assert_eq!(service.get_item(added.id), Some(&added));

    let removed = service
        .delete_item(added.id)
        .expect("existing item should be deleted");
    assert_eq!(removed, added);
    assert!(service.get_item(added.id).is_none());

    let err = service
        .delete_item(added.id)
        .expect_err("second delete should fail");
    assert_eq!(err, InventoryError::ItemNotFound(added.id));

    let ghost = Uuid::new_v4();
    assert_eq!(
        service
            .delete_item(ghost)
            .expect_err("unknown id should fail"),
        InventoryError::ItemNotFound(ghost)
    );
}

#[test]
fn dashboard_reports_counts_and_recent_additions() {
    let service = seeded_service();
    let dashboard = service.dashboard(date("2025-04-05"));

    assert_eq!(
        dashboard.summary,
        InventorySummary {
            total: 5,
            fresh: 3,
            expiring: 1,
            expired: 1,
        }
    );
    let recent = dashboard
        .recently_added
        .iter()
        .map(|entry| (entry.item.name.as_str(), entry.status))
        .collect::<Vec<_>>();
    assert_eq!(
        recent,
        vec![
            ("Chicken", ItemStatus::Expiring),
            ("Yogurt", ItemStatus::Expired),
            ("Eggs", ItemStatus::Fresh),
        ]
    );
}

#[test]
fn list_filters_and_reports_status() {
    let service = seeded_service();
    let listed = service.list(date("2025-04-05"), &ItemQuery::new("", StatusFilter::Fresh));
    let names = listed
        .iter()
        .map(|entry| entry.item.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Milk", "Bread", "Eggs"]);
    assert!(listed.iter().all(|entry| entry.status == ItemStatus::Fresh));
}

#[test]
fn dismissing_notifications_keeps_items_and_counts() {
    let mut service = seeded_service();
    let today = date("2025-04-05");
    let items_before = service.items().to_vec();
    let summary_before = service.dashboard(today).summary;

    let active = service.notifications(today);
    assert_eq!(active.len(), 2);
    assert!(service.dismiss_notification(active[0].id, today));
    assert_eq!(service.notifications(today).len(), 1);
    assert_eq!(service.dismiss_all_notifications(today), 1);
    assert!(service.notifications(today).is_empty());

    assert_eq!(service.items(), items_before.as_slice());
    assert_eq!(service.dashboard(today).summary, summary_before);
}

#[test]
fn deleting_an_item_drops_its_notification() {
    let mut service = seeded_service();
    let today = date("2025-04-05");
    let yogurt = service
        .items()
        .iter()
        .find(|item| item.name == "Yogurt")
        .map(|item| item.id)
        .expect("yogurt should be seeded");

    service
        .delete_item(yogurt)
        .expect("yogurt should be deleted");
    let feed = service.notifications(today);
    assert!(feed.iter().all(|notification| notification.item_id() != yogurt));
    assert_eq!(service.dashboard(today).summary.expired, 0);
}

#[test]
fn config_threshold_and_recent_limit_apply() {
    let config = InventoryConfig {
        expiry_threshold_days: 7,
        recent_items_limit: 1,
        ..InventoryConfig::default()
    };
    let mut service =
        InventoryService::with_config(InMemoryItemRepository::new(), &config).expect("valid config");
    service
        .add_item(&NewGroceryItem::new("Milk", 1, "2025-04-10"))
        .expect("milk should be added");
    service
        .add_item(&NewGroceryItem::new("Rice", 1, "2025-06-01"))
        .expect("rice should be added");

    let dashboard = service.dashboard(date("2025-04-05"));
    assert_eq!(dashboard.summary.expiring, 1);
    assert_eq!(dashboard.summary.fresh, 1);
    assert_eq!(dashboard.recently_added.len(), 1);
    assert_eq!(dashboard.recently_added[0].item.name, "Rice");
}

#[test]
fn config_with_zero_threshold_is_rejected() {
    let config = InventoryConfig {
        expiry_threshold_days: 0,
        ..InventoryConfig::default()
    };
    let err = InventoryService::with_config(InMemoryItemRepository::new(), &config)
        .err()
        .expect("zero threshold should be rejected");
    assert_eq!(err, ConfigError::Policy(PolicyError::ZeroThreshold));
}

#[test]
fn add_item_keeps_free_text_barcode() {
    let mut service = InventoryService::new(InMemoryItemRepository::new());
    let added = service
        .add_item(&NewGroceryItem::new("Milk", 1, "2025-04-10").with_barcode("ABC-123"))
        .expect("free-text barcode should not reject the add");

    assert_eq!(service.items().len(), 1);
    assert_eq!(
        added.barcode.as_ref().map(|code| code.as_str()),
        Some("ABC-123")
    );
}

#[test]
fn dismissing_before_a_notification_exists_does_not_suppress_it() {
    let mut service = seeded_service();
    let eggs = service
        .items()
        .iter()
        .find(|item| item.name == "Eggs")
        .map(|item| item.id)
        .expect("eggs should be seeded");
    let eggs_expiring = NotificationId {
        item_id: eggs,
        kind: NotificationKind::Expiring,
    };

    assert!(!service.dismiss_notification(eggs_expiring, date("2025-04-05")));

    let later = service.notifications(date("2025-04-14"));
    assert_eq!(
        later
            .iter()
            .filter(|notification| notification.item_id() == eggs)
            .count(),
        1
    );
}
