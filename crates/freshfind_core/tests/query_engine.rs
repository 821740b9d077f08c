use chrono::NaiveDate;
use freshfind_core::{
    classified, query, ExpiryPolicy, GroceryItem, ItemQuery, ItemStatus, NewGroceryItem,
    StatusFilter,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 5).expect("valid test date")
}

fn pantry() -> Vec<GroceryItem> {
    [
        ("Milk", 1, "2025-04-10"),
        ("Bread", 1, "2025-04-06"),
        ("Eggs", 12, "2025-04-15"),
        ("Yogurt", 4, "2025-04-02"),
        ("Chicken", 1, "2025-04-05"),
        ("Almond Milk", 2, "2025-04-01"),
    ]
    .into_iter()
    .map(|(name, quantity, expiry)| {
        GroceryItem::new(&NewGroceryItem::new(name, quantity, expiry)).expect("valid test item")
    })
    .collect()
}

fn names(hits: &[&GroceryItem]) -> Vec<String> {
    hits.iter().map(|item| item.name.clone()).collect()
}

#[test]
fn empty_search_with_all_filter_is_identity() {
    let items = pantry();
    let hits = query(&items, &ItemQuery::default(), today(), ExpiryPolicy::default());
    assert_eq!(hits.len(), items.len());
    assert!(hits.iter().zip(items.iter()).all(|(hit, item)| *hit == item));
}

#[test]
fn search_is_case_insensitive_substring() {
    let items = pantry();
    let hits = query(
        &items,
        &ItemQuery::new("MiLk", StatusFilter::All),
        today(),
        ExpiryPolicy::default(),
    );
    assert_eq!(names(&hits), vec!["Milk", "Almond Milk"]);
}

#[test]
fn search_and_status_are_combined_with_and() {
    let items = pantry();
    let hits = query(
        &items,
        &ItemQuery::new("milk", StatusFilter::Expired),
        today(),
        ExpiryPolicy::default(),
    );
    assert_eq!(names(&hits), vec!["Almond Milk"]);
}

#[test]
fn status_filter_preserves_input_order() {
    let items = pantry();
    let expiring = query(
        &items,
        &ItemQuery::new("", StatusFilter::Expiring),
        today(),
        ExpiryPolicy::default(),
    );
    assert_eq!(names(&expiring), vec!["Bread", "Chicken"]);

    let expired = query(
        &items,
        &ItemQuery::new("", StatusFilter::Expired),
        today(),
        ExpiryPolicy::default(),
    );
    assert_eq!(names(&expired), vec!["Yogurt", "Almond Milk"]);
}

#[test]
fn no_match_yields_empty_list() {
    let items = pantry();
    let hits = query(
        &items,
        &ItemQuery::new("paneer", StatusFilter::All),
        today(),
        ExpiryPolicy::default(),
    );
    assert!(hits.is_empty());
}

#[test]
fn query_is_idempotent_for_every_filter() {
    let items = pantry();
    let policy = ExpiryPolicy::default();
    for filter in [
        StatusFilter::All,
        StatusFilter::Fresh,
        StatusFilter::Expiring,
        StatusFilter::Expired,
    ] {
        for text in ["", "m", "MILK", "e", "zzz"] {
            let params = ItemQuery::new(text, filter);
            let first = query(&items, &params, today(), policy);
            let owned = first.iter().map(|item| (*item).clone()).collect::<Vec<_>>();
            let second = query(&owned, &params, today(), policy);
            assert_eq!(names(&first), names(&second));
        }
    }
}

#[test]
fn query_leaves_source_untouched() {
    let items = pantry();
    let snapshot = items.clone();
    let _ = query(
        &items,
        &ItemQuery::new("bread", StatusFilter::Fresh),
        today(),
        ExpiryPolicy::default(),
    );
    assert_eq!(items, snapshot);
}

#[test]
fn classified_pairs_each_item_with_status() {
    let items = pantry();
    let statuses = classified(&items, today(), ExpiryPolicy::default())
        .into_iter()
        .map(|entry| entry.status)
        .collect::<Vec<_>>();
    assert_eq!(
        statuses,
        vec![
            ItemStatus::Fresh,
            ItemStatus::Expiring,
            ItemStatus::Fresh,
            ItemStatus::Expired,
            ItemStatus::Expiring,
            ItemStatus::Expired,
        ]
    );
}

#[test]
fn status_filter_serializes_as_lowercase_id() {
    let params = ItemQuery::new("milk", StatusFilter::Expiring);
    let json = serde_json::to_value(&params).expect("query should serialize");
    assert_eq!(json["status"], "expiring");
    assert_eq!(json["search_text"], "milk");
}
