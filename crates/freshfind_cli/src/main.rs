//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `freshfind_core` linkage with a seeded sample pantry.
//! - Print the dashboard, list and notification views for one date.
//!
//! Usage: `freshfind_cli [YYYY-MM-DD] [search text] [all|fresh|expiring|expired]`

use chrono::{Local, NaiveDate};
use freshfind_core::{
    default_log_level, init_logging, submit_add_item, DelayQueue, InMemoryItemRepository,
    InventoryConfig, InventoryService, ItemQuery, NewGroceryItem, StatusFilter, TimerScope,
};
use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

const LOG_DIR_ENV: &str = "FRESHFIND_LOG_DIR";

const SAMPLE_PANTRY: &[(&str, i64, &str)] = &[
    ("Milk", 1, "2025-04-10"),
    ("Bread", 1, "2025-04-08"),
    ("Eggs", 12, "2025-04-15"),
    ("Yogurt", 4, "2025-04-02"),
    ("Chicken", 1, "2025-04-06"),
];

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("freshfind_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        init_logging(default_log_level(), &PathBuf::from(dir)).map_err(|err| err.to_string())?;
    }

    let mut args = std::env::args().skip(1);
    let today = match args.next() {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|err| format!("invalid date `{raw}`: {err}"))?,
        None => Local::now().date_naive(),
    };
    let search_text = args.next().unwrap_or_default();
    let status = match args.next() {
        Some(raw) => StatusFilter::parse(&raw).map_err(|err| err.to_string())?,
        None => StatusFilter::All,
    };

    let config = InventoryConfig::from_env().map_err(|err| err.to_string())?;
    let mut service = InventoryService::with_config(InMemoryItemRepository::new(), &config)
        .map_err(|err| err.to_string())?;
    for (name, quantity, expiry) in SAMPLE_PANTRY {
        service
            .add_item(&NewGroceryItem::new(*name, *quantity, *expiry))
            .map_err(|err| err.to_string())?;
    }

    let landed = Rc::new(RefCell::new(Vec::new()));
    let mut queue = DelayQueue::new();
    let mut scope = TimerScope::new();
    let sink = Rc::clone(&landed);
    submit_add_item(
        &mut queue,
        &mut scope,
        config.add_item_delay(),
        &NewGroceryItem::new("Spinach", 2, "2025-04-09"),
        move |item| sink.borrow_mut().push(item),
    )
    .map_err(|err| err.to_string())?;
    queue.advance(config.add_item_delay());
    for item in landed.borrow_mut().drain(..) {
        service.insert_item(item).map_err(|err| err.to_string())?;
    }

    let dashboard = service.dashboard(today);
    println!("freshfind_core version={}", freshfind_core::core_version());
    println!("today={today}");
    println!(
        "summary total={} fresh={} expiring={} expired={}",
        dashboard.summary.total,
        dashboard.summary.fresh,
        dashboard.summary.expiring,
        dashboard.summary.expired
    );
    for entry in &dashboard.recently_added {
        println!("recent {} {} {}", entry.item.name, entry.item.expiry_date, entry.status);
    }

    let params = ItemQuery::new(search_text, status);
    for entry in service.list(today, &params) {
        println!(
            "item {} x{} {} {}",
            entry.item.name, entry.item.quantity, entry.item.expiry_date, entry.status
        );
    }

    for notification in service.notifications(today) {
        println!(
            "notice [{}] {}: {}",
            notification.kind.as_str(),
            notification.title,
            notification.message
        );
    }

    Ok(())
}
