//! Simulated add-form interactions.
//!
//! Both flows stand in for network work that does not exist: they wait on a
//! [`DelayQueue`] timer and then hand their result to a completion callback.

use crate::model::item::{Barcode, GroceryItem, ItemValidationError, NewGroceryItem};
use crate::task::delay::{DelayQueue, TimerId, TimerScope};
use log::{debug, warn};
use std::time::Duration;

/// Delay between pressing "Add Grocery" and the item landing.
pub const ADD_ITEM_SUBMIT_DELAY: Duration = Duration::from_millis(800);
/// Delay of the mock barcode scanner.
pub const BARCODE_SCAN_DELAY: Duration = Duration::from_millis(1500);

/// Validates `draft` now and delivers the item after `delay`.
///
/// Invalid drafts are rejected immediately and schedule nothing.
pub fn submit_add_item<F>(
    queue: &mut DelayQueue,
    scope: &mut TimerScope,
    delay: Duration,
    draft: &NewGroceryItem,
    on_complete: F,
) -> Result<TimerId, ItemValidationError>
where
    F: FnOnce(GroceryItem) + 'static,
{
    let item = GroceryItem::new(draft).map_err(|err| {
        warn!(
            "event=add_submit module=task status=rejected reason={}",
            err.code()
        );
        err
    })?;
    debug!("event=add_submit module=task status=pending item_id={}", item.id);

    let id = queue.schedule(delay, move || on_complete(item));
    scope.track(queue, id);
    Ok(id)
}

/// Delivers a mock barcode read after `delay`.
pub fn simulate_barcode_scan<F>(
    queue: &mut DelayQueue,
    scope: &mut TimerScope,
    delay: Duration,
    on_complete: F,
) -> TimerId
where
    F: FnOnce(Barcode) + 'static,
{
    let id = queue.schedule(delay, move || on_complete(Barcode::mock_scan()));
    scope.track(queue, id);
    id
}
