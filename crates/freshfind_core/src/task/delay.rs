//! Deterministic cancellable timers for simulated UI delays.
//!
//! # Responsibility
//! - Model "wait, then complete" interactions without a real clock.
//! - Let a view cancel its pending work when it is torn down.
//!
//! # Invariants
//! - Each callback fires at most once.
//! - A cancelled timer never fires.
//! - Due timers fire in `(due time, schedule order)` order.

use log::debug;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// Handle for one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

struct PendingTimer {
    id: TimerId,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Single-threaded timer queue driven by an explicit virtual clock.
///
/// Time only moves through [`DelayQueue::advance`], which keeps replays
/// deterministic in tests and lets hosts plug in any real ticker.
#[derive(Default)]
pub struct DelayQueue {
    elapsed: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl Debug for DelayQueue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelayQueue")
            .field("elapsed", &self.elapsed)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl DelayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time advanced so far.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    /// Schedules `callback` to run once `delay` of virtual time has passed.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce() + 'static,
    {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            due: self.elapsed.saturating_add(delay),
            callback: Box::new(callback),
        });
        debug!(
            "event=timer_schedule module=task status=ok timer={} delay_ms={}",
            id.0,
            delay.as_millis()
        );
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            debug!("event=timer_cancel module=task status=ok timer={}", id.0);
        }
        cancelled
    }

    /// Moves virtual time forward and fires every timer that became due.
    ///
    /// Returns the number of callbacks invoked.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.elapsed = self.elapsed.saturating_add(by);
        let now = self.elapsed;

        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.due <= now);
        self.pending = waiting;
        due.sort_by_key(|timer| (timer.due, timer.id));

        let fired = due.len();
        for timer in due {
            debug!("event=timer_fire module=task status=ok timer={}", timer.id.0);
            (timer.callback)();
        }
        fired
    }
}

/// Timers owned by one view; cancelled together on teardown.
#[derive(Debug, Default)]
pub struct TimerScope {
    timers: Vec<TimerId>,
}

impl TimerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the scope and drops ids of timers that already fired.
    pub fn track(&mut self, queue: &DelayQueue, id: TimerId) {
        self.timers.retain(|tracked| queue.is_pending(*tracked));
        if queue.is_pending(id) {
            self.timers.push(id);
        }
    }

    /// Number of tracked timers, including any that fired since the last `track`.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Cancels every timer of this scope that has not fired yet.
    ///
    /// Returns how many were cancelled.
    pub fn teardown(self, queue: &mut DelayQueue) -> usize {
        self.timers
            .into_iter()
            .filter(|id| queue.cancel(*id))
            .count()
    }
}
