//! Freshness classification.
//!
//! # Responsibility
//! - Derive an item's status from its expiry date and an injected `today`.
//!
//! # Invariants
//! - Classification is a pure function of `(expiry_date, today, threshold)`.
//! - `expiry_date == today` is always `Expiring`.
//! - No clock reads happen here; callers pass `today`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of days before expiry at which an item becomes expiring.
pub const DEFAULT_THRESHOLD_DAYS: u32 = 3;

/// Derived freshness state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Fresh,
    Expiring,
    Expired,
}

impl ItemStatus {
    /// Stable string id shared with filter and view code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected expiry policy settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A zero threshold would classify same-day items as fresh.
    ZeroThreshold,
}

impl Display for PolicyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroThreshold => write!(f, "expiry threshold must be at least 1 day"),
        }
    }
}

impl Error for PolicyError {}

/// Sensitivity setting for the expiring window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    threshold_days: u32,
}

impl ExpiryPolicy {
    pub fn new(threshold_days: u32) -> Result<Self, PolicyError> {
        if threshold_days == 0 {
            return Err(PolicyError::ZeroThreshold);
        }
        Ok(Self { threshold_days })
    }

    pub fn threshold_days(self) -> u32 {
        self.threshold_days
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_THRESHOLD_DAYS,
        }
    }
}

/// Signed whole days from `today` until `expiry_date`.
///
/// Negative once the date has passed.
pub fn days_until(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    expiry_date.signed_duration_since(today).num_days()
}

/// Classifies one expiry date against `today`.
///
/// - `Expired` when `expiry_date < today`.
/// - `Expiring` when `today <= expiry_date < today + threshold`.
/// - `Fresh` otherwise.
pub fn classify(expiry_date: NaiveDate, today: NaiveDate, policy: ExpiryPolicy) -> ItemStatus {
    let remaining = days_until(expiry_date, today);
    if remaining < 0 {
        ItemStatus::Expired
    } else if remaining < i64::from(policy.threshold_days) {
        ItemStatus::Expiring
    } else {
        ItemStatus::Fresh
    }
}
