//! Runtime configuration for the inventory core.
//!
//! # Responsibility
//! - Hold tunables the hosting app may override (expiry threshold, list
//!   sizes, simulated delays).
//! - Load overrides from `FRESHFIND_*` environment variables.
//!
//! # Invariants
//! - A config that passed `validate()` always yields a usable `ExpiryPolicy`.

use crate::engine::status::{ExpiryPolicy, PolicyError, DEFAULT_THRESHOLD_DAYS};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const ENV_EXPIRY_THRESHOLD_DAYS: &str = "FRESHFIND_EXPIRY_THRESHOLD_DAYS";
pub const ENV_RECENT_ITEMS_LIMIT: &str = "FRESHFIND_RECENT_ITEMS_LIMIT";
pub const ENV_ADD_ITEM_DELAY_MS: &str = "FRESHFIND_ADD_ITEM_DELAY_MS";
pub const ENV_BARCODE_SCAN_DELAY_MS: &str = "FRESHFIND_BARCODE_SCAN_DELAY_MS";

const DEFAULT_RECENT_ITEMS_LIMIT: usize = 3;
const DEFAULT_ADD_ITEM_DELAY_MS: u64 = 800;
const DEFAULT_BARCODE_SCAN_DELAY_MS: u64 = 1500;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment value could not be parsed as the expected number.
    InvalidValue { key: &'static str, value: String },
    Policy(PolicyError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => {
                write!(f, "invalid value for `{key}`: `{value}`")
            }
            Self::Policy(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Policy(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<PolicyError> for ConfigError {
    fn from(value: PolicyError) -> Self {
        Self::Policy(value)
    }
}

/// Inventory core tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Days before expiry at which an item counts as expiring.
    pub expiry_threshold_days: u32,
    /// Size of the dashboard "recently added" list.
    pub recent_items_limit: usize,
    pub add_item_delay_ms: u64,
    pub barcode_scan_delay_ms: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiry_threshold_days: DEFAULT_THRESHOLD_DAYS,
            recent_items_limit: DEFAULT_RECENT_ITEMS_LIMIT,
            add_item_delay_ms: DEFAULT_ADD_ITEM_DELAY_MS,
            barcode_scan_delay_ms: DEFAULT_BARCODE_SCAN_DELAY_MS,
        }
    }
}

impl InventoryConfig {
    /// Defaults overridden by any `FRESHFIND_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            expiry_threshold_days: read_number(
                &lookup,
                ENV_EXPIRY_THRESHOLD_DAYS,
                defaults.expiry_threshold_days,
            )?,
            recent_items_limit: read_number(
                &lookup,
                ENV_RECENT_ITEMS_LIMIT,
                defaults.recent_items_limit,
            )?,
            add_item_delay_ms: read_number(
                &lookup,
                ENV_ADD_ITEM_DELAY_MS,
                defaults.add_item_delay_ms,
            )?,
            barcode_scan_delay_ms: read_number(
                &lookup,
                ENV_BARCODE_SCAN_DELAY_MS,
                defaults.barcode_scan_delay_ms,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy().map(|_| ())
    }

    /// Expiry policy described by this config.
    pub fn policy(&self) -> Result<ExpiryPolicy, ConfigError> {
        ExpiryPolicy::new(self.expiry_threshold_days).map_err(Into::into)
    }

    pub fn add_item_delay(&self) -> Duration {
        Duration::from_millis(self.add_item_delay_ms)
    }

    pub fn barcode_scan_delay(&self) -> Duration {
        Duration::from_millis(self.barcode_scan_delay_ms)
    }
}

fn read_number<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
