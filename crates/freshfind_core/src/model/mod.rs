//! Domain model for tracked groceries and their derived alerts.
//!
//! # Responsibility
//! - Define canonical data structures used by the engine and services.
//! - Reject malformed input at construction time.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Freshness status is derived, never stored.

pub mod item;
pub mod notification;
