//! Repository layer abstractions and session storage.
//!
//! # Responsibility
//! - Define the item collection contract the services depend on.
//! - Keep storage details out of the engine.
//!
//! # Invariants
//! - Repository writes must enforce `GroceryItem::validate()`.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`).

pub mod item_repo;
