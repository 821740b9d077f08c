//! Simulated asynchronous UI work.
//!
//! # Responsibility
//! - Provide a cancellable, single-fire timer abstraction decoupled from
//!   any real timer implementation.
//! - Express the add-item submit and barcode scan delays on top of it.

pub mod delay;
pub mod flows;
