//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and engine views into use-case APIs.
//! - Keep hosting UI layers decoupled from storage details.

pub mod inventory_service;
