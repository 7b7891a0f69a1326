//! Domain model for the contacts table.
//!
//! # Responsibility
//! - Define the canonical data structures used by repository and service
//!   layers.
//! - Hold the boundary validation rules for caller-supplied input.
//!
//! # Invariants
//! - Every persisted contact is identified by a store-assigned `ContactId`.
//! - Deletion is a hard delete; no tombstone state exists in the model.

pub mod contact;
