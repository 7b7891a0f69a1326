//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the contact data-access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewContact::validate()` before
//!   persistence.
//! - Absent rows surface as `None`/zero-affected, never as errors.

pub mod contact_repo;
