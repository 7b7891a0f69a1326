//! Data-access core for the contacts table.
//! This crate is the single source of truth for the contacts behavioral
//! contract: create, find-all, find-by-id, destroy and substring search.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Contact, ContactId, ContactValidationError, NewContact};
pub use repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::ContactService;
