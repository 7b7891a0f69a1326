//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record and its create-input shape.
//! - Enforce the API-boundary validation contract: a well-formed input
//!   record for create, a numeric identifier for by-id operations.
//!
//! # Invariants
//! - `ContactId` is store-assigned on insertion and never reused while the
//!   row exists.
//! - `first_name` and `last_name` are required and non-blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned integer identifier for a contact row.
///
/// Kept as a newtype so by-id operations cannot be called with arbitrary
/// text: out-of-band input must pass [`ContactId::parse`] first, which
/// rejects anything that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    /// Wraps a raw integer identifier.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parses identifier text received from an untyped caller.
    ///
    /// # Errors
    /// - `ContactValidationError::InvalidId` when the text is not an
    ///   integer (e.g. `"Whatever"`). Never coerced silently.
    pub fn parse(text: &str) -> Result<Self, ContactValidationError> {
        text.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidId(text.to_string()))
    }

    /// Returns the raw integer value for SQL binding.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ContactId {
    type Err = ContactValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical contact record as persisted in the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned, ascending in insertion order.
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
}

/// Create-input record for a contact.
///
/// The `id` is intentionally absent: it is always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
}

impl NewContact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Checks the required-field contract before any SQL runs.
    ///
    /// # Errors
    /// - `MissingFirstName` / `MissingLastName` when a required field is
    ///   empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ContactValidationError::MissingFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ContactValidationError::MissingLastName);
        }
        Ok(())
    }
}

/// Boundary validation error for contact inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingFirstName,
    MissingLastName,
    /// Identifier text that does not parse as an integer.
    InvalidId(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFirstName => write!(f, "first_name is required and cannot be blank"),
            Self::MissingLastName => write!(f, "last_name is required and cannot be blank"),
            Self::InvalidId(text) => write!(f, "invalid contact id `{text}`: expected an integer"),
        }
    }
}

impl Error for ContactValidationError {}
