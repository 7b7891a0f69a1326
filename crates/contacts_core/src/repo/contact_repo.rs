//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the five stable data-access operations over the `contacts`
//!   table: create, find-all, find-by-id, destroy, search.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewContact::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Not-found is never an error: `find_by_id` yields `None` and `destroy`
//!   reports zero affected rows.

use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::model::contact::{Contact, ContactId, ContactValidationError, NewContact};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, first_name, last_name FROM contacts";

const CONTACTS_TABLE: &str = "contacts";
const REQUIRED_COLUMNS: &[&str] = &["id", "first_name", "last_name"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    InvalidData(String),
    /// The connection has not had migrations applied.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version is {actual_version}, expected {expected_version}; \
                 open connections via db::open_db so migrations run first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` does not exist")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` does not exist")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact data access.
pub trait ContactRepository {
    /// Inserts one contact and returns the inserted row set, the created
    /// contact (with its store-assigned id) first.
    fn create(&self, new_contact: &NewContact) -> RepoResult<Vec<Contact>>;

    /// Returns every contact, ordered by ascending id.
    fn find_all(&self) -> RepoResult<Vec<Contact>>;

    /// Returns the contact with the given id, or `None` when absent.
    fn find_by_id(&self, id: ContactId) -> RepoResult<Option<Contact>>;

    /// Deletes at most one row and returns the number of rows removed.
    fn destroy(&self, id: ContactId) -> RepoResult<usize>;

    /// Returns contacts whose first or last name contains `term` as a
    /// case-insensitive substring, ordered by ascending id.
    fn search(&self, term: &str) -> RepoResult<Vec<Contact>>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a migrated connection after verifying the expected schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not match
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the contacts
    ///   table shape is not the one this binary was built against.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_user_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        if !table_exists(conn, CONTACTS_TABLE)? {
            return Err(RepoError::MissingRequiredTable(CONTACTS_TABLE));
        }

        for column in REQUIRED_COLUMNS {
            if !column_exists(conn, CONTACTS_TABLE, column)? {
                return Err(RepoError::MissingRequiredColumn {
                    table: CONTACTS_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create(&self, new_contact: &NewContact) -> RepoResult<Vec<Contact>> {
        new_contact.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (first_name, last_name) VALUES (?1, ?2);",
            params![
                new_contact.first_name.as_str(),
                new_contact.last_name.as_str()
            ],
        )?;

        let id = ContactId::new(self.conn.last_insert_rowid());
        match self.find_by_id(id)? {
            Some(contact) => Ok(vec![contact]),
            None => Err(RepoError::InvalidData(format!(
                "inserted contact {id} could not be read back"
            ))),
        }
    }

    fn find_all(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn find_by_id(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.value()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn destroy(&self, id: ContactId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", params![id.value()])?;
        Ok(changed)
    }

    fn search(&self, term: &str) -> RepoResult<Vec<Contact>> {
        let pattern = format!("%{}%", escape_like_term(term));

        let mut stmt = self.conn.prepare(&format!(
            "{CONTACT_SELECT_SQL}
             WHERE first_name LIKE ?1 ESCAPE '\\'
                OR last_name LIKE ?1 ESCAPE '\\'
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![pattern])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let id: i64 = row.get("id")?;
    let first_name: String = row.get("first_name")?;
    let last_name: String = row.get("last_name")?;

    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(RepoError::InvalidData(format!(
            "contact {id} has a blank required name field"
        )));
    }

    Ok(Contact {
        id: ContactId::new(id),
        first_name,
        last_name,
    })
}

/// Escapes LIKE wildcards so the search term matches literally.
fn escape_like_term(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn table_exists(conn: &Connection, table_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table_name: &str, column_name: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM pragma_table_info(?1) WHERE name = ?2
        );",
        [table_name, column_name],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
