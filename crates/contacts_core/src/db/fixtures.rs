//! Test-fixture collaborators for the contacts table.
//!
//! # Responsibility
//! - Reset the contacts table to a known state between test scenarios.
//! - Seed the fixed contact set that integration tests assert against.
//!
//! # Invariants
//! - `truncate_contacts` leaves the table empty; because `id` is a rowid
//!   alias without AUTOINCREMENT, the next insert is assigned `id = 1`.
//! - `seed_contacts` inserts its rows in declaration order, so on a freshly
//!   truncated table the seeds receive ids 1, 2 and 3.

use super::DbResult;
use rusqlite::{params, Connection};

/// Fixed `(first_name, last_name)` seed set, in insertion order.
pub const SEED_CONTACTS: &[(&str, &str)] = &[
    ("Jared", "Grippe"),
    ("Tanner", "Welsh"),
    ("NeEddra", "James"),
];

/// Empties the contacts table, resetting id assignment to 1.
pub fn truncate_contacts(conn: &Connection) -> DbResult<()> {
    conn.execute("DELETE FROM contacts;", [])?;
    Ok(())
}

/// Inserts the fixed seed set in order.
///
/// Callers are expected to truncate first; seeding does not clear existing
/// rows.
pub fn seed_contacts(conn: &Connection) -> DbResult<()> {
    let mut stmt =
        conn.prepare("INSERT INTO contacts (first_name, last_name) VALUES (?1, ?2);")?;
    for &(first_name, last_name) in SEED_CONTACTS {
        stmt.execute(params![first_name, last_name])?;
    }
    Ok(())
}
