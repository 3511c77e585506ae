//! Persisted record shapes and request DTOs.

pub mod book;
pub mod person;

pub use book::{Book, BookPatch, NewBook};
pub use person::{NewPerson, Person, PersonPatch};

use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// A soft-deletable table row with an auto-assigned `BIGSERIAL` id.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Select list, shared by every query against the table.
    const COLUMNS: &'static str;
    /// Singular name used in error messages.
    const KIND: &'static str;
}
