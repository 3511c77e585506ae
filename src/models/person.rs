//! Person entity and DTOs.

use crate::models::{Book, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `people`, with its books attached after loading.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub name: String,
    pub email: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Record for Person {
    const TABLE: &'static str = "people";
    const COLUMNS: &'static str = "id, created_at, updated_at, deleted_at, name, email";
    const KIND: &'static str = "person";
}

/// Body of `POST /person`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
}

/// Body of `PUT /update/person`. Absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonPatch {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
