//! Book entity and DTOs.

use crate::models::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `books`. `person_id` references the owning person.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub title: String,
    pub author: String,
    pub call_number: i32,
    #[serde(rename = "personID")]
    pub person_id: Option<i64>,
}

impl Record for Book {
    const TABLE: &'static str = "books";
    const COLUMNS: &'static str =
        "id, created_at, updated_at, deleted_at, title, author, call_number, person_id";
    const KIND: &'static str = "book";
}

/// Body of `POST /book`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub call_number: i32,
    #[serde(rename = "personID", default)]
    pub person_id: Option<i64>,
}

/// Body of `PUT /update/book`. Absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub call_number: Option<i32>,
    #[serde(rename = "personID", default)]
    pub person_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn book_json_field_names() {
        let book = Book {
            id: 4,
            created_at: at(0),
            updated_at: at(0),
            deleted_at: None,
            title: "Book 1".into(),
            author: "Author 1".into(),
            call_number: 1234,
            person_id: Some(1),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["callNumber"], 1234);
        assert_eq!(json["personID"], 1);
        assert_eq!(json["title"], "Book 1");
        assert!(json["deletedAt"].is_null());
        assert!(json.get("call_number").is_none());
    }

    #[test]
    fn person_serializes_books_inline() {
        let person = Person {
            id: 1,
            created_at: at(10),
            updated_at: at(10),
            deleted_at: None,
            name: "Jack".into(),
            email: "jack@dmail.com".into(),
            books: Vec::new(),
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["name"], "Jack");
        assert_eq!(json["books"], serde_json::json!([]));
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn book_patch_keeps_absent_fields_unset() {
        let patch: BookPatch = serde_json::from_str(r#"{"id": 9, "callNumber": 42}"#).unwrap();
        assert_eq!(patch.id, 9);
        assert_eq!(patch.call_number, Some(42));
        assert!(patch.title.is_none());
        assert!(patch.person_id.is_none());
    }

    #[test]
    fn new_book_reads_person_id() {
        let book: NewBook = serde_json::from_str(
            r#"{"title": "T", "author": "A", "callNumber": 5678, "personID": 3}"#,
        )
        .unwrap();
        assert_eq!(book.person_id, Some(3));
        assert_eq!(book.call_number, 5678);
    }
}
