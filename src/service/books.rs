//! Book inserts and patches.

use crate::error::AppError;
use crate::models::{Book, BookPatch, NewBook, Person, Record};
use sqlx::PgPool;

pub struct BookService;

impl BookService {
    /// Insert a book. `person_id` must name a live person.
    pub async fn create(pool: &PgPool, input: &NewBook) -> Result<Book, AppError> {
        if let Some(owner) = input.person_id {
            ensure_live_owner(pool, owner).await?;
        }
        let sql = format!(
            "INSERT INTO {} (title, author, call_number, person_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            Book::TABLE,
            Book::COLUMNS
        );
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.call_number)
            .bind(input.person_id)
            .fetch_one(pool)
            .await
            .map_err(|e| missing_owner(e, input.person_id))?;
        tracing::info!(id = book.id, person_id = ?book.person_id, "book created");
        Ok(book)
    }

    /// Merge the patch onto the stored row; absent fields are left untouched.
    pub async fn update(pool: &PgPool, input: &BookPatch) -> Result<Book, AppError> {
        if let Some(owner) = input.person_id {
            ensure_live_owner(pool, owner).await?;
        }
        let sql = format!(
            "UPDATE {} SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                call_number = COALESCE($4, call_number),
                person_id = COALESCE($5, person_id),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Book::TABLE,
            Book::COLUMNS
        );
        sqlx::query_as::<_, Book>(&sql)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.call_number)
            .bind(input.person_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| missing_owner(e, input.person_id))?
            .ok_or_else(|| AppError::not_found(Book::KIND, input.id))
    }
}

/// Soft-deleted people still satisfy the foreign key.
async fn ensure_live_owner(pool: &PgPool, person_id: i64) -> Result<(), AppError> {
    let sql = format!(
        "SELECT EXISTS (SELECT 1 FROM {} WHERE id = $1 AND deleted_at IS NULL)",
        Person::TABLE
    );
    let live: bool = sqlx::query_scalar(&sql).bind(person_id).fetch_one(pool).await?;
    if !live {
        return Err(no_such_owner(Some(person_id)));
    }
    Ok(())
}

fn no_such_owner(person_id: Option<i64>) -> AppError {
    AppError::Validation(match person_id {
        Some(id) => format!("personID {} does not reference a person", id),
        None => "personID does not reference a person".into(),
    })
}

fn missing_owner(err: sqlx::Error, person_id: Option<i64>) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return no_such_owner(person_id);
        }
    }
    AppError::Db(err)
}
