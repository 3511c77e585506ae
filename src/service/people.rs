//! Person queries, including attaching owned books.

use crate::error::AppError;
use crate::models::{Book, NewPerson, Person, PersonPatch, Record};
use crate::service::CrudService;
use sqlx::PgPool;
use std::collections::HashMap;

pub struct PersonService;

impl PersonService {
    /// One live person with their live books.
    pub async fn find_with_books(pool: &PgPool, id: i64) -> Result<Person, AppError> {
        let mut person: Person = CrudService::find_by_id(pool, id).await?;
        person.books = Self::books_of(pool, person.id).await?;
        Ok(person)
    }

    /// Every live person, each with their live books (batch-loaded in one query).
    pub async fn list_with_books(pool: &PgPool) -> Result<Vec<Person>, AppError> {
        let mut people: Vec<Person> = CrudService::find_all(pool).await?;
        if people.is_empty() {
            return Ok(people);
        }
        let ids: Vec<i64> = people.iter().map(|p| p.id).collect();
        let sql = format!(
            "SELECT {} FROM {} WHERE person_id = ANY($1) AND deleted_at IS NULL ORDER BY id",
            Book::COLUMNS,
            Book::TABLE
        );
        tracing::debug!(sql = %sql, people = ids.len(), "query");
        let books: Vec<Book> = sqlx::query_as(&sql).bind(&ids).fetch_all(pool).await?;

        let mut by_owner: HashMap<i64, Vec<Book>> = HashMap::new();
        for book in books {
            if let Some(owner) = book.person_id {
                by_owner.entry(owner).or_default().push(book);
            }
        }
        for person in &mut people {
            person.books = by_owner.remove(&person.id).unwrap_or_default();
        }
        Ok(people)
    }

    /// Insert a person. A live person with the same email is a conflict.
    pub async fn create(pool: &PgPool, input: &NewPerson) -> Result<Person, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email) VALUES ($1, $2) RETURNING {}",
            Person::TABLE,
            Person::COLUMNS
        );
        let person = sqlx::query_as::<_, Person>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
            .map_err(|e| email_conflict(e, &input.email))?;
        tracing::info!(id = person.id, "person created");
        Ok(person)
    }

    /// Merge the patch onto the stored row; absent fields are left untouched.
    pub async fn update(pool: &PgPool, input: &PersonPatch) -> Result<Person, AppError> {
        let sql = format!(
            "UPDATE {} SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {}",
            Person::TABLE,
            Person::COLUMNS
        );
        let mut person = sqlx::query_as::<_, Person>(&sql)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_optional(pool)
            .await
            .map_err(|e| email_conflict(e, input.email.as_deref().unwrap_or_default()))?
            .ok_or_else(|| AppError::not_found(Person::KIND, input.id))?;
        person.books = Self::books_of(pool, person.id).await?;
        Ok(person)
    }

    /// Soft-delete a person and return their last state. Their books are left as they are.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<Person, AppError> {
        let person: Person = CrudService::soft_delete(pool, id).await?;
        tracing::info!(id, "person deleted");
        Ok(person)
    }

    async fn books_of(pool: &PgPool, person_id: i64) -> Result<Vec<Book>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE person_id = $1 AND deleted_at IS NULL ORDER BY id",
            Book::COLUMNS,
            Book::TABLE
        );
        Ok(sqlx::query_as(&sql).bind(person_id).fetch_all(pool).await?)
    }
}

fn email_conflict(err: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Conflict(format!("email '{}' is already in use", email));
        }
    }
    AppError::Db(err)
}
