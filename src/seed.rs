//! Optional demo data: one person owning two books.

use crate::error::AppError;
use crate::models::{NewBook, NewPerson, Person, Record};
use crate::service::{BookService, PersonService};
use sqlx::PgPool;

pub const DEMO_EMAIL: &str = "jack@dmail.com";

/// Insert the demo person and books unless a live person already has [`DEMO_EMAIL`].
/// Returns the person id when rows were inserted.
pub async fn seed_demo_data(pool: &PgPool) -> Result<Option<i64>, AppError> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE email = $1 AND deleted_at IS NULL)",
        Person::TABLE
    );
    let (exists,): (bool,) = sqlx::query_as(&sql).bind(DEMO_EMAIL).fetch_one(pool).await?;
    if exists {
        tracing::info!(email = DEMO_EMAIL, "demo data already present");
        return Ok(None);
    }

    let person = PersonService::create(
        pool,
        &NewPerson {
            name: "Jack".into(),
            email: DEMO_EMAIL.into(),
        },
    )
    .await?;

    for (title, author, call_number) in [("Book 1", "Author 1", 1234), ("Book 2", "Author 2", 5678)] {
        BookService::create(
            pool,
            &NewBook {
                title: title.into(),
                author: author.into(),
                call_number,
                person_id: Some(person.id),
            },
        )
        .await?;
    }
    tracing::info!(person_id = person.id, books = 2, "demo data seeded");
    Ok(Some(person.id))
}
