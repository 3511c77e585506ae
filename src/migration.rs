//! Create-or-alter DDL for `people` and `books`. Safe to run on every startup.

use crate::error::AppError;
use sqlx::PgPool;

const CREATE_PEOPLE: &str = r#"
    CREATE TABLE IF NOT EXISTS people (
        id BIGSERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deleted_at TIMESTAMPTZ,
        name TEXT NOT NULL DEFAULT '',
        email VARCHAR(100) NOT NULL DEFAULT ''
    )
"#;

const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id BIGSERIAL PRIMARY KEY,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        deleted_at TIMESTAMPTZ,
        title TEXT NOT NULL DEFAULT '',
        author TEXT NOT NULL DEFAULT '',
        call_number INTEGER NOT NULL DEFAULT 0,
        person_id BIGINT REFERENCES people (id)
    )
"#;

/// Columns added to tables created by older versions of the service.
const ALTER_COLUMNS: &[(&str, &str, &str)] = &[
    ("people", "created_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("people", "updated_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("people", "deleted_at", "TIMESTAMPTZ"),
    ("people", "name", "TEXT NOT NULL DEFAULT ''"),
    ("people", "email", "VARCHAR(100) NOT NULL DEFAULT ''"),
    ("books", "created_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("books", "updated_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("books", "deleted_at", "TIMESTAMPTZ"),
    ("books", "title", "TEXT NOT NULL DEFAULT ''"),
    ("books", "author", "TEXT NOT NULL DEFAULT ''"),
    ("books", "call_number", "INTEGER NOT NULL DEFAULT 0"),
    ("books", "person_id", "BIGINT REFERENCES people (id)"),
];

/// Integer key columns that older versions created as 32-bit `SERIAL`/`INTEGER`.
const WIDEN_TO_BIGINT: &[(&str, &str)] = &[
    ("people", "id"),
    ("books", "id"),
    ("books", "person_id"),
];

/// Columns an older schema may have left nullable and without a default.
const COLUMN_DEFAULTS: &[(&str, &str, &str)] = &[
    ("people", "created_at", "NOW()"),
    ("people", "updated_at", "NOW()"),
    ("people", "name", "''"),
    ("people", "email", "''"),
    ("books", "created_at", "NOW()"),
    ("books", "updated_at", "NOW()"),
    ("books", "title", "''"),
    ("books", "author", "''"),
    ("books", "call_number", "0"),
];

/// Older versions made email unique across every row, deleted ones included.
const DROP_LEGACY_EMAIL_INDEX: &str = "DROP INDEX IF EXISTS uix_people_email";

const INDEXES: &[&str] = &[
    // email is unique among live rows only
    "CREATE UNIQUE INDEX IF NOT EXISTS uix_people_live_email ON people (email) WHERE deleted_at IS NULL",
    "CREATE INDEX IF NOT EXISTS idx_people_deleted_at ON people (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_books_deleted_at ON books (deleted_at)",
    "CREATE INDEX IF NOT EXISTS idx_books_person_id ON books (person_id)",
];

/// Ensure both tables, their columns, and their indexes exist, upgrading
/// tables left by older versions (32-bit keys, nullable columns, a full
/// email index). Table, key, and index errors are returned; column
/// additions and defaults are best-effort.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_PEOPLE).execute(pool).await?;
    sqlx::query(CREATE_BOOKS).execute(pool).await?;

    for (table, column, def) in ALTER_COLUMNS {
        let sql = format!("ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}", table, column, def);
        if let Err(e) = sqlx::query(&sql).execute(pool).await {
            tracing::warn!(table, column, error = %e, "could not add column");
        }
    }

    for (table, column) in WIDEN_TO_BIGINT {
        widen_to_bigint(pool, table, column).await?;
    }

    for (table, column, default) in COLUMN_DEFAULTS {
        if let Err(e) = apply_default(pool, table, column, default).await {
            tracing::warn!(table, column, error = %e, "could not set column default");
        }
    }

    sqlx::query(DROP_LEGACY_EMAIL_INDEX).execute(pool).await?;
    for sql in INDEXES {
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::debug!("schema ensured for people, books");
    Ok(())
}

async fn widen_to_bigint(pool: &PgPool, table: &str, column: &str) -> Result<(), AppError> {
    let data_type: Option<String> = sqlx::query_scalar(
        "SELECT data_type FROM information_schema.columns
         WHERE table_schema = current_schema() AND table_name = $1 AND column_name = $2",
    )
    .bind(table)
    .bind(column)
    .fetch_optional(pool)
    .await?;
    if data_type.as_deref() != Some("integer") {
        return Ok(());
    }

    let sql = format!("ALTER TABLE {} ALTER COLUMN {} TYPE BIGINT", table, column);
    sqlx::query(&sql).execute(pool).await?;
    let sequence: Option<String> = sqlx::query_scalar("SELECT pg_get_serial_sequence($1, $2)")
        .bind(table)
        .bind(column)
        .fetch_one(pool)
        .await?;
    if let Some(sequence) = sequence {
        sqlx::query(&format!("ALTER SEQUENCE {} AS BIGINT", sequence))
            .execute(pool)
            .await?;
    }
    tracing::info!(table, column, "widened column to BIGINT");
    Ok(())
}

async fn apply_default(
    pool: &PgPool,
    table: &str,
    column: &str,
    default: &str,
) -> Result<(), sqlx::Error> {
    let statements = [
        format!("ALTER TABLE {} ALTER COLUMN {} SET DEFAULT {}", table, column, default),
        format!("UPDATE {} SET {} = {} WHERE {} IS NULL", table, column, default, column),
        format!("ALTER TABLE {} ALTER COLUMN {} SET NOT NULL", table, column),
    ];
    for sql in &statements {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
