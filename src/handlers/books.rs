//! Book handlers, mirroring the person routes.

use crate::error::AppError;
use crate::extractors::{JsonBody, RecordId};
use crate::models::{Book, BookPatch, NewBook};
use crate::response::{created, ok};
use crate::service::{BookService, CrudService, RequestValidator};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books: Vec<Book> = CrudService::find_all(&state.pool).await?;
    Ok(ok(books))
}

pub async fn get_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let book: Book = CrudService::find_by_id(&state.pool, id).await?;
    Ok(ok(book))
}

pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new_book(&body)?;
    let book = BookService::create(&state.pool, &body).await?;
    Ok(created(book))
}

pub async fn update_book(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<BookPatch>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::book_patch(&body)?;
    let book = BookService::update(&state.pool, &body).await?;
    Ok(ok(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let book: Book = CrudService::soft_delete(&state.pool, id).await?;
    tracing::info!(id, "book deleted");
    Ok(ok(book))
}
