//! Person handlers: list, read, create, patch, soft delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, RecordId};
use crate::models::{NewPerson, PersonPatch};
use crate::response::{created, ok};
use crate::service::{PersonService, RequestValidator};
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let people = PersonService::list_with_books(&state.pool).await?;
    Ok(ok(people))
}

/// GET /person/:id
pub async fn get_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::find_with_books(&state.pool, id).await?;
    Ok(ok(person))
}

/// POST /person
pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPerson>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::new_person(&body)?;
    let person = PersonService::create(&state.pool, &body).await?;
    Ok(created(person))
}

/// PUT /update/person
pub async fn update_person(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PersonPatch>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::person_patch(&body)?;
    let person = PersonService::update(&state.pool, &body).await?;
    Ok(ok(person))
}

/// DELETE /delete/person/:id
pub async fn delete_person(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let person = PersonService::delete(&state.pool, id).await?;
    Ok(ok(person))
}
