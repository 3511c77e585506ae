//! Person and book routes. Paths keep the verb-in-path layout clients already use.

use crate::handlers::books::{create_book, delete_book, get_book, list_books, update_book};
use crate::handlers::people::{create_person, delete_person, get_person, list_people, update_person};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/person/:id", get(get_person))
        .route("/person", post(create_person))
        .route("/update/person", put(update_person))
        .route("/delete/person/:id", delete(delete_person))
        .route("/books", get(list_books))
        .route("/book/:id", get(get_book))
        .route("/book", post(create_book))
        .route("/update/book", put(update_book))
        .route("/delete/book/:id", delete(delete_book))
        .with_state(state)
}
