//! Indented JSON responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body rendered with indentation.
#[derive(Debug, Clone)]
pub struct Pretty<T>(pub T);

impl<T: Serialize> IntoResponse for Pretty<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(buf) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                buf,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                    err.to_string(),
                )
                    .into_response()
            }
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Pretty<T>) {
    (StatusCode::OK, Pretty(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Pretty<T>) {
    (StatusCode::CREATED, Pretty(data))
}
