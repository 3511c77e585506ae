//! Numeric record id taken from the `:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<i64>()
            .map(RecordId)
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", raw)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        RecordId::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(RecordId::parse("42").unwrap(), RecordId(42));
        assert_eq!(RecordId::parse(" 7 ").unwrap(), RecordId(7));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["abc", "", "1.5", "99999999999999999999"] {
            assert!(matches!(RecordId::parse(raw), Err(AppError::BadRequest(_))));
        }
    }
}
