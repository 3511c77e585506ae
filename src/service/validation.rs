//! Request validation for person and book payloads.

use crate::error::AppError;
use crate::models::{BookPatch, NewBook, NewPerson, PersonPatch};
use regex::Regex;
use std::sync::OnceLock;

const MAX_EMAIL_LENGTH: usize = 100;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn new_person(body: &NewPerson) -> Result<(), AppError> {
        require_text("name", &body.name)?;
        validate_email(&body.email)
    }

    /// Only the fields present in the patch are checked.
    pub fn person_patch(body: &PersonPatch) -> Result<(), AppError> {
        if let Some(name) = &body.name {
            require_text("name", name)?;
        }
        if let Some(email) = &body.email {
            validate_email(email)?;
        }
        Ok(())
    }

    pub fn new_book(body: &NewBook) -> Result<(), AppError> {
        require_text("title", &body.title)?;
        require_text("author", &body.author)?;
        validate_call_number(body.call_number)
    }

    pub fn book_patch(body: &BookPatch) -> Result<(), AppError> {
        if let Some(title) = &body.title {
            require_text("title", title)?;
        }
        if let Some(author) = &body.author {
            require_text("author", author)?;
        }
        if let Some(n) = body.call_number {
            validate_call_number(n)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(AppError::Validation(format!(
            "email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    if !email_regex().is_match(email) {
        return Err(AppError::Validation("email must be a valid email".into()));
    }
    Ok(())
}

fn validate_call_number(n: i32) -> Result<(), AppError> {
    if n < 0 {
        return Err(AppError::Validation("callNumber must be at least 0".into()));
    }
    Ok(())
}
