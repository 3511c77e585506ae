//! HTTP handlers for people and books.

pub mod books;
pub mod people;
