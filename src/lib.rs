//! People API: REST CRUD over people and the books they own, stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use migration::ensure_schema;
pub use models::{Book, Person};
pub use routes::{app, common_routes, entity_routes};
pub use seed::seed_demo_data;
pub use service::{BookService, CrudService, PersonService};
pub use state::AppState;
pub use store::connect;
