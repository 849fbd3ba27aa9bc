//! # User Registry
//!
//! CRUD backend for user records over HTTP, guarded by a single static
//! HTTP Basic credential pair. Deletes are soft: records are flagged and
//! hidden from reads, never removed.
//!
//! ## Architecture
//!
//! - **domain**: User entity, DTOs and the repository port
//! - **application**: `UserService`, the stateless use-case layer
//! - **infrastructure**: SeaORM persistence, migrations, shutdown signal
//! - **interfaces**: Axum handlers, router and OpenAPI document
//! - **auth**: Basic credential gate applied in front of every route
//! - **config**: TOML file + environment configuration

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::UserRepository;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, create_app, App};
