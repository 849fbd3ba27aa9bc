//! HTTP REST API interfaces
//!
//! - `common`: Shared response bodies, error mapping and extractors
//! - `modules`: Per-resource DTOs and handlers
//! - `router`: Route table, access gate and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, create_app, App, ApiDoc, USERS_BASE_PATH};
