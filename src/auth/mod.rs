//! Access gate
//!
//! A single static credential pair checked against HTTP Basic
//! `Authorization` headers on every request.

pub mod basic;
pub mod middleware;

pub use basic::{verify_authorization, AuthError, Credentials};
pub use middleware::{basic_auth_middleware, AuthState};
