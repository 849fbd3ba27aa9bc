//! Domain layer
//!
//! User aggregate, its DTOs and the repository port the persistence
//! layer implements.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{CreateUserDto, UpdateUserDto, User, UserRepositoryInterface};
