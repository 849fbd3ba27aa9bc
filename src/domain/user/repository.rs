use async_trait::async_trait;
use uuid::Uuid;

use super::{CreateUserDto, UpdateUserDto, User};
use crate::domain::DomainResult;

/// Persistence port for users.
///
/// Reads never return soft-deleted records; `update` and `soft_delete`
/// report an unknown or already deleted id as `Ok(None)`.
#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User>;

    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    async fn update(&self, id: Uuid, dto: UpdateUserDto) -> DomainResult<Option<User>>;
    async fn soft_delete(&self, id: Uuid) -> DomainResult<Option<User>>;
}
