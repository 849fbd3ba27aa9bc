//! User management service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate here; the service itself
//! only shapes input and forwards to the repository.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{CreateUserDto, DomainResult, UpdateUserDto, User, UserRepositoryInterface};

/// User service. Holds nothing but the repository handle.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepositoryInterface>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepositoryInterface>) -> Self {
        Self { repo }
    }

    /// Shape `data` into a `CreateUserDto` and persist it.
    pub async fn create_user<D>(&self, data: D) -> DomainResult<User>
    where
        D: Into<CreateUserDto>,
    {
        let user = self.repo.create(data.into()).await?;
        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        self.repo.find_all().await
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// Apply a partial update as-is; no shaping.
    pub async fn update_user(&self, id: Uuid, data: UpdateUserDto) -> DomainResult<Option<User>> {
        let user = self.repo.update(id, data).await?;
        if user.is_some() {
            info!(user_id = %id, "User updated");
        }
        Ok(user)
    }

    /// Soft delete; the record stays in the store with `is_deleted` set.
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<Option<User>> {
        let user = self.repo.soft_delete(id).await?;
        if user.is_some() {
            info!(user_id = %id, "User soft-deleted");
        }
        Ok(user)
    }
}
