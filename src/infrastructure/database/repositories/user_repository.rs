use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::{
    CreateUserDto, DomainError, DomainResult, UpdateUserDto, User, UserRepositoryInterface,
};
use crate::infrastructure::database::entities::user;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load a live (not soft-deleted) user row.
    async fn find_active(&self, id: Uuid) -> DomainResult<Option<user::Model>> {
        user::Entity::find_by_id(id)
            .filter(user::Column::IsDeleted.eq(false))
            .one(&self.db)
            .await
            .map_err(db_err)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        age: model.age,
        city: model.city,
        zip_code: model.zip_code,
        is_deleted: model.is_deleted,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UserRepositoryInterface for UserRepository {
    async fn create(&self, dto: CreateUserDto) -> DomainResult<User> {
        let now = Utc::now();

        let new_user = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(dto.email),
            name: Set(dto.name),
            age: Set(dto.age),
            city: Set(dto.city),
            zip_code: Set(dto.zip_code),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_user.insert(&self.db).await.map_err(db_err)?;
        Ok(user_model_to_domain(model))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let models = user::Entity::find()
            .filter(user::Column::IsDeleted.eq(false))
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(user_model_to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.find_active(id).await?.map(user_model_to_domain))
    }

    async fn update(&self, id: Uuid, dto: UpdateUserDto) -> DomainResult<Option<User>> {
        if dto.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut stmt = user::Entity::update_many()
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(email) = dto.email {
            stmt = stmt.col_expr(user::Column::Email, Expr::value(email));
        }
        if let Some(name) = dto.name {
            stmt = stmt.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(age) = dto.age {
            stmt = stmt.col_expr(user::Column::Age, Expr::value(age));
        }
        if let Some(city) = dto.city {
            stmt = stmt.col_expr(user::Column::City, Expr::value(city));
        }
        if let Some(zip_code) = dto.zip_code {
            stmt = stmt.col_expr(user::Column::ZipCode, Expr::value(zip_code));
        }

        // Only live rows are written.
        let result = stmt
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn soft_delete(&self, id: Uuid) -> DomainResult<Option<User>> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::IsDeleted, Expr::value(true))
            .col_expr(user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::IsDeleted.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let deleted = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(deleted.map(user_model_to_domain))
    }
}

// ── Tests ──────────────────────────────────────────────────────
