use crate::{
    auth::{hash_password, user},
    db::DbPool,
    errors::ServiceError,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Body of `PUT /user/:id`; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 1, max = 256, message = "password must not be empty"))]
    pub password: Option<String>,
}

/// Account maintenance. Accounts are created through signup.
#[derive(Clone)]
pub struct UserService {
    db_pool: Arc<DbPool>,
}

impl UserService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<user::Model, ServiceError> {
        user::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))
    }

    /// Renames the account and/or sets a new password (stored re-hashed)
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: UserUpdate) -> Result<user::Model, ServiceError> {
        input.validate()?;

        let existing = user::Entity::find_by_id(id)
            .one(&*self.db_pool)
            .await?
            .ok_or_else(|| ServiceError::BadRequest(format!("User {} does not exist", id)))?;

        if input.username.is_none() && input.password.is_none() {
            return Ok(existing);
        }

        let mut model: user::ActiveModel = existing.into();
        if let Some(username) = input.username {
            model.username = Set(username);
        }
        if let Some(password) = input.password {
            let hash =
                hash_password(&password).map_err(|e| ServiceError::InternalError(e.to_string()))?;
            model.password = Set(hash);
        }

        let updated = model
            .update(&*self.db_pool)
            .await
            .map_err(|e| ServiceError::from_write(e, "Username already exists"))?;

        info!(user_id = id, "User updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let result = user::Entity::delete_by_id(id).exec(&*self.db_pool).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::BadRequest(format!("User {} does not exist", id)));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }
}
