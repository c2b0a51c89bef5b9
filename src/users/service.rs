//! User profile service

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::User;

use super::model::UpdateProfileRequest;

/// User service errors
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for UserError {
    fn from(e: sqlx::Error) -> Self {
        UserError::DatabaseError(e.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound => ApiError::NotFound(e.to_string()),
            UserError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

/// Profile reads and partial updates over the `users` table
#[derive(Clone)]
pub struct UserService {
    db_pool: PgPool,
}

impl UserService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Fetch a user by id
    pub async fn get(&self, user_id: Uuid) -> Result<User, UserError> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(UserError::NotFound)
    }

    /// Apply a partial profile update, leaving absent fields untouched
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<User, UserError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone = COALESCE($4, phone),
                street = COALESCE($5, street),
                city = COALESCE($6, city),
                state = COALESCE($7, state),
                postal_code = COALESCE($8, postal_code),
                country = COALESCE($9, country),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.phone)
        .bind(&request.street)
        .bind(&request.city)
        .bind(&request.state)
        .bind(&request.postal_code)
        .bind(&request.country)
        .fetch_optional(&self.db_pool)
        .await?;

        user.ok_or(UserError::NotFound)
    }

    /// All users, for the admin dashboard
    pub async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = sqlx::query_as("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(users)
    }
}
