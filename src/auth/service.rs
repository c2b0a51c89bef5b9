//! Authentication service
//!
//! Core business logic for password-based registration and login.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{AuthTokenResponse, LoginRequest, RegisterRequest, User, UserRole};

use super::jwt::{generate_access_token, JwtError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(e: bcrypt::BcryptError) -> Self {
        AuthError::HashingFailed(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        AuthError::TokenError(e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::EmailTaken => ApiError::Conflict(e.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            AuthError::UserNotFound => ApiError::NotFound(e.to_string()),
            AuthError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            AuthError::HashingFailed(msg) | AuthError::TokenError(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
    jwt_secret: String,
    access_token_ttl_seconds: i64,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(db_pool: PgPool, jwt_secret: String, access_token_ttl_seconds: i64) -> Self {
        Self {
            db_pool,
            jwt_secret,
            access_token_ttl_seconds,
        }
    }

    /// Register a new account and issue a token
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthTokenResponse, AuthError> {
        let email = normalize_email(&request.email);

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(&self.db_pool)
            .await?;

        if existing.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, first_name, last_name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.first_name.trim())
        .bind(request.last_name.trim())
        .bind(&email)
        .bind(&password_hash)
        .bind(UserRole::User)
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(user_id = %user.id, "User registered");

        self.issue_token(user)
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, request: LoginRequest) -> Result<AuthTokenResponse, AuthError> {
        let email = normalize_email(&request.email);

        let user: User = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(&request.password, &user.password_hash)?;
        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_token(user)
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<User, AuthError> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    fn issue_token(&self, user: User) -> Result<AuthTokenResponse, AuthError> {
        let token = generate_access_token(&user, &self.jwt_secret, self.access_token_ttl_seconds)?;

        Ok(AuthTokenResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_token_ttl_seconds,
            user: user.into(),
        })
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

/// Emails are stored and compared lowercased and trimmed
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
        assert_eq!(normalize_email("plain@example.com"), "plain@example.com");
    }

    #[test]
    fn test_auth_error_to_api_error() {
        use axum::http::StatusCode;

        let api: ApiError = AuthError::EmailTaken.into();
        assert_eq!(api.status_code(), StatusCode::CONFLICT);

        let api: ApiError = AuthError::InvalidCredentials.into();
        assert_eq!(api.status_code(), StatusCode::UNAUTHORIZED);

        let api: ApiError = AuthError::DatabaseError("boom".to_string()).into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
