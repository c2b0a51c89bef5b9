//! Authentication middleware
//!
//! Extractors that verify the bearer JWT and enforce role-based access.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{verify_token, AuthService, JwtError};
use crate::error::ApiError;
use crate::models::UserRole;

/// Authenticated user extracted from the JWT token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

/// Extractor for authenticated users
///
/// Verifies the `Authorization: Bearer` token and resolves the caller's
/// identity and role from its claims.
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    ApiError::Unauthorized(
                        "Authorization header with Bearer token required".to_string(),
                    )
                    .into_response()
                })?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|e| {
            let message = match e {
                JwtError::TokenExpired => "Token has expired",
                _ => "Invalid token",
            };
            ApiError::Unauthorized(message.to_string()).into_response()
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            ApiError::Unauthorized("Invalid user ID in token".to_string()).into_response()
        })?;

        let role = match claims.role.as_str() {
            "user" => UserRole::User,
            "admin" => UserRole::Admin,
            _ => {
                return Err(
                    ApiError::Unauthorized("Invalid role in token".to_string()).into_response()
                )
            }
        };

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            role,
        })
    }
}

/// Extractor that additionally requires the admin role
pub struct AdminUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(
                ApiError::Forbidden("Admin access required".to_string()).into_response()
            );
        }

        Ok(AdminUser(user))
    }
}
