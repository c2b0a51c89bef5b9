//! Authentication HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use super::AuthenticatedUser;
use crate::error::ApiResult;
use crate::models::{ApiResponse, AuthTokenResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::state::AppState;

/// POST /api/auth/register - Create an account and issue a token
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthTokenResponse>>)> {
    req.validate()?;

    let tokens = state.auth_service.register(req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(tokens))))
}

/// POST /api/auth/login - Verify credentials and issue a token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthTokenResponse>>> {
    let tokens = state.auth_service.login(req).await?;

    Ok(Json(ApiResponse::data(tokens)))
}

/// GET /api/auth/me - Get current authenticated user
pub async fn me(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.auth_service.get_user_by_id(user.user_id).await?;

    Ok(Json(ApiResponse::data(user.into())))
}
