//! Admin HTTP handlers - KYC review queue and user listing

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::AdminUser;
use crate::error::ApiResult;
use crate::kyc::{RejectKycRequest, ResubmitKycRequest, ReviewAction, ReviewedUserSummary};
use crate::models::{ApiResponse, UserResponse};
use crate::state::AppState;

/// GET /api/users/kyc/pending - Users awaiting review
pub async fn pending_kyc_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.kyc_service.pending().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ApiResponse::list(users)))
}

/// PUT /api/users/kyc/:id/approve - Approve a user's KYC
pub async fn approve_kyc(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ReviewedUserSummary>>> {
    review(state, admin.user_id, user_id, ReviewAction::Approve).await
}

/// PUT /api/users/kyc/:id/reject - Reject a user's KYC with a reason
pub async fn reject_kyc(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<RejectKycRequest>,
) -> ApiResult<Json<ApiResponse<ReviewedUserSummary>>> {
    let action = ReviewAction::Reject {
        reason: req.rejection_reason.unwrap_or_default(),
    };
    review(state, admin.user_id, user_id, action).await
}

/// PUT /api/users/kyc/:id/resubmit - Request a resubmission with a message
pub async fn request_resubmission(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<Uuid>,
    Json(req): Json<ResubmitKycRequest>,
) -> ApiResult<Json<ApiResponse<ReviewedUserSummary>>> {
    let action = ReviewAction::RequestResubmission {
        message: req.resubmission_message.unwrap_or_default(),
    };
    review(state, admin.user_id, user_id, action).await
}

async fn review(
    state: AppState,
    reviewer_id: Uuid,
    target_id: Uuid,
    action: ReviewAction,
) -> ApiResult<Json<ApiResponse<ReviewedUserSummary>>> {
    let message = action.outcome_message();
    let user = state
        .kyc_service
        .review(target_id, reviewer_id, action)
        .await?;

    Ok(Json(ApiResponse::with_message(user.into(), message)))
}

/// GET /api/admin/users - All users, for the admin dashboard
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = state.user_service.list_all().await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(ApiResponse::list(users)))
}
