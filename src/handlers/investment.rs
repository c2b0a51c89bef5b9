//! Investment HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::AuthenticatedUser;
use crate::error::ApiResult;
use crate::investment::{CreateInvestmentRequest, Investment, Transaction, WithdrawalResponse};
use crate::models::ApiResponse;
use crate::state::AppState;

/// POST /api/investments - Create an investment from a deposit
pub async fn create_investment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateInvestmentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Investment>>)> {
    let investment = state
        .investment_service
        .create(user.user_id, req)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::data(investment))))
}

/// GET /api/investments - List the caller's investments
pub async fn list_investments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<Vec<Investment>>>> {
    let investments = state
        .investment_service
        .list_for_user(user.user_id)
        .await?;

    Ok(Json(ApiResponse::list(investments)))
}

/// GET /api/investments/:id - Fetch one investment (owner or admin)
pub async fn get_investment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(investment_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Investment>>> {
    let investment = state
        .investment_service
        .get(investment_id, user.user_id, user.is_admin())
        .await?;

    Ok(Json(ApiResponse::data(investment)))
}

/// PUT /api/investments/:id/withdraw - Withdraw an active investment
pub async fn withdraw_investment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(investment_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<WithdrawalResponse>>> {
    let (investment, withdrawal_amount) = state
        .investment_service
        .withdraw(investment_id, user.user_id)
        .await?;

    Ok(Json(ApiResponse::data(WithdrawalResponse {
        investment,
        withdrawal_amount,
    })))
}

/// GET /api/transactions - The caller's ledger entries, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<Vec<Transaction>>>> {
    let transactions = state
        .investment_service
        .ledger_for_user(user.user_id)
        .await?;

    Ok(Json(ApiResponse::list(transactions)))
}
