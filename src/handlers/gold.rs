//! Gold price HTTP handlers

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::gold::{GoldPriceResponse, HistoryQuery, PricePoint};
use crate::models::ApiResponse;
use crate::state::AppState;

const DEFAULT_HISTORY_DAYS: i64 = 30;
const MAX_HISTORY_DAYS: i64 = 365;

/// GET /api/gold/price - Current spot price (cached while fresh)
pub async fn get_price(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<GoldPriceResponse>>> {
    let price = state.gold_service.spot().await?;

    Ok(Json(ApiResponse::data(price.into())))
}

/// GET /api/gold/history?days=N - Price series for the requested window
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PricePoint>>>> {
    let days = query
        .days
        .unwrap_or(DEFAULT_HISTORY_DAYS)
        .clamp(1, MAX_HISTORY_DAYS);

    let (points, simulated) = state.gold_service.history(days).await?;

    let response = if simulated {
        ApiResponse {
            message: Some("Using simulated data as historical data is not available".to_string()),
            ..ApiResponse::list(points)
        }
    } else {
        ApiResponse::list(points)
    };

    Ok(Json(response))
}
