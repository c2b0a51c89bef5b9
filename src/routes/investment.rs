//! Investment and transaction ledger routes

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::investment;
use crate::state::AppState;

/// Create investment routes
pub fn investment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/investments",
            post(investment::create_investment).get(investment::list_investments),
        )
        .route("/api/investments/:id", get(investment::get_investment))
        .route(
            "/api/investments/:id/withdraw",
            put(investment::withdraw_investment),
        )
        .route("/api/transactions", get(investment::list_transactions))
}
