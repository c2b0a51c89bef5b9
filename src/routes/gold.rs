//! Gold price routes (public)

use axum::{routing::get, Router};

use crate::handlers::gold;
use crate::state::AppState;

/// Create gold price routes
pub fn gold_routes() -> Router<AppState> {
    Router::new()
        .route("/api/gold/price", get(gold::get_price))
        .route("/api/gold/history", get(gold::get_history))
}
