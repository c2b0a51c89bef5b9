//! User profile and KYC submission routes

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::user;
use crate::kyc::MAX_DOCUMENT_BYTES;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    // Three documents plus text fields and multipart framing.
    let kyc_body_limit = MAX_DOCUMENT_BYTES * 3 + 1024 * 1024;

    Router::new()
        .route(
            "/api/users/profile",
            get(user::get_profile).put(user::update_profile),
        )
        .route(
            "/api/users/kyc",
            post(user::submit_kyc).layer(DefaultBodyLimit::max(kyc_body_limit)),
        )
}
