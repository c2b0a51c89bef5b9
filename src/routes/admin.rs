//! Admin routes - KYC review queue and user listing
//!
//! Every handler here requires the admin role via the `AdminUser` extractor.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::admin;
use crate::state::AppState;

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/kyc/pending", get(admin::pending_kyc_users))
        .route("/api/users/kyc/:id/approve", put(admin::approve_kyc))
        .route("/api/users/kyc/:id/reject", put(admin::reject_kyc))
        .route("/api/users/kyc/:id/resubmit", put(admin::request_resubmission))
        .route("/api/admin/users", get(admin::list_users))
}
