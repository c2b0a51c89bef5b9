//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::AuthService;
use crate::gold::GoldPriceService;
use crate::investment::InvestmentService;
use crate::kyc::{DocumentStore, KycService};
use crate::users::UserService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub kyc_service: Arc<KycService>,
    pub investment_service: Arc<InvestmentService>,
    pub gold_service: Arc<GoldPriceService>,
    pub document_store: Arc<DocumentStore>,
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        user_service: Arc<UserService>,
        kyc_service: Arc<KycService>,
        investment_service: Arc<InvestmentService>,
        gold_service: Arc<GoldPriceService>,
        document_store: Arc<DocumentStore>,
        db_pool: PgPool,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            kyc_service,
            investment_service,
            gold_service,
            document_store,
            db_pool,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<UserService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_service.clone()
    }
}

impl FromRef<AppState> for Arc<KycService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.kyc_service.clone()
    }
}

impl FromRef<AppState> for Arc<InvestmentService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.investment_service.clone()
    }
}

impl FromRef<AppState> for Arc<GoldPriceService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gold_service.clone()
    }
}
