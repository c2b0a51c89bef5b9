//! Gold price models and data structures

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored gold price snapshot
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct GoldPrice {
    pub id: Uuid,
    pub price_usd: f64,
    pub change_24h: f64,
    pub change_percent_24h: f64,
    pub source: String,
    pub recorded_at: DateTime<Utc>,
}

/// Quote produced by a price source before it is persisted
#[derive(Debug, Clone, PartialEq)]
pub struct SpotQuote {
    pub price_usd: f64,
    pub change_24h: f64,
    pub change_percent_24h: f64,
}

/// Response payload of the spot price endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPriceResponse {
    pub price: f64,
    pub change_24h: f64,
    pub change_percent_24h: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<GoldPrice> for GoldPriceResponse {
    fn from(price: GoldPrice) -> Self {
        Self {
            price: price.price_usd,
            change_24h: price.change_24h,
            change_percent_24h: price.change_percent_24h,
            timestamp: price.recorded_at,
        }
    }
}

/// Single point of the history endpoint
#[derive(Debug, Serialize, Clone)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

/// Query parameters for GET /api/gold/history
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<i64>,
}
