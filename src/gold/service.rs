//! Gold price service - staleness-checked spot accessor and history
//!
//! The price log is append-only; the spot accessor returns the newest
//! snapshot while it is fresh and otherwise pulls a new quote from the
//! configured source and persists it before returning.

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;

use super::model::{GoldPrice, PricePoint};
use super::source::{round2, PriceSource};

/// Price assumed when the log is empty (e.g. a fresh deployment)
pub const DEFAULT_PRICE_USD: f64 = 2000.0;

/// Snapshots older than this are refreshed from the source
const MAX_PRICE_AGE_SECONDS: i64 = 3600;

/// Below this many stored points the history endpoint serves a mock series
const MIN_HISTORY_POINTS: usize = 5;

/// Gold price service errors
#[derive(Error, Debug)]
pub enum GoldError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Price source error: {0}")]
    SourceError(String),
}

impl From<sqlx::Error> for GoldError {
    fn from(e: sqlx::Error) -> Self {
        GoldError::DatabaseError(e.to_string())
    }
}

impl From<GoldError> for ApiError {
    fn from(e: GoldError) -> Self {
        match e {
            GoldError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            GoldError::SourceError(msg) => ApiError::InternalError(msg),
        }
    }
}

/// Gold price accessor over the append-only price log
pub struct GoldPriceService {
    db_pool: PgPool,
    source: Arc<dyn PriceSource>,
}

impl GoldPriceService {
    pub fn new(db_pool: PgPool, source: Arc<dyn PriceSource>) -> Self {
        Self { db_pool, source }
    }

    /// Current spot price: cached while fresh, refreshed when stale
    pub async fn spot(&self) -> Result<GoldPrice, GoldError> {
        if let Some(latest) = self.newest().await? {
            let age = Utc::now() - latest.recorded_at;
            if age <= Duration::seconds(MAX_PRICE_AGE_SECONDS) {
                return Ok(latest);
            }
        }

        let quote = self
            .source
            .fetch_spot()
            .await
            .map_err(|e| GoldError::SourceError(e.to_string()))?;

        let stored: GoldPrice = sqlx::query_as(
            r#"
            INSERT INTO gold_prices (id, price_usd, change_24h, change_percent_24h, source, recorded_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(quote.price_usd)
        .bind(quote.change_24h)
        .bind(quote.change_percent_24h)
        .bind(self.source.name())
        .fetch_one(&self.db_pool)
        .await?;

        tracing::info!(price_usd = stored.price_usd, source = %stored.source, "Gold price refreshed");

        Ok(stored)
    }

    /// Latest stored price for investment valuation, without refreshing
    ///
    /// Falls back to [`DEFAULT_PRICE_USD`] when the log is empty.
    pub async fn latest_price_usd(&self) -> Result<f64, GoldError> {
        Ok(self
            .newest()
            .await?
            .map(|price| price.price_usd)
            .unwrap_or(DEFAULT_PRICE_USD))
    }

    /// Price history for the last `days` days, oldest first
    ///
    /// Returns the stored points and whether the series is simulated. With
    /// fewer than five real points a smooth mock series is served instead.
    pub async fn history(&self, days: i64) -> Result<(Vec<PricePoint>, bool), GoldError> {
        let since = Utc::now() - Duration::days(days);

        let stored: Vec<GoldPrice> = sqlx::query_as(
            "SELECT * FROM gold_prices WHERE recorded_at >= $1 ORDER BY recorded_at ASC",
        )
        .bind(since)
        .fetch_all(&self.db_pool)
        .await?;

        if stored.len() < MIN_HISTORY_POINTS {
            return Ok((generate_mock_history(days), true));
        }

        let points = stored
            .into_iter()
            .map(|price| PricePoint {
                date: price.recorded_at,
                price: price.price_usd,
            })
            .collect();

        Ok((points, false))
    }

    async fn newest(&self) -> Result<Option<GoldPrice>, GoldError> {
        let price =
            sqlx::query_as("SELECT * FROM gold_prices ORDER BY recorded_at DESC LIMIT 1")
                .fetch_optional(&self.db_pool)
                .await?;

        Ok(price)
    }
}

/// Synthesize a smooth daily price series ending today
///
/// Starts between $1900 and $2100 and walks with 0.5% daily volatility,
/// yielding `days + 1` points.
pub fn generate_mock_history(days: i64) -> Vec<PricePoint> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let mut points = Vec::with_capacity(days as usize + 1);
    let mut price = 1900.0 + rng.gen_range(0.0..200.0);

    for i in (0..=days).rev() {
        let step = rng.gen_range(-1.0..1.0) * 0.005;
        price *= 1.0 + step;
        points.push(PricePoint {
            date: now - Duration::days(i),
            price: round2(price),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_point_count() {
        assert_eq!(generate_mock_history(30).len(), 31);
        assert_eq!(generate_mock_history(7).len(), 8);
        assert_eq!(generate_mock_history(0).len(), 1);
    }

    #[test]
    fn test_mock_history_is_chronological() {
        let points = generate_mock_history(14);
        for pair in points.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_mock_history_moves_smoothly() {
        let points = generate_mock_history(60);

        // Start bounded, and every daily step within the 0.5% volatility.
        assert!(points[0].price > 1880.0 && points[0].price < 2120.0);
        for pair in points.windows(2) {
            let ratio = pair[1].price / pair[0].price;
            assert!(ratio > 0.99 && ratio < 1.01, "daily step too large: {}", ratio);
        }
    }
}
