//! Price source abstraction
//!
//! Quote acquisition sits behind a trait so a real market-data feed can
//! replace the simulation without touching the service or its callers.

use async_trait::async_trait;
use rand::Rng;

use super::model::SpotQuote;

/// Supplier of fresh spot quotes
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Name recorded on persisted snapshots
    fn name(&self) -> &'static str;

    /// Produce the current spot quote
    async fn fetch_spot(&self) -> anyhow::Result<SpotQuote>;
}

/// Random-walk simulation around $2000/oz
///
/// Stands in for a market-data feed; quotes land within $2000 +/- 50 with a
/// 24h change within +/- 10.
pub struct SimulatedPriceSource;

#[async_trait]
impl PriceSource for SimulatedPriceSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch_spot(&self) -> anyhow::Result<SpotQuote> {
        Ok(simulate_quote())
    }
}

fn simulate_quote() -> SpotQuote {
    let mut rng = rand::thread_rng();

    let price = 2000.0 + rng.gen_range(-50.0..50.0);
    let change_24h = rng.gen_range(-10.0..10.0);
    let change_percent_24h = (change_24h / price) * 100.0;

    SpotQuote {
        price_usd: round2(price),
        change_24h: round2(change_24h),
        change_percent_24h: round2(change_percent_24h),
    }
}

/// Round to cents, matching what a price feed would deliver
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_quote_bounds() {
        for _ in 0..200 {
            let quote = simulate_quote();
            assert!(quote.price_usd >= 1950.0 && quote.price_usd <= 2050.0);
            assert!(quote.change_24h >= -10.0 && quote.change_24h <= 10.0);
            assert!(quote.change_percent_24h.abs() < 1.0);
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1999.996), 2000.0);
        assert_eq!(round2(2013.344), 2013.34);
        assert_eq!(round2(-9.994), -9.99);
    }

    #[tokio::test]
    async fn test_simulated_source_fetches() {
        let source = SimulatedPriceSource;
        assert_eq!(source.name(), "simulated");
        assert!(source.fetch_spot().await.is_ok());
    }
}
