//! Gold price tracking
//!
//! Append-only price log with a staleness-checked spot accessor, behind a
//! swappable quote source.

mod model;
mod service;
mod source;

pub use model::{GoldPrice, GoldPriceResponse, HistoryQuery, PricePoint, SpotQuote};
pub use service::{generate_mock_history, GoldError, GoldPriceService, DEFAULT_PRICE_USD};
pub use source::{PriceSource, SimulatedPriceSource};
