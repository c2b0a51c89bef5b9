//! Investment and ledger models

use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

/// Minimum accepted deposit in USD
pub const MIN_INVESTMENT_USD: f64 = 100.0;

/// Investment model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub gold_weight_oz: f64,
    pub gold_price_at_purchase: f64,
    pub status: InvestmentStatus,
    pub withdrawal_date: Option<DateTime<Utc>>,
    pub maturity_date: DateTime<Utc>,
    pub return_rate: f64,
    pub fees: f64,
    pub notes: Option<String>,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Investment status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "investment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Active,
    Withdrawn,
    Completed,
}

impl InvestmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Active => "active",
            InvestmentStatus::Withdrawn => "withdrawn",
            InvestmentStatus::Completed => "completed",
        }
    }
}

/// Ledger entry model; rows are append-only
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub investment_id: Option<Uuid>,
    pub tx_type: TransactionType,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub payment_method: PaymentMethod,
    pub description: Option<String>,
    pub reference_id: String,
    pub created_at: DateTime<Utc>,
}

/// Ledger entry types
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Interest,
    Fee,
}

impl TransactionType {
    /// Prefix used in generated reference ids
    pub fn reference_prefix(&self) -> char {
        match self {
            TransactionType::Deposit => 'D',
            TransactionType::Withdrawal => 'W',
            TransactionType::Interest => 'I',
            TransactionType::Fee => 'F',
        }
    }
}

/// Ledger entry status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "transaction_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
}

/// Payment channels a ledger entry can settle through
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "payment_method", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    CreditCard,
    Paypal,
    Crypto,
    System,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request DTO for POST /api/investments
#[derive(Debug, Deserialize)]
pub struct CreateInvestmentRequest {
    pub amount: f64,
}

impl CreateInvestmentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() || self.amount < MIN_INVESTMENT_USD {
            return Err("Minimum investment amount is $100".to_string());
        }
        Ok(())
    }
}

/// Response DTO for a withdrawal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResponse {
    pub investment: Investment,
    pub withdrawal_amount: f64,
}

// ============================================================================
// Valuation math and id generation
// ============================================================================

/// Ounces of gold implied by a deposit at the given price per ounce
pub fn gold_weight_oz(amount_usd: f64, price_usd: f64) -> f64 {
    amount_usd / price_usd
}

/// Current USD value of a holding at the given price per ounce
pub fn current_value(weight_oz: f64, price_usd: f64) -> f64 {
    weight_oz * price_usd
}

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an investment transaction id of the form `INV-XXXXXXXXX`
pub fn generate_transaction_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("INV-{}", suffix)
}

/// Generate a ledger reference id: type prefix, epoch millis, random suffix
pub fn generate_reference_id(tx_type: TransactionType) -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}-{}-{}",
        tx_type.reference_prefix(),
        Utc::now().timestamp_millis(),
        rng.gen_range(0..1000)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_amount_guard() {
        assert!(CreateInvestmentRequest { amount: 50.0 }.validate().is_err());
        assert!(CreateInvestmentRequest { amount: 99.99 }.validate().is_err());
        assert!(CreateInvestmentRequest { amount: 100.0 }.validate().is_ok());
        assert!(CreateInvestmentRequest { amount: 1000.0 }.validate().is_ok());
    }

    #[test]
    fn test_minimum_amount_guard_rejects_non_finite() {
        assert!(CreateInvestmentRequest { amount: f64::NAN }.validate().is_err());
        assert!(CreateInvestmentRequest {
            amount: f64::INFINITY
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_gold_weight_calculation() {
        assert_eq!(gold_weight_oz(1000.0, 2000.0), 0.5);
        assert_eq!(gold_weight_oz(2000.0, 2000.0), 1.0);
        assert_eq!(gold_weight_oz(100.0, 2000.0), 0.05);
    }

    #[test]
    fn test_current_value_round_trips_at_constant_price() {
        let weight = gold_weight_oz(1500.0, 2000.0);
        assert!((current_value(weight, 2000.0) - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_current_value_tracks_price() {
        let weight = gold_weight_oz(1000.0, 2000.0);
        assert_eq!(current_value(weight, 2200.0), 1100.0);
        assert_eq!(current_value(weight, 1800.0), 900.0);
    }

    #[test]
    fn test_transaction_id_format() {
        for _ in 0..50 {
            let id = generate_transaction_id();
            assert_eq!(id.len(), 13);
            assert!(id.starts_with("INV-"));
            assert!(id[4..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_reference_id_prefixes() {
        assert!(generate_reference_id(TransactionType::Deposit).starts_with("D-"));
        assert!(generate_reference_id(TransactionType::Withdrawal).starts_with("W-"));
        assert!(generate_reference_id(TransactionType::Interest).starts_with("I-"));
        assert!(generate_reference_id(TransactionType::Fee).starts_with("F-"));
    }
}
