//! Investment ledger tests
//!
//! Valuation math, amount guards, generated id formats and the price
//! service's mock history fallback.

use goldvest_server::gold::{generate_mock_history, DEFAULT_PRICE_USD};
use goldvest_server::investment::{
    current_value, generate_reference_id, generate_transaction_id, gold_weight_oz,
    CreateInvestmentRequest, InvestmentError, InvestmentStatus, TransactionType,
    MIN_INVESTMENT_USD,
};

// ============================================================================
// Amount Validation Tests
// ============================================================================

#[test]
fn test_fifty_dollars_is_below_minimum() {
    let err = CreateInvestmentRequest { amount: 50.0 }.validate().unwrap_err();
    assert_eq!(err, "Minimum investment amount is $100");
}

#[test]
fn test_minimum_is_inclusive() {
    assert!(CreateInvestmentRequest {
        amount: MIN_INVESTMENT_USD
    }
    .validate()
    .is_ok());
}

// ============================================================================
// Valuation Tests
// ============================================================================

#[test]
fn test_thousand_dollars_at_default_price_buys_half_ounce() {
    assert_eq!(gold_weight_oz(1000.0, DEFAULT_PRICE_USD), 0.5);
}

#[test]
fn test_withdrawal_value_follows_the_price() {
    let weight = gold_weight_oz(1000.0, 2000.0);

    // Price up 10% -> value up 10%.
    assert_eq!(current_value(weight, 2200.0), 1100.0);
    // Price down -> value down.
    assert_eq!(current_value(weight, 1600.0), 800.0);
    // Flat price round-trips the deposit.
    assert!((current_value(weight, 2000.0) - 1000.0).abs() < 1e-9);
}

#[test]
fn test_default_price_is_two_thousand() {
    assert_eq!(DEFAULT_PRICE_USD, 2000.0);
}

// ============================================================================
// Status and Error Message Tests
// ============================================================================

#[test]
fn test_withdrawing_non_active_names_current_status() {
    let err = InvestmentError::NotActive(InvestmentStatus::Withdrawn);
    assert_eq!(err.to_string(), "Investment is already withdrawn");

    let err = InvestmentError::NotActive(InvestmentStatus::Completed);
    assert!(err.to_string().contains("completed"));
}

#[test]
fn test_ownership_error_message() {
    assert_eq!(
        InvestmentError::NotOwner.to_string(),
        "Not authorized to access this investment"
    );
}

// ============================================================================
// Generated Id Tests
// ============================================================================

#[test]
fn test_transaction_id_shape() {
    let id = generate_transaction_id();
    assert!(id.starts_with("INV-"));
    assert_eq!(id.len(), "INV-".len() + 9);
}

#[test]
fn test_transaction_ids_are_not_constant() {
    let a = generate_transaction_id();
    let ids: Vec<String> = (0..20).map(|_| generate_transaction_id()).collect();
    assert!(ids.iter().any(|id| id != &a));
}

#[test]
fn test_reference_id_encodes_type() {
    assert!(generate_reference_id(TransactionType::Deposit).starts_with("D-"));
    assert!(generate_reference_id(TransactionType::Withdrawal).starts_with("W-"));
}

// ============================================================================
// Mock History Tests
// ============================================================================

#[test]
fn test_mock_history_covers_requested_window() {
    let points = generate_mock_history(30);
    assert_eq!(points.len(), 31);

    let span = points.last().unwrap().date - points.first().unwrap().date;
    assert_eq!(span.num_days(), 30);
}

#[test]
fn test_mock_history_prices_stay_realistic() {
    let points = generate_mock_history(90);
    for point in &points {
        assert!(
            point.price > 1000.0 && point.price < 3000.0,
            "price wandered out of range: {}",
            point.price
        );
    }
}
