//! Investment ledger
//!
//! Deposit-backed gold holdings plus the append-only transaction ledger.

mod model;
mod service;

pub use model::{
    current_value, generate_reference_id, generate_transaction_id, gold_weight_oz,
    CreateInvestmentRequest, Investment, InvestmentStatus, PaymentMethod, Transaction,
    TransactionStatus, TransactionType, WithdrawalResponse, MIN_INVESTMENT_USD,
};
pub use service::{InvestmentError, InvestmentService};
