//! Investment service - deposits, valuation and withdrawal
//!
//! Every investment mutation pairs with a ledger entry, and the pair commits
//! in a single database transaction. The withdrawal status flip is guarded
//! on the investment still being active, so two racing withdrawals cannot
//! both settle.

use std::sync::Arc;

use chrono::{Duration, Months, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::gold::{GoldError, GoldPriceService};

use super::model::{
    current_value, generate_reference_id, generate_transaction_id, gold_weight_oz,
    CreateInvestmentRequest, Investment, InvestmentStatus, PaymentMethod, Transaction,
    TransactionStatus, TransactionType,
};

/// Investment service errors
#[derive(Error, Debug)]
pub enum InvestmentError {
    #[error("{0}")]
    InvalidAmount(String),

    #[error("Investment not found")]
    NotFound,

    #[error("Not authorized to access this investment")]
    NotOwner,

    #[error("Investment is already {}", .0.as_str())]
    NotActive(InvestmentStatus),

    #[error("Price lookup failed: {0}")]
    PriceError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for InvestmentError {
    fn from(e: sqlx::Error) -> Self {
        InvestmentError::DatabaseError(e.to_string())
    }
}

impl From<GoldError> for InvestmentError {
    fn from(e: GoldError) -> Self {
        InvestmentError::PriceError(e.to_string())
    }
}

impl From<InvestmentError> for ApiError {
    fn from(e: InvestmentError) -> Self {
        match e {
            InvestmentError::InvalidAmount(msg) => ApiError::BadRequest(msg),
            InvestmentError::NotFound => ApiError::NotFound(e.to_string()),
            InvestmentError::NotOwner => ApiError::Forbidden(e.to_string()),
            InvestmentError::NotActive(_) => ApiError::BadRequest(e.to_string()),
            InvestmentError::PriceError(msg) => ApiError::InternalError(msg),
            InvestmentError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

/// Investment ledger service
pub struct InvestmentService {
    db_pool: PgPool,
    gold_service: Arc<GoldPriceService>,
}

impl InvestmentService {
    pub fn new(db_pool: PgPool, gold_service: Arc<GoldPriceService>) -> Self {
        Self {
            db_pool,
            gold_service,
        }
    }

    /// Create an investment from a deposit and record the deposit in the
    /// ledger, atomically.
    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateInvestmentRequest,
    ) -> Result<Investment, InvestmentError> {
        request
            .validate()
            .map_err(InvestmentError::InvalidAmount)?;

        let price_usd = self.gold_service.latest_price_usd().await?;
        let weight_oz = gold_weight_oz(request.amount, price_usd);

        let now = Utc::now();
        let maturity_date = now
            .checked_add_months(Months::new(12))
            .unwrap_or(now + Duration::days(365));

        let mut tx = self.db_pool.begin().await?;

        let investment: Investment = sqlx::query_as(
            r#"
            INSERT INTO investments (
                id, user_id, amount, gold_weight_oz, gold_price_at_purchase,
                status, maturity_date, transaction_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(request.amount)
        .bind(weight_oz)
        .bind(price_usd)
        .bind(InvestmentStatus::Active)
        .bind(maturity_date)
        .bind(generate_transaction_id())
        .fetch_one(&mut *tx)
        .await?;

        self.append_ledger_entry(
            &mut tx,
            user_id,
            Some(investment.id),
            TransactionType::Deposit,
            request.amount,
            "Investment deposit",
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            investment_id = %investment.id,
            amount = request.amount,
            gold_weight_oz = weight_oz,
            "Investment created"
        );

        Ok(investment)
    }

    /// All investments belonging to a user
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Investment>, InvestmentError> {
        let investments = sqlx::query_as(
            "SELECT * FROM investments WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(investments)
    }

    /// Fetch a single investment, enforcing ownership
    ///
    /// Admins may read any investment; the bypass applies to reads only.
    pub async fn get(
        &self,
        investment_id: Uuid,
        caller_id: Uuid,
        caller_is_admin: bool,
    ) -> Result<Investment, InvestmentError> {
        let investment = self.fetch(investment_id).await?;

        if investment.user_id != caller_id && !caller_is_admin {
            return Err(InvestmentError::NotOwner);
        }

        Ok(investment)
    }

    /// Withdraw an active investment at the current gold price
    ///
    /// Only the owning user may withdraw (no admin bypass). The status flip
    /// and the withdrawal ledger entry commit together; the guard on
    /// `status = 'active'` makes a second withdrawal lose instead of paying
    /// out twice. Returns the investment and the computed withdrawal amount,
    /// which is persisted only as the ledger entry's amount.
    pub async fn withdraw(
        &self,
        investment_id: Uuid,
        caller_id: Uuid,
    ) -> Result<(Investment, f64), InvestmentError> {
        let investment = self.fetch(investment_id).await?;

        if investment.user_id != caller_id {
            return Err(InvestmentError::NotOwner);
        }
        if investment.status != InvestmentStatus::Active {
            return Err(InvestmentError::NotActive(investment.status));
        }

        let price_usd = self.gold_service.latest_price_usd().await?;
        let withdrawal_amount = current_value(investment.gold_weight_oz, price_usd);

        let mut tx = self.db_pool.begin().await?;

        let updated: Option<Investment> = sqlx::query_as(
            r#"
            UPDATE investments
            SET status = 'withdrawn', withdrawal_date = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(investment_id)
        .fetch_optional(&mut *tx)
        .await?;

        let investment = match updated {
            Some(investment) => investment,
            None => {
                // Another withdrawal settled between our read and the update.
                tx.rollback().await?;
                let current = self.fetch(investment_id).await?;
                return Err(InvestmentError::NotActive(current.status));
            }
        };

        self.append_ledger_entry(
            &mut tx,
            caller_id,
            Some(investment.id),
            TransactionType::Withdrawal,
            withdrawal_amount,
            "Investment withdrawal",
        )
        .await?;

        tx.commit().await?;

        tracing::info!(
            user_id = %caller_id,
            investment_id = %investment.id,
            withdrawal_amount,
            "Investment withdrawn"
        );

        Ok((investment, withdrawal_amount))
    }

    /// The caller's ledger entries, newest first
    pub async fn ledger_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, InvestmentError> {
        let transactions = sqlx::query_as(
            "SELECT * FROM transactions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(transactions)
    }

    async fn fetch(&self, investment_id: Uuid) -> Result<Investment, InvestmentError> {
        sqlx::query_as("SELECT * FROM investments WHERE id = $1")
            .bind(investment_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(InvestmentError::NotFound)
    }

    async fn append_ledger_entry(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: Uuid,
        investment_id: Option<Uuid>,
        tx_type: TransactionType,
        amount: f64,
        description: &str,
    ) -> Result<Transaction, InvestmentError> {
        let entry = sqlx::query_as(
            r#"
            INSERT INTO transactions (
                id, user_id, investment_id, tx_type, amount, status,
                payment_method, description, reference_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(investment_id)
        .bind(tx_type)
        .bind(amount)
        .bind(TransactionStatus::Completed)
        .bind(PaymentMethod::System)
        .bind(description)
        .bind(generate_reference_id(tx_type))
        .fetch_one(&mut **tx)
        .await?;

        Ok(entry)
    }
}
