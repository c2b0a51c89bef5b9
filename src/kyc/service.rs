//! KYC service - persistence side of the KYC lifecycle
//!
//! The state machine in [`super::state`] decides what may happen; this
//! service makes it happen against the `users` table. Every status-changing
//! update is guarded on the status the caller read, so a concurrent review
//! loses cleanly instead of silently overwriting.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{KycStatus, User};

use super::model::{KycSubmissionFields, SubmittedDocuments};
use super::state::{self, KycStateError, ReviewAction};

/// KYC service errors
#[derive(Error, Debug)]
pub enum KycError {
    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    State(#[from] KycStateError),

    #[error("KYC record was reviewed concurrently, please reload and retry")]
    ReviewConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for KycError {
    fn from(e: sqlx::Error) -> Self {
        KycError::DatabaseError(e.to_string())
    }
}

impl From<KycError> for ApiError {
    fn from(e: KycError) -> Self {
        match e {
            KycError::UserNotFound => ApiError::NotFound(e.to_string()),
            KycError::State(state_err) => ApiError::BadRequest(state_err.to_string()),
            KycError::ReviewConflict => ApiError::Conflict(e.to_string()),
            KycError::DatabaseError(msg) => ApiError::DatabaseError(msg),
        }
    }
}

/// KYC workflow service
#[derive(Clone)]
pub struct KycService {
    db_pool: PgPool,
}

impl KycService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Fetch a user or fail with `UserNotFound`
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, KycError> {
        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or(KycError::UserNotFound)
    }

    /// Current KYC status of a user, for the pre-upload submit guard
    pub async fn status(&self, user_id: Uuid) -> Result<KycStatus, KycError> {
        let row: Option<(KycStatus,)> =
            sqlx::query_as("SELECT kyc_status FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.db_pool)
                .await?;
        row.map(|(status,)| status).ok_or(KycError::UserNotFound)
    }

    /// Apply a user submission: merge fields and document references, clear
    /// previous review messages, move to pending.
    ///
    /// Absent fields keep their stored value, so documents not re-uploaded
    /// survive a resubmission. The update only lands while the status still
    /// permits submission.
    pub async fn submit(
        &self,
        user_id: Uuid,
        fields: KycSubmissionFields,
        documents: SubmittedDocuments,
    ) -> Result<User, KycError> {
        let user = self.get_user(user_id).await?;
        state::check_submission(user.kyc_status)?;

        let updated: Option<User> = sqlx::query_as(
            r#"
            UPDATE users SET
                id_number = COALESCE($2, id_number),
                birth_date = COALESCE($3, birth_date),
                phone = COALESCE($4, phone),
                street = COALESCE($5, street),
                city = COALESCE($6, city),
                state = COALESCE($7, state),
                postal_code = COALESCE($8, postal_code),
                country = COALESCE($9, country),
                id_proof = COALESCE($10, id_proof),
                address_proof = COALESCE($11, address_proof),
                selfie = COALESCE($12, selfie),
                rejection_reason = NULL,
                resubmission_message = NULL,
                kyc_status = 'pending',
                updated_at = NOW()
            WHERE id = $1 AND kyc_status NOT IN ('pending', 'approved')
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&fields.id_number)
        .bind(fields.birth_date)
        .bind(&fields.phone)
        .bind(&fields.street)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.postal_code)
        .bind(&fields.country)
        .bind(&documents.id_proof)
        .bind(&documents.address_proof)
        .bind(&documents.selfie)
        .fetch_optional(&self.db_pool)
        .await?;

        let user = updated.ok_or(KycError::ReviewConflict)?;

        tracing::info!(user_id = %user_id, "KYC documents submitted");

        Ok(user)
    }

    /// All users currently awaiting review, oldest submission first
    pub async fn pending(&self) -> Result<Vec<User>, KycError> {
        let users = sqlx::query_as(
            "SELECT * FROM users WHERE kyc_status = 'pending' ORDER BY updated_at ASC",
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }

    /// Apply an admin review decision to a user's KYC record
    ///
    /// The update is compare-and-swapped on the status read at the start of
    /// the request; zero affected rows means another reviewer got there
    /// first and the caller receives a conflict.
    pub async fn review(
        &self,
        target_user_id: Uuid,
        reviewer_id: Uuid,
        action: ReviewAction,
    ) -> Result<User, KycError> {
        action.validate()?;

        let user = self.get_user(target_user_id).await?;
        let expected_status = user.kyc_status;
        let new_status = action.target_status();

        let updated: Option<User> = sqlx::query_as(
            r#"
            UPDATE users SET
                kyc_status = $3,
                rejection_reason = COALESCE($4, rejection_reason),
                resubmission_message = COALESCE($5, resubmission_message),
                reviewed_by = $6,
                reviewed_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND kyc_status = $2
            RETURNING *
            "#,
        )
        .bind(target_user_id)
        .bind(expected_status)
        .bind(new_status)
        .bind(action.rejection_reason())
        .bind(action.resubmission_message())
        .bind(reviewer_id)
        .fetch_optional(&self.db_pool)
        .await?;

        let user = updated.ok_or(KycError::ReviewConflict)?;

        tracing::info!(
            target = %target_user_id,
            reviewer = %reviewer_id,
            status = new_status.as_str(),
            "KYC review recorded"
        );

        Ok(user)
    }
}
