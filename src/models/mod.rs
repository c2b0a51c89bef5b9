//! Data models for the goldvest server

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod auth;
pub use auth::*;

/// User model
///
/// The address and KYC document groups are value objects flattened over
/// dedicated columns of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub id_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    #[sqlx(flatten)]
    pub address: Address,
    pub kyc_status: KycStatus,
    #[sqlx(flatten)]
    pub kyc_documents: KycDocuments,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User roles
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// KYC verification status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "kyc_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
    ResubmissionRequested,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotSubmitted => "not_submitted",
            KycStatus::Pending => "pending",
            KycStatus::Approved => "approved",
            KycStatus::Rejected => "rejected",
            KycStatus::ResubmissionRequested => "resubmission_requested",
        }
    }
}

/// Postal address value object embedded in the user record
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// KYC document references and review metadata embedded in the user record
///
/// `reviewed_by`/`reviewed_at` are written only by admin review actions.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct KycDocuments {
    pub id_proof: Option<String>,
    pub address_proof: Option<String>,
    pub selfie: Option<String>,
    pub rejection_reason: Option<String>,
    pub resubmission_message: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Sanitized user representation returned by the API (never the hash)
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub id_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Address,
    pub kyc_status: KycStatus,
    pub kyc_documents: KycDocuments,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            id_number: user.id_number,
            birth_date: user.birth_date,
            address: user.address,
            kyc_status: user.kyc_status,
            kyc_documents: user.kyc_documents,
            created_at: user.created_at,
        }
    }
}

/// API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Successful response carrying a payload and a human-readable message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response with its count
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len() as i64),
            data: Some(items),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Failed response carrying only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_data() {
        let resp = ApiResponse::data(42u32);
        assert!(resp.success);
        assert_eq!(resp.data, Some(42));
        assert!(resp.message.is_none());
        assert!(resp.count.is_none());
    }

    #[test]
    fn test_envelope_list_counts() {
        let resp = ApiResponse::list(vec!["a", "b", "c"]);
        assert!(resp.success);
        assert_eq!(resp.count, Some(3));
    }

    #[test]
    fn test_envelope_failure_skips_absent_fields() {
        let resp = ApiResponse::failure("User not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");
        assert!(json.get("data").is_none());
        assert!(json.get("count").is_none());
    }

    #[test]
    fn test_user_response_drops_password_hash() {
        let json = serde_json::to_string(&sample_user_response()).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("kycStatus"));
    }

    fn sample_user_response() -> UserResponse {
        UserResponse {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::User,
            phone: None,
            id_number: None,
            birth_date: None,
            address: Address::default(),
            kyc_status: KycStatus::NotSubmitted,
            kyc_documents: KycDocuments::default(),
            created_at: Utc::now(),
        }
    }
}
