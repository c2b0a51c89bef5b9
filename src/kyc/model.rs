//! KYC request/response DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{KycDocuments, KycStatus, User};

/// Text fields accepted alongside the uploaded documents
#[derive(Debug, Default)]
pub struct KycSubmissionFields {
    pub id_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Public paths of the documents stored during this submission
///
/// Fields left `None` keep whatever reference a previous submission stored.
#[derive(Debug, Default)]
pub struct SubmittedDocuments {
    pub id_proof: Option<String>,
    pub address_proof: Option<String>,
    pub selfie: Option<String>,
}

/// Response payload for a successful submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmissionResponse {
    pub kyc_status: KycStatus,
    pub documents: KycDocuments,
}

/// Body of the admin reject endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectKycRequest {
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Body of the admin resubmission-request endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResubmitKycRequest {
    #[serde(default)]
    pub resubmission_message: Option<String>,
}

/// Summary returned to the reviewing admin
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewedUserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub kyc_status: KycStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resubmission_message: Option<String>,
}

impl From<User> for ReviewedUserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            kyc_status: user.kyc_status,
            rejection_reason: user.kyc_documents.rejection_reason,
            resubmission_message: user.kyc_documents.resubmission_message,
        }
    }
}
