//! User profile and KYC submission handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::NaiveDate;

use super::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::kyc::{
    check_submission, DocumentKind, KycSubmissionFields, KycSubmissionResponse,
    SubmittedDocuments,
};
use crate::models::{ApiResponse, UserResponse};
use crate::state::AppState;
use crate::users::UpdateProfileRequest;

/// GET /api/users/profile - Current user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.get(user.user_id).await?;

    Ok(Json(ApiResponse::data(user.into())))
}

/// PUT /api/users/profile - Partial profile update
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_service.update_profile(user.user_id, req).await?;

    Ok(Json(ApiResponse::data(user.into())))
}

/// POST /api/users/kyc - Submit KYC documents and personal details
///
/// Multipart form with up to three files (`idProof`, `addressProof`,
/// `selfie`) and the personal/address text fields. The submission guard
/// runs before any file bytes are accepted.
pub async fn submit_kyc(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    mut multipart: Multipart,
) -> ApiResult<Json<ApiResponse<KycSubmissionResponse>>> {
    let status = state.kyc_service.status(user.user_id).await?;
    check_submission(status).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let mut fields = KycSubmissionFields::default();
    let mut documents = SubmittedDocuments::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if let Some(kind) = DocumentKind::from_field_name(&name) {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
            if bytes.is_empty() {
                continue;
            }

            let path = state
                .document_store
                .save(user.user_id, kind, &file_name, &bytes)
                .await?;

            match kind {
                DocumentKind::IdProof => documents.id_proof = Some(path),
                DocumentKind::AddressProof => documents.address_proof = Some(path),
                DocumentKind::Selfie => documents.selfie = Some(path),
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }

            match name.as_str() {
                "idNumber" => fields.id_number = Some(value),
                "birthDate" => {
                    let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
                        ApiError::BadRequest("birthDate must be formatted YYYY-MM-DD".to_string())
                    })?;
                    fields.birth_date = Some(parsed);
                }
                "phone" => fields.phone = Some(value),
                "street" => fields.street = Some(value),
                "city" => fields.city = Some(value),
                "state" => fields.state = Some(value),
                "postalCode" => fields.postal_code = Some(value),
                "country" => fields.country = Some(value),
                // Unknown fields are ignored rather than rejected.
                _ => {}
            }
        }
    }

    let updated = state
        .kyc_service
        .submit(user.user_id, fields, documents)
        .await?;

    Ok(Json(ApiResponse::with_message(
        KycSubmissionResponse {
            kyc_status: updated.kyc_status,
            documents: updated.kyc_documents,
        },
        "KYC documents submitted successfully",
    )))
}
