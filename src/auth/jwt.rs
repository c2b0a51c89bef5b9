//! JWT token generation and validation
//!
//! Handles creation and verification of access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token decoding failed: {0}")]
    DecodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// JWT claims for access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Account email
    pub email: String,
    /// User role
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Generate an access token for a user
///
/// # Arguments
/// * `user` - The authenticated user
/// * `secret` - JWT signing secret
/// * `ttl_seconds` - Token time-to-live in seconds
pub fn generate_access_token(
    user: &User,
    secret: &str,
    ttl_seconds: i64,
) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify and decode a JWT token
///
/// # Returns
/// * `Ok(Claims)` if token is valid
/// * `Err(JwtError)` if validation fails
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            JwtError::TokenExpired
        } else {
            JwtError::DecodingFailed(e.to_string())
        }
    })?;

    Ok(token_data.claims)
}

/// Extract user ID from claims
pub fn get_user_id_from_claims(claims: &Claims) -> Result<Uuid, JwtError> {
    Uuid::parse_str(&claims.sub).map_err(|e| JwtError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, KycDocuments, KycStatus, UserRole};
    use chrono::Utc;

    fn create_test_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            role: UserRole::User,
            phone: None,
            id_number: None,
            birth_date: None,
            address: Address::default(),
            kyc_status: KycStatus::NotSubmitted,
            kyc_documents: KycDocuments::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_generate_access_token() {
        let user = create_test_user();
        let secret = "test-secret-key";

        let token = generate_access_token(&user, secret, 900).unwrap();
        assert!(!token.is_empty());

        // Verify the token round-trips
        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "user");
        assert_eq!(get_user_id_from_claims(&claims).unwrap(), user.id);
    }

    #[test]
    fn test_admin_role_in_claims() {
        let user = User {
            role: UserRole::Admin,
            ..create_test_user()
        };
        let token = generate_access_token(&user, "test-secret-key", 900).unwrap();
        let claims = verify_token(&token, "test-secret-key").unwrap();
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_invalid_token() {
        let result = verify_token("invalid.token.here", "test-secret-key");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let user = create_test_user();
        let token = generate_access_token(&user, "secret1", 900).unwrap();
        let result = verify_token(&token, "secret2");
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        let user = create_test_user();
        // Expired well past the default validation leeway.
        let token = generate_access_token(&user, "test-secret-key", -3600).unwrap();
        let result = verify_token(&token, "test-secret-key");
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }
}
