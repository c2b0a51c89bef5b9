//! Authentication models for the goldvest server

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserResponse;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth token response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[test]
    fn test_register_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let req = RegisterRequest {
            password: "abc".to_string(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_empty_name() {
        let req = RegisterRequest {
            first_name: String::new(),
            ..valid_request()
        };
        assert!(req.validate().is_err());
    }
}
