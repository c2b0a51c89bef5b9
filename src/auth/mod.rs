//! Authentication module
//!
//! Password-based registration/login and JWT access tokens.

pub mod jwt;
mod service;

pub use jwt::{generate_access_token, get_user_id_from_claims, verify_token, Claims, JwtError};
pub use service::{AuthError, AuthService};
