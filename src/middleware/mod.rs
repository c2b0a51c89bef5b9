//! Middleware for the goldvest API
//!
//! Request tracing and authentication extractors.

pub mod auth;
mod tracing;

pub use auth::{AdminUser, AuthenticatedUser};
pub use tracing::request_tracing;
