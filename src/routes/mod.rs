//! Route definitions for the goldvest API

mod admin;
mod auth;
mod gold;
mod investment;
mod user;

pub use admin::admin_routes;
pub use auth::auth_routes;
pub use gold::gold_routes;
pub use investment::investment_routes;
pub use user::user_routes;
