//! User profile management

mod model;
mod service;

pub use model::UpdateProfileRequest;
pub use service::{UserError, UserService};
