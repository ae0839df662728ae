//! Authentication use cases.

mod errors;
mod read_models;
mod service;

pub use errors::AuthError;
pub use read_models::CurrentUserView;
pub use service::AuthService;
