//! User domain module.
//!
//! Users are read-only to this core: they are provisioned out of band and
//! the only domain behaviour they carry is the active-account gate.

mod errors;
mod model;
mod role;

pub use errors::UserError;
pub use model::User;
pub use role::RoleName;
