//! Security adapters: password hashing and token signing.

mod argon2;
mod jwt;

pub use self::argon2::Argon2PasswordHasher;
pub use jwt::JwtTokenProvider;
