//! HS256 JWT implementation of the TokenProvider port.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;
use crate::ports::{TokenClaims, TokenDecodeError, TokenProvider};

/// Wire shape of the JWT payload.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// Signs and validates HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct JwtTokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenProvider for JwtTokenProvider {
    fn encode(&self, claims: &TokenClaims, expires_in_minutes: i64) -> Result<String, DomainError> {
        let now = Utc::now();
        let payload = Claims {
            sub: claims.sub.clone(),
            email: claims.email.clone(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::minutes(expires_in_minutes)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("failed to sign token: {}", e)))
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, TokenDecodeError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenDecodeError::Expired,
                _ => TokenDecodeError::Invalid,
            }
        })?;

        Ok(TokenClaims {
            sub: data.claims.sub,
            email: data.claims.email,
        })
    }
}
