use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::types::{error::AppError, token::Identity};

/// Issues and verifies bearer tokens. Tokens carry `{id, role}` and nothing else: no expiry,
/// no issued-at, so rotating the secret is the only way to invalidate them.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), identity, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        jsonwebtoken::decode::<Identity>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}
