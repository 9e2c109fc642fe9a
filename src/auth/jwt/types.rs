//! Session token types

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct SessionTokenHandler {
    /// Encoding key for signing tokens
    pub(super) encoding_key: EncodingKey,
    /// Decoding key for verifying tokens
    pub(super) decoding_key: DecodingKey,
    pub(super) algorithm: Algorithm,
    /// Token lifetime in seconds
    pub(super) ttl: u64,
    /// Issuer, also used as audience
    pub(super) issuer: String,
}

impl std::fmt::Debug for SessionTokenHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenHandler")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .field("encoding_key", &"[REDACTED]")
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

/// Session token claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Token ID
    pub jti: String,
}

/// Token returned to the client after sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: u64,
}
