//! Session token issuance and verification

use super::types::{Claims, SessionToken, SessionTokenHandler};
use crate::config::AuthConfig;
use crate::utils::error::{AccademiaError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;
use uuid::Uuid;

impl SessionTokenHandler {
    /// Create a handler from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.token_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: config.token_ttl,
            issuer: config.issuer.clone(),
        }
    }

    /// Issue a token for `user_id` valid from now
    pub fn issue_token(&self, user_id: Uuid) -> Result<String> {
        self.issue_token_at(user_id, Self::now()?)
    }

    /// Issue a token as if it had been issued at `issued_at` (unix seconds)
    pub fn issue_token_at(&self, user_id: Uuid, issued_at: u64) -> Result<String> {
        let claims = Claims {
            sub: user_id,
            iat: issued_at,
            exp: issued_at + self.ttl,
            iss: self.issuer.clone(),
            aud: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)?;

        debug!("Issued session token for user: {}", user_id);
        Ok(token)
    }

    /// Issue a token wrapped for the client
    pub fn issue_session(&self, user_id: Uuid) -> Result<SessionToken> {
        Ok(SessionToken {
            access_token: self.issue_token(user_id)?,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl,
        })
    }

    /// Decode and validate a token: signature, issuer, audience and expiry with no leeway
    pub fn decode_claims(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }

    /// User id carried by a valid token. Malformed, tampered and expired tokens all
    /// yield `None`.
    pub fn verify_token(&self, token: &str) -> Option<Uuid> {
        match self.decode_claims(token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                debug!("Session token rejected: {}", e);
                None
            }
        }
    }

    pub(super) fn now() -> Result<u64> {
        u64::try_from(chrono::Utc::now().timestamp())
            .map_err(|_| AccademiaError::internal("System clock is before the unix epoch"))
    }
}
