//! Session token utility functions

use super::types::SessionTokenHandler;

impl SessionTokenHandler {
    /// Extract token from an Authorization header value
    pub fn extract_token_from_header(header_value: &str) -> Option<&str> {
        let (scheme, token) = header_value.trim().split_once(' ')?;
        let token = token.trim();
        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Some(token)
        } else {
            None
        }
    }

    /// Token lifetime in seconds
    pub fn ttl(&self) -> u64 {
        self.ttl
    }
}
