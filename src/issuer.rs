//! Grant-based access token issuer backed by environment credentials.
//! Used by: handlers::token, state.

use crate::config::GrantCredentials;
use crate::error::Result;
use crate::token::claims::GrantClaims;
use crate::token::signer;

/// Longest a participant may stay in a media session: 4 hours.
pub const MAX_SESSION_DURATION: i64 = 14_400;

/// Issues tokens carrying a media-session grant, signed with the account's
/// API key. Stateless; every call builds a fresh claims payload.
pub struct GrantIssuer {
    credentials: GrantCredentials,
}

impl GrantIssuer {
    pub fn new(credentials: GrantCredentials) -> Self {
        Self { credentials }
    }

    /// Issue a signed token granting `identity` use of the media-session
    /// service for the maximum session duration.
    pub fn issue(&self, identity: &str) -> Result<String> {
        let claims = GrantClaims::new(
            &self.credentials.account_sid,
            &self.credentials.api_key_sid,
            identity,
            MAX_SESSION_DURATION,
        );
        signer::sign(
            &claims,
            &self.credentials.api_key_secret,
            &self.credentials.api_key_sid,
        )
    }
}
