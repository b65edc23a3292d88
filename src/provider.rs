//! Credential-file token provider: scoped access tokens for a chat/media
//! service instance, honoring legacy credential field names.
//! Used by: handlers::get_token, state.

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::token::claims::ScopedClaims;
use crate::token::signer;

/// Token lifetime when the credentials file sets none.
pub const DEFAULT_TOKEN_TTL: i64 = 3_600;

/// Issues scoped tokens from credentials resolved once at construction.
/// Requests never re-resolve fields or re-read the file.
pub struct TokenProvider {
    account_sid: String,
    key_sid: String,
    secret: String,
    service_sid: String,
    push_credential_sid: Option<String>,
    ttl: i64,
}

impl TokenProvider {
    /// Resolve the credential fields once. A deprecated alias that supplies
    /// the value is honored with a warning (an alias shadowed by its
    /// preferred field is silent); an unresolvable pair is a configuration
    /// error rather than an empty claim.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let secret = credentials.signing_secret().ok_or_else(|| {
            Error::Configuration("neither signingKeySecret nor authToken is set".into())
        })?;
        if secret.via_legacy_alias {
            tracing::warn!("the authToken field is deprecated, use signingKeySecret");
        }

        let key = credentials.signing_key().ok_or_else(|| {
            Error::Configuration("neither signingKeySid nor apiKey is set".into())
        })?;

        let service = credentials.service().ok_or_else(|| {
            Error::Configuration("neither serviceSid nor instanceSid is set".into())
        })?;
        if service.via_legacy_alias {
            tracing::warn!("the instanceSid field is deprecated, use serviceSid");
        }

        Ok(Self {
            account_sid: credentials.account_sid,
            key_sid: key.value,
            secret: secret.value,
            service_sid: service.value,
            push_credential_sid: credentials
                .push_credential_sid
                .filter(|sid| !sid.is_empty()),
            ttl: credentials.ttl.unwrap_or(DEFAULT_TOKEN_TTL),
        })
    }

    /// Issue a signed token for `identity`, scoped to the configured service
    /// instance.
    pub fn get_token(&self, identity: &str) -> Result<String> {
        let claims = ScopedClaims::new(
            &self.account_sid,
            &self.key_sid,
            identity,
            self.scopes(),
            self.ttl,
        );
        signer::sign(&claims, &self.secret, &self.key_sid)
    }

    /// Full access to the service instance, plus push registration when a
    /// push credential is configured.
    fn scopes(&self) -> Vec<String> {
        let mut scopes = vec![full_access_scope(&self.service_sid)];
        if let Some(push) = &self.push_credential_sid {
            scopes.push(push_registration_scope(&self.service_sid, push));
        }
        scopes
    }
}

fn full_access_scope(service_sid: &str) -> String {
    format!("scope:service:{service_sid}:full_access")
}

fn push_registration_scope(service_sid: &str, push_credential_sid: &str) -> String {
    format!("scope:service:{service_sid}:push_registration:{push_credential_sid}")
}
