//! JWT claim payloads for both issuance paths.
//! Used by: token::signer, issuer, provider.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Capability grant authorizing use of the media-session service.
///
/// Serializes to an empty object; the grant's presence is the permission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaGrant {}

/// Grant payload carried by grant-based tokens. The identity names the
/// subject the grants apply to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grants {
    pub identity: String,
    pub media: MediaGrant,
}

/// Claims for tokens issued by the grant-based path.
///
/// `iss` carries the signing key id and `sub` the account id so a verifier
/// can locate the right secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantClaims {
    pub jti: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub grants: Grants,
}

impl GrantClaims {
    pub fn new(account_sid: &str, key_sid: &str, identity: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            jti: new_jti(key_sid),
            iss: key_sid.to_owned(),
            sub: account_sid.to_owned(),
            iat: now,
            exp: now + ttl_seconds,
            grants: Grants {
                identity: identity.to_owned(),
                media: MediaGrant {},
            },
        }
    }
}

/// Claims for tokens issued by the credential-file path: the identity plus
/// the scope strings naming what it may access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedClaims {
    pub jti: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub identity: String,
    pub scopes: Vec<String>,
}

impl ScopedClaims {
    pub fn new(
        account_sid: &str,
        key_sid: &str,
        identity: &str,
        scopes: Vec<String>,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            jti: new_jti(key_sid),
            iss: key_sid.to_owned(),
            sub: account_sid.to_owned(),
            iat: now,
            exp: now + ttl_seconds,
            identity: identity.to_owned(),
            scopes,
        }
    }
}

/// Unique token id: the signing key id plus a random suffix.
fn new_jti(key_sid: &str) -> String {
    format!("{}-{}", key_sid, uuid::Uuid::new_v4().simple())
}
