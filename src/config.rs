//! Environment configuration, read once at startup.
//! Used by: main, state, server.

use std::fmt;
use std::path::PathBuf;

/// Credentials for the grant-based issuer, sourced from the environment.
#[derive(Clone)]
pub struct GrantCredentials {
    pub account_sid: String,
    pub api_key_sid: String,
    pub api_key_secret: String,
}

impl GrantCredentials {
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            non_empty_var("ROOMKEY_ACCOUNT_SID"),
            non_empty_var("ROOMKEY_API_KEY_SID"),
            non_empty_var("ROOMKEY_API_KEY_SECRET"),
        )
    }

    /// All three values or nothing; a partial set is reported and discarded
    /// so the server still starts for the credential-file path.
    pub fn from_parts(
        account_sid: Option<String>,
        api_key_sid: Option<String>,
        api_key_secret: Option<String>,
    ) -> Option<Self> {
        match (account_sid, api_key_sid, api_key_secret) {
            (Some(account_sid), Some(api_key_sid), Some(api_key_secret)) => Some(Self {
                account_sid,
                api_key_sid,
                api_key_secret,
            }),
            (None, None, None) => None,
            _ => {
                tracing::warn!(
                    "incomplete grant issuer environment; set all of ROOMKEY_ACCOUNT_SID, \
                     ROOMKEY_API_KEY_SID and ROOMKEY_API_KEY_SECRET"
                );
                None
            }
        }
    }
}

impl fmt::Debug for GrantCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrantCredentials")
            .field("account_sid", &self.account_sid)
            .field("api_key_sid", &self.api_key_sid)
            .field("api_key_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub grant: Option<GrantCredentials>,
    pub credentials_path: PathBuf,
    pub public_dir: PathBuf,
    pub demos_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            grant: GrantCredentials::from_env(),
            credentials_path: path_var("ROOMKEY_CREDENTIALS_FILE", "credentials.json"),
            public_dir: path_var("ROOMKEY_PUBLIC_DIR", "public"),
            demos_dir: path_var("ROOMKEY_DEMOS_DIR", "demos"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn path_var(name: &str, default: &str) -> PathBuf {
    non_empty_var(name).map_or_else(|| PathBuf::from(default), PathBuf::from)
}
