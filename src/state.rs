//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::issuer::GrantIssuer;
use crate::provider::TokenProvider;
use crate::telemetry::Metrics;

/// Both token paths are optional components; a missing one leaves the other
/// and the static file routes fully working.
pub struct AppStateInner {
    pub issuer: Option<GrantIssuer>,
    pub provider: Option<TokenProvider>,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state(config: &Config) -> AppState {
    let issuer = match &config.grant {
        Some(credentials) => Some(GrantIssuer::new(credentials.clone())),
        None => {
            tracing::warn!("grant credentials not configured, /token will return errors");
            None
        }
    };

    let provider =
        match Credentials::from_file(&config.credentials_path).and_then(TokenProvider::new) {
            Ok(provider) => Some(provider),
            Err(err) => {
                tracing::warn!(
                    path = %config.credentials_path.display(),
                    error = %err,
                    "credentials file unusable, /getToken will return errors"
                );
                None
            }
        };

    Arc::new(AppStateInner {
        issuer,
        provider,
        metrics: Metrics::new(),
    })
}

#[cfg(test)]
pub fn build_test_state() -> AppState {
    use crate::config::GrantCredentials;

    let grant = GrantCredentials {
        account_sid: "AC123".to_owned(),
        api_key_sid: "SK456".to_owned(),
        api_key_secret: "topsecret".to_owned(),
    };
    let credentials = Credentials::from_json(
        r#"{
            "accountSid": "AC123",
            "signingKeySid": "SK456",
            "signingKeySecret": "topsecret",
            "serviceSid": "IS789"
        }"#,
    )
    .expect("valid test credentials");
    Arc::new(AppStateInner {
        issuer: Some(GrantIssuer::new(grant)),
        provider: Some(TokenProvider::new(credentials).expect("resolvable test credentials")),
        metrics: Metrics::new(),
    })
}

#[cfg(test)]
pub fn build_unconfigured_state() -> AppState {
    Arc::new(AppStateInner {
        issuer: None,
        provider: None,
        metrics: Metrics::new(),
    })
}
