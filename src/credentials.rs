//! Credentials file model and legacy field resolution.
//! Used by: provider, state.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Contents of the credentials file backing the token provider.
///
/// `authToken` and `instanceSid` are deprecated aliases for
/// `signingKeySecret` and `serviceSid`; `apiKey` is accepted for
/// `signingKeySid` without a warning.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub account_sid: String,
    #[serde(default)]
    pub signing_key_sid: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub signing_key_secret: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub service_sid: Option<String>,
    #[serde(default)]
    pub instance_sid: Option<String>,
    #[serde(default)]
    pub push_credential_sid: Option<String>,
    /// Token lifetime in seconds; the provider default applies when unset.
    #[serde(default)]
    pub ttl: Option<i64>,
}

/// A credential value together with how it was resolved, so deprecation
/// warnings can be decided separately from the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub via_legacy_alias: bool,
}

/// Prefer the primary field, fall back to the legacy alias. Empty strings
/// count as absent.
pub fn resolve(primary: Option<&str>, legacy: Option<&str>) -> Option<Resolved> {
    if let Some(value) = primary.filter(|v| !v.is_empty()) {
        return Some(Resolved {
            value: value.to_owned(),
            via_legacy_alias: false,
        });
    }
    legacy.filter(|v| !v.is_empty()).map(|value| Resolved {
        value: value.to_owned(),
        via_legacy_alias: true,
    })
}

impl Credentials {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn signing_secret(&self) -> Option<Resolved> {
        resolve(self.signing_key_secret.as_deref(), self.auth_token.as_deref())
    }

    pub fn signing_key(&self) -> Option<Resolved> {
        resolve(self.signing_key_sid.as_deref(), self.api_key.as_deref())
    }

    pub fn service(&self) -> Option<Resolved> {
        resolve(self.service_sid.as_deref(), self.instance_sid.as_deref())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_sid", &self.account_sid)
            .field("signing_key_sid", &self.signing_key_sid)
            .field("api_key", &self.api_key)
            .field(
                "signing_key_secret",
                &self.signing_key_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("service_sid", &self.service_sid)
            .field("instance_sid", &self.instance_sid)
            .field("push_credential_sid", &self.push_credential_sid)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_field_wins_over_legacy_alias() {
        let resolved = resolve(Some("primary"), Some("legacy")).unwrap();
        assert_eq!(resolved.value, "primary");
        assert!(!resolved.via_legacy_alias);
    }

    #[test]
    fn legacy_alias_is_tagged() {
        let resolved = resolve(None, Some("legacy")).unwrap();
        assert_eq!(resolved.value, "legacy");
        assert!(resolved.via_legacy_alias);
    }

    #[test]
    fn empty_primary_falls_back_to_legacy() {
        let resolved = resolve(Some(""), Some("legacy")).unwrap();
        assert_eq!(resolved.value, "legacy");
        assert!(resolved.via_legacy_alias);
    }

    #[test]
    fn nothing_resolves_to_nothing() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some(""), Some("")), None);
    }

    #[test]
    fn parses_modern_fields() {
        let credentials = Credentials::from_json(
            r#"{
                "accountSid": "AC123",
                "signingKeySid": "SK456",
                "signingKeySecret": "topsecret",
                "serviceSid": "IS789",
                "pushCredentialSid": "CRabc",
                "ttl": 600
            }"#,
        )
        .unwrap();
        assert_eq!(credentials.account_sid, "AC123");
        assert_eq!(credentials.signing_key().unwrap().value, "SK456");
        assert_eq!(credentials.signing_secret().unwrap().value, "topsecret");
        assert_eq!(credentials.service().unwrap().value, "IS789");
        assert_eq!(credentials.push_credential_sid.as_deref(), Some("CRabc"));
        assert_eq!(credentials.ttl, Some(600));
    }

    #[test]
    fn parses_legacy_fields() {
        let credentials = Credentials::from_json(
            r#"{
                "accountSid": "AC123",
                "apiKey": "SK456",
                "authToken": "sharedsecret",
                "instanceSid": "IS789"
            }"#,
        )
        .unwrap();
        let secret = credentials.signing_secret().unwrap();
        assert_eq!(secret.value, "sharedsecret");
        assert!(secret.via_legacy_alias);
        let service = credentials.service().unwrap();
        assert_eq!(service.value, "IS789");
        assert!(service.via_legacy_alias);
        let key = credentials.signing_key().unwrap();
        assert_eq!(key.value, "SK456");
        assert!(key.via_legacy_alias);
    }

    #[test]
    fn account_sid_is_required() {
        let result = Credentials::from_json(r#"{"signingKeySecret": "s", "serviceSid": "IS1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_a_file() -> crate::error::Result<()> {
        let path = std::env::temp_dir().join(format!(
            "roomkey-credentials-{}.json",
            uuid::Uuid::new_v4().simple()
        ));
        std::fs::write(
            &path,
            r#"{"accountSid": "AC1", "authToken": "t", "serviceSid": "IS1"}"#,
        )?;
        let credentials = Credentials::from_file(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(credentials.account_sid, "AC1");
        assert!(credentials.signing_secret().unwrap().via_legacy_alias);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = Credentials::from_file("/nonexistent/roomkey-credentials.json");
        assert!(result.is_err());
    }

    #[test]
    fn debug_never_prints_secret_material() {
        let credentials = Credentials::from_json(
            r#"{"accountSid": "AC1", "authToken": "hunter2", "signingKeySecret": "hunter3", "serviceSid": "IS1"}"#,
        )
        .unwrap();
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("hunter3"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
