//! Grant-based token endpoint with input validation.
//! Used by: server.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TokenQuery {
    pub identity: Option<String>,
}

/// Any non-empty identity is accepted and signed verbatim.
fn require_identity(query: &TokenQuery) -> Result<&str> {
    match query.identity.as_deref() {
        Some(identity) if !identity.is_empty() => Ok(identity),
        _ => Err(Error::Validation(
            "token requires an Identity to be provided".into(),
        )),
    }
}

/// Issue a grant-based media token for the requested identity. The token is
/// returned bare in the response body.
pub async fn token(
    State(state): State<AppState>,
    Query(query): Query<TokenQuery>,
) -> Result<String> {
    let identity = require_identity(&query).map_err(|err| {
        state.metrics.record_validation_failure();
        err
    })?;
    let issuer = state.issuer.as_ref().ok_or_else(|| {
        state.metrics.record_issuance_failure();
        Error::Configuration(
            "grant credentials are not configured; set ROOMKEY_ACCOUNT_SID, \
             ROOMKEY_API_KEY_SID and ROOMKEY_API_KEY_SECRET"
                .into(),
        )
    })?;
    let token = issuer.issue(identity).map_err(|err| {
        state.metrics.record_issuance_failure();
        err
    })?;
    tracing::info!(identity = %identity, "grant token issued");
    state.metrics.record_grant_token();
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(identity: Option<&str>) -> TokenQuery {
        TokenQuery {
            identity: identity.map(str::to_owned),
        }
    }

    #[test]
    fn valid_identity_passes() {
        assert_eq!(require_identity(&query(Some("alice"))).unwrap(), "alice");
    }

    #[test]
    fn missing_identity_rejected_by_name() {
        let err = require_identity(&query(None)).unwrap_err();
        assert_eq!(err.to_string(), "token requires an Identity to be provided");
    }

    #[test]
    fn empty_identity_rejected() {
        assert!(require_identity(&query(Some(""))).is_err());
    }

    #[test]
    fn any_nonempty_identity_passes() {
        let long = "a".repeat(300);
        assert_eq!(require_identity(&query(Some(&long))).unwrap(), long);
        assert_eq!(
            require_identity(&query(Some("alice smith"))).unwrap(),
            "alice smith"
        );
    }
}
