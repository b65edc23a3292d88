//! Credential-file token endpoint with input validation.
//! Used by: server.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GetTokenQuery {
    pub identity: Option<String>,
}

/// Any non-empty identity is accepted and signed verbatim.
fn require_identity(query: &GetTokenQuery) -> Result<&str> {
    match query.identity.as_deref() {
        Some(identity) if !identity.is_empty() => Ok(identity),
        _ => Err(Error::Validation(
            "getToken requires an Identity to be provided".into(),
        )),
    }
}

/// Issue a scoped token from the credentials file for the requested
/// identity. The token is returned bare in the response body.
pub async fn get_token(
    State(state): State<AppState>,
    Query(query): Query<GetTokenQuery>,
) -> Result<String> {
    let identity = require_identity(&query).map_err(|err| {
        state.metrics.record_validation_failure();
        err
    })?;
    let provider = state.provider.as_ref().ok_or_else(|| {
        state.metrics.record_issuance_failure();
        Error::Configuration("the credentials file is missing or unusable".into())
    })?;
    let token = provider.get_token(identity).map_err(|err| {
        state.metrics.record_issuance_failure();
        err
    })?;
    tracing::info!(identity = %identity, "scoped token issued");
    state.metrics.record_scoped_token();
    Ok(token)
}
