//! HTTP handler modules.
//! Used by: server.

pub mod get_token;
pub mod health;
pub mod metrics;
pub mod token;
