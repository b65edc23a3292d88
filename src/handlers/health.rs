//! Health check endpoint.
//! Used by: server.

pub async fn health() -> &'static str {
    "OK"
}
