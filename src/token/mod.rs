//! Token claim construction and signing.
//! Used by: issuer, provider.

pub mod claims;
pub mod signer;
