//! Compact HS256 token signing.
//! Used by: issuer, provider.

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::{Error, Result};

/// Serialize `claims` into a compact signed token (three base64url segments
/// separated by dots). The header names the signing key through `kid` so a
/// verifier holding the matching secret can check authenticity.
pub fn sign<T: Serialize>(claims: &T, secret: &str, key_sid: &str) -> Result<String> {
    if secret.is_empty() {
        return Err(Error::Signing("signing secret must not be empty".into()));
    }
    let mut header = Header::default();
    header.kid = Some(key_sid.to_owned());
    Ok(encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::claims::ScopedClaims;

    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

    fn claims() -> ScopedClaims {
        ScopedClaims::new(
            "AC123",
            "SK456",
            "alice",
            vec!["scope:service:IS789:full_access".to_owned()],
            600,
        )
    }

    #[test]
    fn token_has_three_decodable_segments() -> crate::error::Result<()> {
        let token = sign(&claims(), "topsecret", "SK456")?;
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        for segment in segments {
            assert!(!segment.is_empty());
            assert!(URL_SAFE_NO_PAD.decode(segment).is_ok());
        }
        Ok(())
    }

    #[test]
    fn header_names_the_signing_key() -> crate::error::Result<()> {
        let token = sign(&claims(), "topsecret", "SK456")?;
        let header = decode_header(&token).expect("decodable header");
        assert_eq!(header.kid.as_deref(), Some("SK456"));
        assert_eq!(header.alg, Algorithm::HS256);
        Ok(())
    }

    #[test]
    fn holder_of_the_secret_recovers_the_claims() -> crate::error::Result<()> {
        let original = claims();
        let token = sign(&original, "topsecret", "SK456")?;
        let decoded = decode::<ScopedClaims>(
            &token,
            &DecodingKey::from_secret(b"topsecret"),
            &Validation::new(Algorithm::HS256),
        )
        .expect("valid token");
        assert_eq!(decoded.claims, original);
        Ok(())
    }

    #[test]
    fn wrong_secret_fails_verification() -> crate::error::Result<()> {
        let token = sign(&claims(), "topsecret", "SK456")?;
        let result = decode::<ScopedClaims>(
            &token,
            &DecodingKey::from_secret(b"othersecret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn tampered_payload_fails_verification() -> crate::error::Result<()> {
        let token = sign(&claims(), "topsecret", "SK456")?;
        let mut segments: Vec<String> = token.split('.').map(String::from).collect();
        let mut other = claims();
        other.identity = "mallory".to_owned();
        segments[1] = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&other)?);
        let tampered = segments.join(".");
        let result = decode::<ScopedClaims>(
            &tampered,
            &DecodingKey::from_secret(b"topsecret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn empty_secret_is_rejected_before_signing() {
        let result = sign(&claims(), "", "SK456");
        assert!(matches!(result, Err(Error::Signing(_))));
    }
}
