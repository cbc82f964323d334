use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

/// Expiry time of a JWT, read without verifying the signature
///
/// The client has no key to verify with; the backend rejects forged
/// tokens anyway. Returns `None` for opaque tokens and tokens without `exp`.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims = HashSet::new();

    match decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data
            .claims
            .exp
            .and_then(|exp| DateTime::from_timestamp(exp, 0)),
        Err(e) => {
            debug!("Token is not a decodable JWT: {}", e);
            None
        }
    }
}

/// Only a token with a readable `exp` in the past counts as expired
pub fn is_token_expired(token: &str, now: DateTime<Utc>) -> bool {
    token_expiry(token)
        .map(|expiry| expiry <= now)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: i64,
    }

    fn make_token(exp: i64) -> String {
        let claims = TestClaims {
            sub: "user@example.com".to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_reads_expiry_without_secret() {
        let token = make_token(1_900_000_000);
        let expiry = token_expiry(&token).unwrap();
        assert_eq!(expiry.timestamp(), 1_900_000_000);
    }

    #[test]
    fn test_expired_token() {
        let now = DateTime::from_timestamp(1_800_000_000, 0).unwrap();
        assert!(is_token_expired(&make_token(1_700_000_000), now));
        assert!(!is_token_expired(&make_token(1_900_000_000), now));
    }

    #[test]
    fn test_opaque_token_never_expires() {
        let now = Utc::now();
        assert!(token_expiry("not-a-jwt").is_none());
        assert!(!is_token_expired("not-a-jwt", now));
    }
}
