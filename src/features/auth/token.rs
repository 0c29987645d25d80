//! Bearer token payload decoding. The client never verifies signatures; it
//! only reads the expiry claim to decide whether a stored token is worth
//! presenting. The server re-validates every request, so a forged expiry can
//! at worst trigger one extra round trip.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

use crate::app_lib::AppError;

/// Claims the client cares about. Unknown fields are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Claims {
    /// A token is expired from the exact expiry second onward.
    pub fn is_expired(&self, now_epoch_seconds: i64) -> bool {
        self.exp <= now_epoch_seconds
    }
}

/// Decodes the claims segment of a compact three-segment token without
/// checking the signature.
pub fn decode_claims(token: &str) -> Result<Claims, AppError> {
    let mut segments = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AppError::Parse(
            "Malformed token: expected three segments".to_string(),
        ));
    };

    // Tolerate encoders that emit padded base64url.
    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| AppError::Parse(format!("Malformed token payload: {err}")))?;

    serde_json::from_slice(&decoded)
        .map_err(|err| AppError::Parse(format!("Malformed token claims: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp},"user_id":7}}"#));
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_claims_without_verifying_the_signature() {
        let claims = decode_claims(&token_with_exp(1_900_000_000)).unwrap();
        assert_eq!(claims.exp, 1_900_000_000);
        assert_eq!(claims.user_id, Some(7));
    }

    #[test]
    fn tolerates_unknown_claim_fields() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"exp":42,"iat":1,"role":"admin"}"#);
        let claims = decode_claims(&format!("h.{payload}.s")).unwrap();
        assert_eq!(claims.exp, 42);
        assert_eq!(claims.user_id, None);
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert!(decode_claims("onlyonesegment").is_err());
        assert!(decode_claims("two.segments").is_err());
        assert!(decode_claims("a.b.c.d").is_err());
    }

    #[test]
    fn rejects_undecodable_payloads() {
        assert!(decode_claims("header.!!!.signature").is_err());

        let not_json = URL_SAFE_NO_PAD.encode("not json");
        assert!(decode_claims(&format!("h.{not_json}.s")).is_err());
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let claims = decode_claims(&token_with_exp(1_000)).unwrap();
        assert!(claims.is_expired(1_000));
        assert!(claims.is_expired(1_001));
        assert!(!claims.is_expired(999));
    }
}
