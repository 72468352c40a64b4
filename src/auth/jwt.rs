use crate::types::{ClientError, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Claims the client cares about. Everything else in the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub exp: Option<f64>,
}

impl Claims {
    /// Expiry instant, if the token carries a usable `exp` claim.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp?;
        if !exp.is_finite() {
            return None;
        }
        DateTime::from_timestamp(exp.floor() as i64, 0)
    }
}

/// Decodes the payload segment of a JWT **without** verifying its signature.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            return Err(ClientError::Validation(
                "Token is not a three-part JWT".to_string(),
            ))
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClientError::Validation(format!("Invalid token payload encoding: {}", e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::Validation(format!("Invalid token payload: {}", e)))
}

/// Expiry of `token`. Tokens that do not decode or have no `exp` claim are
/// errors.
pub fn expires_at(token: &str) -> Result<DateTime<Utc>> {
    decode_claims(token)?
        .expires_at()
        .ok_or_else(|| ClientError::Validation("Token has no expiry claim".to_string()))
}

/// True when `token` is unusable at `now`: undecodable, without expiry, or
/// expired. A token expiring exactly at `now` is still valid.
pub fn is_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match expires_at(token) {
        Ok(exp) => exp < now,
        Err(_) => true,
    }
}
