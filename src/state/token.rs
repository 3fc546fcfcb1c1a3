//! Bearer-token inspection.
//!
//! The client never verifies signatures — it has no key, and the API
//! re-checks every request anyway. All it needs from the token is the
//! expiry claim, read from the base64url payload segment. Anything that
//! fails to decode is treated as "not logged in", never as an error.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Registered claims carried by every token the API issues.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Claims {
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued-at, Unix seconds.
    #[serde(default)]
    pub iat: i64,
}

/// Decode the claims from a JWT without verifying the signature.
///
/// Returns `None` for anything that is not `header.payload.signature` with
/// a JSON payload containing `exp`.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// True iff the token decodes and expires strictly after `now_secs`.
pub fn is_valid(token: &str, now_secs: i64) -> bool {
    decode_claims(token).is_some_and(|claims| claims.exp > now_secs)
}
