//! Webhook payload signing
//!
//! This module produces and verifies the `X-Hub-Signature-256` header value:
//! an HMAC-SHA256 digest over a canonical JSON serialization, rendered as
//! `"sha256=<hex-digest>"`.
//!
//! Canonicalization sorts object keys at every level, so the same logical
//! payload always yields the same byte sequence regardless of how the struct
//! was built.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::error::EngineError;
use crate::types::SignedEnvelope;

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm tag carried in front of the hex digest
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Serialize a payload into canonical bytes: compact JSON with
/// lexicographically sorted keys.
///
/// Idempotent - canonicalizing an already-canonical document yields the
/// same bytes.
pub fn canonical_json<T: Serialize>(payload: &T) -> Result<Vec<u8>, EngineError> {
    // serde_json's Map is ordered by key, so Value round-tripping sorts
    // every object level.
    let value = serde_json::to_value(payload)?;
    Ok(serde_json::to_vec(&value)?)
}

/// Compute the signature for a canonical payload: `"sha256=<hex>"`.
pub fn sign(secret: &str, canonical_payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical_payload);
    let digest = mac.finalize().into_bytes();
    format!("{}{}", SIGNATURE_PREFIX, hex::encode(digest))
}

/// Verify a signature against a canonical payload.
///
/// Returns `false` for any mismatch, including a wrong or missing algorithm
/// tag and undecodable hex - verification never surfaces a parse error.
/// The digest comparison is constant-time.
pub fn verify(secret: &str, canonical_payload: &[u8], signature: &str) -> bool {
    let Some(hex_digest) = signature.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    let Ok(expected) = hex::decode(hex_digest) else {
        return false;
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(canonical_payload);
    mac.verify_slice(&expected).is_ok()
}

/// Canonicalize and sign a payload in one step.
pub fn sign_payload<T: Serialize>(secret: &str, payload: &T) -> Result<SignedEnvelope, EngineError> {
    let canonical_payload = canonical_json(payload)?;
    let signature = sign(secret, &canonical_payload);
    Ok(SignedEnvelope {
        canonical_payload,
        signature,
    })
}
