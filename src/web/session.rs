use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::Role;

pub const SESSION_COOKIE: &str = "session";

/// Request-scoped authentication context carried by the session cookie and
/// injected as a request extension by the auth middleware.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthContext {
    pub faculty_id: i64,
    pub role: Role,
    pub section_id: i64,
}

/// Cookie value: `base64url(json-payload).hex(sha256(secret || payload))`.
pub fn encode(ctx: &AuthContext, secret: &str) -> String {
    let payload = serde_json::to_vec(ctx).expect("session payload serializes");
    format!(
        "{}.{}",
        general_purpose::URL_SAFE_NO_PAD.encode(&payload),
        signature(secret, &payload)
    )
}

/// Verifies the signature and parses the payload. Anything malformed or
/// tampered with decodes to no session.
pub fn decode(value: &str, secret: &str) -> Option<AuthContext> {
    let (encoded, sig) = value.split_once('.')?;
    let payload = general_purpose::URL_SAFE_NO_PAD.decode(encoded).ok()?;
    if signature(secret, &payload) != sig {
        return None;
    }
    serde_json::from_slice(&payload).ok()
}

fn signature(secret: &str, payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(payload);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AuthContext {
        AuthContext {
            faculty_id: 7,
            role: Role::Faculty,
            section_id: 2,
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let value = encode(&ctx(), "secret");
        let decoded = decode(&value, "secret").unwrap();
        assert_eq!(decoded.faculty_id, 7);
        assert_eq!(decoded.role, Role::Faculty);
        assert_eq!(decoded.section_id, 2);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let value = encode(&ctx(), "secret");
        assert!(decode(&value, "other").is_none());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let value = encode(&ctx(), "secret");
        let (payload, sig) = value.split_once('.').unwrap();
        let forged = AuthContext {
            faculty_id: 7,
            role: Role::Hod,
            section_id: 2,
        };
        let forged_payload = encode(&forged, "secret");
        let (forged_b64, _) = forged_payload.split_once('.').unwrap();
        assert!(decode(&format!("{}.{}", forged_b64, sig), "secret").is_none());
        assert!(decode(payload, "secret").is_none());
        assert!(decode("", "secret").is_none());
    }
}
