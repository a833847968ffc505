use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::header::SEGMENT_SEPARATOR;

type HmacSha256 = Hmac<Sha256>;

/// Computes the signature segment for the given encoded header and payload segments.
///
/// The MAC covers the segment text as received (`header_b64 + "." + payload_b64`), not the
/// decoded bytes, and the digest is returned base64url encoded without padding.
pub(crate) fn create_signature(header_b64: &str, payload_b64: &str, secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(header_b64.as_bytes());
    mac.update(&[SEGMENT_SEPARATOR as u8]);
    mac.update(payload_b64.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
