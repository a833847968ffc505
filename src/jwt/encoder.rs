use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use tracing::debug;

use super::error::JwtEncoderError;
use super::header::{ENCODED_HEADER, SEGMENT_SEPARATOR};
use super::payload::TokenPayload;
use super::signed::SignedJwt;
use super::signer::create_signature;

/// Creates a token embedding `payload`, signed with `secret` using HMAC-SHA256.
///
/// Bytes and text payloads are embedded verbatim; wrap anything else in
/// [`Json`](super::payload::Json) to embed its JSON serialization. The only failure is a
/// structured payload that cannot be serialized.
pub fn create_token<P>(
    payload: &P,
    secret: impl AsRef<[u8]>,
) -> Result<SignedJwt, JwtEncoderError>
where
    P: TokenPayload + ?Sized,
{
    let payload_bytes = payload.payload_bytes()?;
    let payload_b64 = URL_SAFE_NO_PAD.encode(&payload_bytes);
    let signature_b64 = create_signature(ENCODED_HEADER, &payload_b64, secret.as_ref());

    let kind = P::KIND;
    debug!(
        payload_kind = %kind,
        payload_len = payload_bytes.len(),
        "token created"
    );

    let mut value =
        String::with_capacity(ENCODED_HEADER.len() + payload_b64.len() + signature_b64.len() + 2);
    value.push_str(ENCODED_HEADER);
    value.push(SEGMENT_SEPARATOR);
    value.push_str(&payload_b64);
    value.push(SEGMENT_SEPARATOR);
    value.push_str(&signature_b64);

    Ok(SignedJwt { value })
}
