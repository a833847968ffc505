use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use constant_time_eq::constant_time_eq;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::JwtDecoderError;
use super::header::{HEADER, SEGMENT_SEPARATOR};
use super::signer::create_signature;

/// The three raw segments of a token, borrowed from the token text.
struct Segments<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a str,
}

impl<'a> Segments<'a> {
    fn split(token: &'a str) -> Result<Self, JwtDecoderError> {
        let mut segments = token.splitn(4, SEGMENT_SEPARATOR);
        match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(header), Some(payload), Some(signature), None) => Ok(Self {
                header,
                payload,
                signature,
            }),
            _ => Err(JwtDecoderError::MalformedToken(
                token.split(SEGMENT_SEPARATOR).count(),
            )),
        }
    }

    /// The header must decode to exactly [`HEADER`]. Its fields are never inspected.
    fn check_header(&self) -> Result<(), JwtDecoderError> {
        let header = URL_SAFE_NO_PAD
            .decode(self.header)
            .map_err(JwtDecoderError::HeaderDecode)?;
        if header != HEADER.as_bytes() {
            return Err(JwtDecoderError::InvalidHeader(header));
        }
        Ok(())
    }

    fn decode_payload(&self) -> Result<Vec<u8>, JwtDecoderError> {
        URL_SAFE_NO_PAD
            .decode(self.payload)
            .map_err(JwtDecoderError::PayloadDecode)
    }

    /// Recomputes the signature over the segments as received, not their decoded bytes.
    fn verify_signature(&self, secret: &[u8]) -> Result<(), JwtDecoderError> {
        let expected = create_signature(self.header, self.payload, secret);
        if !constant_time_eq(expected.as_bytes(), self.signature.as_bytes()) {
            return Err(JwtDecoderError::InvalidSignature);
        }
        Ok(())
    }
}

/// Runs every check that comes before deserialization and signature verification.
fn decode_unverified(token: &str) -> Result<(Segments<'_>, Vec<u8>), JwtDecoderError> {
    let segments = Segments::split(token)?;
    segments.check_header()?;
    let payload = segments.decode_payload()?;
    Ok((segments, payload))
}

fn deserialize<T: DeserializeOwned>(payload: &[u8]) -> Result<T, JwtDecoderError> {
    serde_json::from_slice(payload).map_err(JwtDecoderError::PayloadDeserialize)
}

fn log_rejection(err: &JwtDecoderError) {
    debug!("token rejected: {err}");
}

/// Verifies `token` with `secret` and deserializes its JSON payload into `out`.
///
/// Checks run in this order, each one terminal: segment count, header decoding, exact header
/// match, payload decoding, payload deserialization, signature.
///
/// # Unauthenticated output
///
/// `out` is written **before** the signature is checked. When this returns
/// [`JwtDecoderError::InvalidSignature`], `out` already holds the payload of a token that
/// failed authentication and must not be trusted. On every other error `out` is left
/// untouched. Prefer [`decode_token`], which only hands out the payload after the signature
/// matched.
pub fn parse_token<T>(
    token: &str,
    secret: impl AsRef<[u8]>,
    out: &mut T,
) -> Result<(), JwtDecoderError>
where
    T: DeserializeOwned,
{
    decode_unverified(token)
        .and_then(|(segments, payload)| {
            *out = deserialize(&payload)?;
            segments.verify_signature(secret.as_ref())
        })
        .inspect_err(log_rejection)
}

/// Verifies `token` with `secret` and returns its deserialized JSON payload.
///
/// Runs the same checks in the same order as [`parse_token`], but the payload is only
/// returned once the signature has been verified.
pub fn decode_token<T>(token: &str, secret: impl AsRef<[u8]>) -> Result<T, JwtDecoderError>
where
    T: DeserializeOwned,
{
    decode_unverified(token)
        .and_then(|(segments, payload)| {
            let value = deserialize(&payload)?;
            segments.verify_signature(secret.as_ref())?;
            Ok(value)
        })
        .inspect_err(log_rejection)
}

/// Verifies `token` with `secret` and returns the raw payload bytes.
///
/// Use this for tokens created from bytes or text that are not JSON, which [`parse_token`]
/// and [`decode_token`] reject with [`JwtDecoderError::PayloadDeserialize`].
pub fn parse_token_bytes(
    token: &str,
    secret: impl AsRef<[u8]>,
) -> Result<Vec<u8>, JwtDecoderError> {
    decode_unverified(token)
        .and_then(|(segments, payload)| {
            segments.verify_signature(secret.as_ref())?;
            Ok(payload)
        })
        .inspect_err(log_rejection)
}
