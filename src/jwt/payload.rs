use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use super::error::JwtEncoderError;

/// The shape a payload had when it was handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Pre-serialized bytes, embedded verbatim.
    Bytes,
    /// Pre-serialized text, embedded verbatim.
    Text,
    /// A value serialized to JSON by the encoder.
    Structured,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Bytes => write!(f, "bytes"),
            PayloadKind::Text => write!(f, "text"),
            PayloadKind::Structured => write!(f, "structured"),
        }
    }
}

/// Anything that can be embedded as the payload segment of a token.
///
/// Raw bytes and text are used as they are. Any other value must be wrapped in [`Json`] so it
/// is serialized with `serde_json`; the wrapper keeps the three shapes apart at compile time,
/// so a string is never serialized as a JSON string literal by accident.
pub trait TokenPayload {
    const KIND: PayloadKind;

    /// Bytes to embed in the token.
    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError>;
}

impl TokenPayload for [u8] {
    const KIND: PayloadKind = PayloadKind::Bytes;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        Ok(Cow::Borrowed(self))
    }
}

impl TokenPayload for Vec<u8> {
    const KIND: PayloadKind = PayloadKind::Bytes;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<const N: usize> TokenPayload for [u8; N] {
    const KIND: PayloadKind = PayloadKind::Bytes;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl TokenPayload for str {
    const KIND: PayloadKind = PayloadKind::Text;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

impl TokenPayload for String {
    const KIND: PayloadKind = PayloadKind::Text;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        Ok(Cow::Borrowed(self.as_bytes()))
    }
}

/// Wraps a structured value so it is embedded as its JSON serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Json<T>(pub T);

impl<T: Serialize> TokenPayload for Json<T> {
    const KIND: PayloadKind = PayloadKind::Structured;

    fn payload_bytes(&self) -> Result<Cow<'_, [u8]>, JwtEncoderError> {
        serde_json::to_vec(&self.0)
            .map(Cow::Owned)
            .map_err(JwtEncoderError::Serialization)
    }
}
