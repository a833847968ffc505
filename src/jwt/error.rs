use thiserror::Error;

#[derive(Error, Debug)]
pub enum JwtEncoderError {
    /// The structured payload could not be serialized to JSON.
    #[error("unable to serialize payload: `{0}`")]
    Serialization(#[source] serde_json::Error),
}

/// Errors returned while verifying a token. Every variant is terminal.
#[derive(Error, Debug)]
pub enum JwtDecoderError {
    /// The token does not have exactly three segments. Holds the segment count found.
    #[error("malformed token: expected 3 segments, found `{0}`")]
    MalformedToken(usize),
    #[error("unable to decode header: `{0}`")]
    HeaderDecode(#[source] base64::DecodeError),
    /// The decoded header differs from the only accepted header. Holds the decoded bytes.
    #[error("invalid header: `{}`", String::from_utf8_lossy(.0))]
    InvalidHeader(Vec<u8>),
    #[error("unable to decode payload from base64: `{0}`")]
    PayloadDecode(#[source] base64::DecodeError),
    #[error("unable to deserialize JSON payload: `{0}`")]
    PayloadDeserialize(#[source] serde_json::Error),
    #[error("invalid signature")]
    InvalidSignature,
}
