/// The only header this crate produces or accepts, byte for byte.
///
/// Verification compares against these exact bytes and never reads the `alg` field, so a token
/// announcing any other algorithm (or the same one with different whitespace) is rejected.
pub const HEADER: &str = r#"{"alg": "HS256", "typ": "JWT"}"#;

/// Base64url (no padding) encoding of [`HEADER`]. First segment of every token.
pub const ENCODED_HEADER: &str = "eyJhbGciOiAiSFMyNTYiLCAidHlwIjogIkpXVCJ9";

pub const SEGMENT_SEPARATOR: char = '.';
