//! HS256 JSON Web Tokens with a single fixed header.
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)`, where the header is
//! always [`header::HEADER`] and the signature is HMAC-SHA256 over the first two segments.

pub mod encoder;
pub mod error;
pub mod header;
pub mod payload;
pub mod signed;
pub(crate) mod signer;
pub mod verifier;
