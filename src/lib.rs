//! Create and verify compact tokens signed with HMAC-SHA256.
//!
//! ```
//! use hs256_token::{Json, create_token, decode_token};
//! use serde_json::{Value, json};
//!
//! let token = create_token(&Json(json!({"sub": "1234567890"})), "secret").unwrap();
//! let payload: Value = decode_token(token.value(), "secret").unwrap();
//! assert_eq!(payload["sub"], "1234567890");
//! ```

pub mod jwt;

pub use jwt::encoder::create_token;
pub use jwt::error::{JwtDecoderError, JwtEncoderError};
pub use jwt::payload::{Json, PayloadKind, TokenPayload};
pub use jwt::signed::SignedJwt;
pub use jwt::verifier::{decode_token, parse_token, parse_token_bytes};
