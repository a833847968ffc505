//! Interoperability checks against the `jsonwebtoken` crate.
use assert_matches::assert_matches;
use hs256_token::{Json, JwtDecoderError, create_token, decode_token, parse_token};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const SECRET: &[u8] = b"Top secret";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Claims {
    sub: String,
    name: String,
    iat: i64,
}

fn claims() -> Claims {
    Claims {
        sub: "1234567890".to_string(),
        name: "John Doe".to_string(),
        iat: 1516239022,
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // Claims are opaque to this crate, so nothing is required or validated.
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation
}

#[test]
fn created_token_verifies_with_jsonwebtoken() {
    let token = create_token(&Json(claims()), SECRET).unwrap();

    let decoded = jsonwebtoken::decode::<Claims>(
        token.value(),
        &DecodingKey::from_secret(SECRET),
        &validation(),
    )
    .unwrap();

    assert_eq!(decoded.header.alg, Algorithm::HS256);
    assert_eq!(decoded.header.typ.as_deref(), Some("JWT"));
    assert_eq!(decoded.claims, claims());
}

#[test]
fn created_token_with_wrong_secret_fails_with_jsonwebtoken() {
    let token = create_token(&Json(claims()), SECRET).unwrap();

    let result = jsonwebtoken::decode::<Claims>(
        token.value(),
        &DecodingKey::from_secret(b"wrong"),
        &validation(),
    );

    assert_matches!(
        result.map_err(|e| e.into_kind()),
        Err(jsonwebtoken::errors::ErrorKind::InvalidSignature)
    );
}

#[test]
fn jsonwebtoken_header_is_rejected() {
    // Same algorithm and secret, but the header bytes differ from the fixed header.
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims(),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let mut out: Option<Claims> = None;
    assert_matches!(
        parse_token(&token, SECRET, &mut out),
        Err(JwtDecoderError::InvalidHeader(_))
    );
    assert_eq!(out, None);
    assert_matches!(
        decode_token::<Claims>(&token, SECRET),
        Err(JwtDecoderError::InvalidHeader(_))
    );
}

#[test]
fn jsonwebtoken_payload_segment_is_compatible() {
    let foreign = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims(),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap();
    let ours = create_token(&Json(claims()), SECRET).unwrap();

    let foreign_payload = foreign.split('.').nth(1).unwrap();
    let our_payload = ours.value().split('.').nth(1).unwrap();
    assert_eq!(foreign_payload, our_payload);
}
