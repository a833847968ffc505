//! Example to create a token and verify it, with debug logging enabled.
use hs256_token::{Json, create_token, decode_token, parse_token_bytes};
use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Claims {
    sub: String,
    name: String,
    iat: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let secret = "Top secret";
    let claims = Claims {
        sub: "1234567890".to_string(),
        name: "John Doe".to_string(),
        iat: 1516239022,
    };

    let token = create_token(&Json(&claims), secret)?;
    println!("{token}");

    let verified: Claims = decode_token(token.value(), secret)?;
    println!("{verified:?}");

    if let Err(e) = decode_token::<Claims>(token.value(), "wrong") {
        println!("verification with the wrong secret failed: {e}");
    }

    let opaque = create_token("not json", secret)?;
    let bytes = parse_token_bytes(opaque.value(), secret)?;
    println!("{}", String::from_utf8_lossy(&bytes));

    Ok(())
}
