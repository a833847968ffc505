use std::fmt;

/// An encoded and signed token: `header.payload.signature`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedJwt {
    /// Encoded value
    pub(crate) value: String,
}

impl SignedJwt {
    /// Get the encoded value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SignedJwt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SignedJwt {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<SignedJwt> for String {
    fn from(jwt: SignedJwt) -> Self {
        jwt.value
    }
}
