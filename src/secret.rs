use secrecy::{ExposeSecret, SecretSlice};
use std::fmt;

/// Shared secret bytes. Never printed, zeroed on drop.
pub struct Secret(SecretSlice<u8>);

impl Secret {
    pub fn new(bytes: Vec<u8>) -> Self {
        Secret(SecretSlice::from(bytes))
    }
}

impl From<&[u8]> for Secret {
    fn from(bytes: &[u8]) -> Self {
        Secret::new(bytes.to_vec())
    }
}

impl ExposeSecret<[u8]> for Secret {
    fn expose_secret(&self) -> &[u8] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret([REDACTED; {}])", self.expose_secret().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::constants::*;

    #[test]
    fn debug_output_is_redacted() {
        let secret = Secret::from(RFC_SECRET);

        assert_eq!(format!("{:?}", secret), "Secret([REDACTED; 20])");
    }

    #[test]
    fn exposes_the_original_bytes() {
        let secret = Secret::new(RFC_SECRET.to_vec());

        assert_eq!(secret.expose_secret(), RFC_SECRET);
    }
}
