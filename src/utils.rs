use data_encoding::BASE32_NOPAD;

use crate::config::KeyEncoding;
use crate::error::ConfigError;
use crate::secret::Secret;

// Base32 keys are accepted in any case, with or without padding or spaces
fn normalize_base32(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '=')
        .collect::<String>()
        .to_uppercase()
}

pub fn decode_key(value: &str, encoding: KeyEncoding) -> Result<Secret, ConfigError> {
    let bytes = match encoding {
        KeyEncoding::Raw => value.as_bytes().to_vec(),
        KeyEncoding::Base32 => BASE32_NOPAD
            .decode(normalize_base32(value).as_bytes())
            .map_err(|_| ConfigError::InvalidKey)?,
    };

    if bytes.is_empty() {
        return Err(ConfigError::EmptyKey);
    }
    Ok(Secret::new(bytes))
}
