use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::AlgorithmError;

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;

pub const DIGEST_LEN: usize = 20;
pub const DIGITS: u32 = 6;

/// Every intermediate value of one HOTP computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    pub counter_bytes: [u8; 8],
    pub digest: Vec<u8>,
    pub offset: usize,
    pub binary: u32,
    pub code: u32,
}

pub fn get_hotp(secret: &[u8], counter: u64) -> Result<u32, AlgorithmError> {
    trace(secret, counter).map(|t| t.code)
}

pub fn trace(secret: &[u8], counter: u64) -> Result<Truncation, AlgorithmError> {
    let counter_bytes = counter.to_be_bytes();
    let digest = make_hmac(secret, &counter_bytes)?;
    let (offset, binary) = dynamic_truncation(&digest)?;

    Ok(Truncation {
        counter_bytes,
        digest,
        offset,
        binary,
        code: binary % u32::pow(10, DIGITS),
    })
}

/// Renders a code with leading zeros, e.g. `50471` as `050471`.
pub fn format_code(code: u32) -> String {
    format!("{:0>width$}", code, width = DIGITS as usize)
}

// HMAC_SHA-1 -> 20 byte string
fn make_hmac(secret: &[u8], message: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
    let mut mac = HmacSha1::new_from_slice(secret).map_err(|_| AlgorithmError::InvalidKey)?;
    mac.update(message);

    Ok(mac.finalize().into_bytes().to_vec())
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(hmac: &[u8]) -> Result<(usize, u32), AlgorithmError> {
    if hmac.len() != DIGEST_LEN {
        return Err(AlgorithmError::DigestLength(hmac.len()));
    }

    let offset = (hmac[DIGEST_LEN - 1] & 0xf) as usize;
    let code = (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff);

    Ok((offset, code))
}
