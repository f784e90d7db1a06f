// RFC 4226 Appendix D / RFC 6238 Appendix B secret
pub const RFC_SECRET: &[u8] = b"12345678901234567890";
pub const RFC_SECRET_BASE32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

pub const GOLDEN_DIGEST: &str = "cc93cf18508d94934c64b65d8ba7667fb7cde4b0";
pub const GOLDEN_OFFSET: usize = 0;
pub const GOLDEN_BINARY: u32 = 1_284_755_224;
pub const GOLDEN_CODE: u32 = 755_224;

pub const RFC_4226_CODES: [u32; 10] = [
    755224, 287082, 359152, 969429, 338314, 254676, 287922, 162583, 399871, 520489,
];

// SHA-1 rows, last six digits
pub const RFC_6238_CODES: [(i64, &str); 6] = [
    (59, "287082"),
    (1111111109, "081804"),
    (1111111111, "050471"),
    (1234567890, "005924"),
    (2000000000, "279037"),
    (20000000000, "353130"),
];

pub const EMPTY_KEY_CODE: u32 = 328_482;
