use soroban_sdk::{Env, String};

/// Longest accepted descriptor prefix, in bytes.
pub const MAX_BASE_URI_LEN: u32 = 128;

/// Decimal digits in `u64::MAX`.
const MAX_ID_DIGITS: usize = 20;

/// `base_uri` followed by the decimal form of `badge_id`.
///
/// `base_uri` must not exceed [`MAX_BASE_URI_LEN`]; `init` enforces this.
pub fn descriptor(env: &Env, base_uri: &String, badge_id: u64) -> String {
    let mut buf = [0u8; MAX_BASE_URI_LEN as usize + MAX_ID_DIGITS];
    let base_len = base_uri.len() as usize;
    base_uri.copy_into_slice(&mut buf[..base_len]);

    let mut digits = [0u8; MAX_ID_DIGITS];
    let mut start = MAX_ID_DIGITS;
    let mut n = badge_id;
    loop {
        start -= 1;
        digits[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }

    let tail = &digits[start..];
    let end = base_len + tail.len();
    buf[base_len..end].copy_from_slice(tail);
    String::from_bytes(env, &buf[..end])
}
