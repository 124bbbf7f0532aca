//! Short code generation.
//!
//! A short code is derived from a random seed: the first seven characters of
//! the URL-safe base64 SHA-256 digest of the seed, followed by the seed's last
//! character. A fresh seed per attempt yields a fresh code, which is how the
//! create loop escapes collisions.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Length of every generated short code, in characters.
pub const SHORT_CODE_LEN: usize = 8;

/// Returns a new random seed for [`generate_code`].
pub fn new_seed() -> String {
    Uuid::new_v4().to_string()
}

/// Derives a short code from `seed`.
///
/// Pure and deterministic. The result is always [`SHORT_CODE_LEN`] characters
/// from the URL-safe base64 alphabet, except that the final character is the
/// seed's own last character (a hex digit for UUID seeds).
///
/// # Examples
///
/// ```
/// use link_shortener::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("550e8400-e29b-41d4-a716-446655440000"), "o6nh7Zc0");
/// ```
pub fn generate_code(seed: &str) -> String {
    let digest = Sha256::digest(seed.as_bytes());
    let encoded = URL_SAFE.encode(digest);

    let mut code: String = encoded.chars().take(SHORT_CODE_LEN - 1).collect();
    if let Some(last) = seed.chars().last() {
        code.push(last);
    }
    code
}
