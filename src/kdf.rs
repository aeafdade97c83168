//! PBKDF2 key derivation.
//!
//! The v3 format fixes PBKDF2-HMAC-SHA1 with a 32-byte output; every
//! compliant implementation must derive the same key from the same
//! password/salt pair, so the PRF is not configurable.

use sha1::Sha1;
use zeroize::Zeroizing;

use crate::types::KEY_LENGTH;

/// Derive a 256-bit key from a password and salt.
///
/// Deterministic: equal inputs always yield the equal key. The salt must be
/// non-empty; an empty salt voids the derivation's security guarantees and is
/// treated as a programming error rather than a recoverable condition.
///
/// # Panics
/// Panics if `salt` is empty.
pub fn derive_key(password: &[u8], salt: &[u8], iterations: u32) -> Zeroizing<[u8; KEY_LENGTH]> {
    assert!(!salt.is_empty(), "key derivation requires a non-empty salt");
    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, iterations, &mut key[..]);
    key
}
