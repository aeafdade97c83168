//! Envelope authentication.
//!
//! The tag is HMAC-SHA256 over the exact concatenation of the 34-byte header
//! and the ciphertext, keyed with the MAC key. Verification is constant-time;
//! a naive `==` would leak how many leading tag bytes matched.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::envelope::Envelope;
use crate::types::TAG_LENGTH;

type HmacSha256 = Hmac<Sha256>;

fn tag_mac(header: &[u8], cipher_text: &[u8], mac_key: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(mac_key).expect("HMAC accepts any key length");
    mac.update(header);
    mac.update(cipher_text);
    mac
}

/// Compute the authentication tag over header and ciphertext.
pub fn compute_tag(header: &[u8], cipher_text: &[u8], mac_key: &[u8]) -> [u8; TAG_LENGTH] {
    tag_mac(header, cipher_text, mac_key).finalize().into_bytes().into()
}

/// Recompute the tag for a parsed envelope and compare it to the carried one
/// in constant time.
pub fn verify_tag(envelope: &Envelope, mac_key: &[u8]) -> bool {
    tag_mac(&envelope.header_bytes(), &envelope.cipher_text, mac_key)
        .verify_slice(&envelope.tag)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CRYPTOR_VERSION, DEFAULT_OPTIONS, IV_LENGTH, SALT_LENGTH};

    fn envelope_with_tag(mac_key: &[u8]) -> Envelope {
        let mut envelope = Envelope {
            version: CRYPTOR_VERSION,
            options: DEFAULT_OPTIONS,
            encryption_salt: [1; SALT_LENGTH],
            mac_salt: [2; SALT_LENGTH],
            iv: [3; IV_LENGTH],
            cipher_text: vec![4; 16],
            tag: [0; TAG_LENGTH],
        };
        envelope.tag = compute_tag(&envelope.header_bytes(), &envelope.cipher_text, mac_key);
        envelope
    }

    #[test]
    fn deterministic() {
        let a = compute_tag(b"header", b"cipher", b"key");
        let b = compute_tag(b"header", b"cipher", b"key");
        assert_eq!(a, b);
    }

    #[test]
    fn covers_header_and_cipher_text() {
        let base = compute_tag(b"header", b"cipher", b"key");
        assert_ne!(base, compute_tag(b"headeR", b"cipher", b"key"));
        assert_ne!(base, compute_tag(b"header", b"ciphEr", b"key"));
        assert_ne!(base, compute_tag(b"header", b"cipher", b"keY"));
    }

    #[test]
    fn split_point_does_not_affect_tag() {
        // Same concatenated bytes, different split: must still agree, since
        // the tag is defined over the concatenation
        let a = compute_tag(b"headercip", b"her", b"key");
        let b = compute_tag(b"header", b"cipher", b"key");
        assert_eq!(a, b);
    }

    #[test]
    fn verify_accepts_valid_tag() {
        let envelope = envelope_with_tag(b"mac-key");
        assert!(verify_tag(&envelope, b"mac-key"));
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let envelope = envelope_with_tag(b"mac-key");
        assert!(!verify_tag(&envelope, b"other-key"));
    }

    #[test]
    fn verify_rejects_modified_envelope() {
        let mut envelope = envelope_with_tag(b"mac-key");
        envelope.cipher_text[0] ^= 0x01;
        assert!(!verify_tag(&envelope, b"mac-key"));

        let mut envelope = envelope_with_tag(b"mac-key");
        envelope.tag[TAG_LENGTH - 1] ^= 0x80;
        assert!(!verify_tag(&envelope, b"mac-key"));

        let mut envelope = envelope_with_tag(b"mac-key");
        envelope.mac_salt[0] ^= 0xff;
        assert!(!verify_tag(&envelope, b"mac-key"));
    }
}
