//! Envelope wire format.
//!
//! Layout, offsets in bytes from the start of the decoded sequence:
//! [version:1][options:1][encryption salt:8][MAC salt:8][IV:16]
//! [ciphertext:N][tag:32]
//!
//! Field order and sizes are fixed and never negotiated. There is no length
//! prefix for the ciphertext; its length is the total length minus header
//! and tag.

use crate::error::CryptorError;
use crate::types::{
    CRYPTOR_VERSION, HEADER_LENGTH, IV_LENGTH, MIN_ENVELOPE_LENGTH, SALT_LENGTH, TAG_LENGTH,
};

/// A parsed or about-to-be-encoded envelope. Transient: built per call,
/// never persisted.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub version: u8,
    /// Reserved byte, preserved verbatim, not interpreted.
    pub options: u8,
    pub encryption_salt: [u8; SALT_LENGTH],
    pub mac_salt: [u8; SALT_LENGTH],
    pub iv: [u8; IV_LENGTH],
    pub cipher_text: Vec<u8>,
    pub tag: [u8; TAG_LENGTH],
}

impl Envelope {
    /// The fixed 34-byte header: everything the tag covers except the
    /// ciphertext itself.
    pub fn header_bytes(&self) -> [u8; HEADER_LENGTH] {
        let mut header = [0u8; HEADER_LENGTH];
        header[0] = self.version;
        header[1] = self.options;
        header[2..2 + SALT_LENGTH].copy_from_slice(&self.encryption_salt);
        header[2 + SALT_LENGTH..2 + 2 * SALT_LENGTH].copy_from_slice(&self.mac_salt);
        header[HEADER_LENGTH - IV_LENGTH..].copy_from_slice(&self.iv);
        header
    }

    /// Serialize to the wire layout: header, ciphertext, tag.
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LENGTH + self.cipher_text.len() + TAG_LENGTH);
        bytes.extend_from_slice(&self.header_bytes());
        bytes.extend_from_slice(&self.cipher_text);
        bytes.extend_from_slice(&self.tag);
        bytes
    }

    /// Parse an envelope from decoded bytes.
    ///
    /// The length gate runs first so truncated input is always
    /// `MalformedEnvelope`; the version gate runs second, before any key
    /// derivation or MAC work happens on the buffer.
    pub fn parse(bytes: &[u8]) -> Result<Self, CryptorError> {
        if bytes.len() < MIN_ENVELOPE_LENGTH {
            return Err(CryptorError::MalformedEnvelope);
        }

        let version = bytes[0];
        if version != CRYPTOR_VERSION {
            return Err(CryptorError::UnsupportedVersion(version));
        }

        let options = bytes[1];

        let mut encryption_salt = [0u8; SALT_LENGTH];
        encryption_salt.copy_from_slice(&bytes[2..2 + SALT_LENGTH]);

        let mut mac_salt = [0u8; SALT_LENGTH];
        mac_salt.copy_from_slice(&bytes[2 + SALT_LENGTH..2 + 2 * SALT_LENGTH]);

        let mut iv = [0u8; IV_LENGTH];
        iv.copy_from_slice(&bytes[HEADER_LENGTH - IV_LENGTH..HEADER_LENGTH]);

        let cipher_text = bytes[HEADER_LENGTH..bytes.len() - TAG_LENGTH].to_vec();

        let mut tag = [0u8; TAG_LENGTH];
        tag.copy_from_slice(&bytes[bytes.len() - TAG_LENGTH..]);

        Ok(Self {
            version,
            options,
            encryption_salt,
            mac_salt,
            iv,
            cipher_text,
            tag,
        })
    }
}
