/// Envelope format version this crate reads and writes.
///
/// Version 3: password-based scheme.
/// Format: [version=3:1B][options:1B][encryption salt:8B][MAC salt:8B][IV:16B]
///         [ciphertext:N*16B][HMAC-SHA256 tag:32B]
pub const CRYPTOR_VERSION: u8 = 3;

/// Options byte written into new envelopes. Reserved; preserved verbatim on
/// parse and never interpreted.
pub const DEFAULT_OPTIONS: u8 = 1;

/// Salt length in bytes for both the encryption salt and the MAC salt.
pub const SALT_LENGTH: usize = 8;

/// AES-CBC IV length in bytes (one cipher block).
pub const IV_LENGTH: usize = 16;

/// AES block length in bytes. Ciphertext is always a whole number of blocks.
pub const BLOCK_LENGTH: usize = 16;

/// Derived key length in bytes (256 bits).
pub const KEY_LENGTH: usize = 32;

/// HMAC-SHA256 tag length in bytes.
pub const TAG_LENGTH: usize = 32;

/// PBKDF2 iteration count fixed by the v3 format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Fixed header length: version + options + two salts + IV.
pub const HEADER_LENGTH: usize = 2 + 2 * SALT_LENGTH + IV_LENGTH;

/// Smallest byte sequence that can possibly be an envelope: header + tag
/// with an empty ciphertext slice.
pub const MIN_ENVELOPE_LENGTH: usize = HEADER_LENGTH + TAG_LENGTH;

/// Immutable cryptor parameters, fixed at construction.
///
/// The wire layout itself is never negotiated; this only carries the values
/// that go into new envelopes. Interoperable v3 output requires the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptorConfig {
    /// Options byte written into the header.
    pub options: u8,
    /// PBKDF2 iteration count for both derived keys.
    pub iterations: u32,
}

impl CryptorConfig {
    /// The v3 interoperable parameter set.
    pub const fn v3() -> Self {
        Self {
            options: DEFAULT_OPTIONS,
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl Default for CryptorConfig {
    fn default() -> Self {
        Self::v3()
    }
}
