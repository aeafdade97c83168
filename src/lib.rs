//! Interoperable password-based encrypted message envelopes.
//!
//! Implements the RNCryptor v3 password data format: a self-describing,
//! versioned, authenticated ciphertext bundle that any compliant
//! implementation can decrypt.
//!
//! Wire format:
//! [version=3:1B][options:1B][encryption salt:8B][MAC salt:8B][IV:16B]
//! [AES-256-CBC ciphertext:N*16B][HMAC-SHA256 tag:32B], exchanged as base64.
//!
//! Keys are derived with PBKDF2-HMAC-SHA1 (10 000 iterations), one key per
//! salt so encryption and authentication never share a key. All operations
//! are pure functions over their inputs; nothing here holds mutable state,
//! so everything is safe to call concurrently.

pub mod auth;
pub mod base64;
pub mod cryptor;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod types;

pub use base64::{base64_decode, base64_encode};
pub use cryptor::{decrypt, decrypt_string, decrypt_with, encrypt, encrypt_string, encrypt_with};
pub use envelope::Envelope;
pub use error::CryptorError;
pub use kdf::derive_key;
pub use types::{CryptorConfig, CRYPTOR_VERSION, PBKDF2_ITERATIONS};
