//! Encrypt/decrypt orchestration.
//!
//! `encrypt` draws fresh salts and IV, derives two independent keys from the
//! password (one per salt, so the cipher key and MAC key never coincide),
//! runs AES-256-CBC with PKCS#7 padding, and emits the authenticated envelope
//! as base64. `decrypt` walks the reverse path and verifies the tag before
//! touching the cipher key.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;

use crate::auth::{compute_tag, verify_tag};
use crate::base64::{base64_decode, base64_encode};
use crate::envelope::Envelope;
use crate::error::CryptorError;
use crate::kdf::derive_key;
use crate::types::{CryptorConfig, CRYPTOR_VERSION, IV_LENGTH, SALT_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn random_bytes(buf: &mut [u8]) -> Result<(), CryptorError> {
    getrandom::getrandom(buf).map_err(|e| CryptorError::EntropyError(e.to_string()))
}

/// Encrypt `plaintext` under `password` with the v3 parameters.
///
/// Returns the base64 encoding of the full envelope byte sequence.
pub fn encrypt(plaintext: &[u8], password: &[u8]) -> Result<String, CryptorError> {
    encrypt_with(plaintext, password, CryptorConfig::v3())
}

/// Encrypt with explicit parameters. Interoperable output requires
/// [`CryptorConfig::v3`].
pub fn encrypt_with(
    plaintext: &[u8],
    password: &[u8],
    config: CryptorConfig,
) -> Result<String, CryptorError> {
    let mut encryption_salt = [0u8; SALT_LENGTH];
    let mut mac_salt = [0u8; SALT_LENGTH];
    let mut iv = [0u8; IV_LENGTH];
    random_bytes(&mut encryption_salt)?;
    random_bytes(&mut mac_salt)?;
    random_bytes(&mut iv)?;

    let cipher_key = derive_key(password, &encryption_salt, config.iterations);
    let mac_key = derive_key(password, &mac_salt, config.iterations);

    let cipher_text = Aes256CbcEnc::new((&*cipher_key).into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Envelope {
        version: CRYPTOR_VERSION,
        options: config.options,
        encryption_salt,
        mac_salt,
        iv,
        cipher_text,
        tag: Default::default(),
    };
    envelope.tag = compute_tag(&envelope.header_bytes(), &envelope.cipher_text, &*mac_key);

    Ok(base64_encode(&envelope.encode()))
}

/// Decrypt a base64 envelope produced by any compliant v3 implementation.
///
/// Either returns the full validated plaintext or an error; there is no
/// partial output. Tag mismatch (tampering or wrong password, deliberately
/// indistinguishable) is [`CryptorError::IntegrityError`].
pub fn decrypt(encoded: &str, password: &[u8]) -> Result<Vec<u8>, CryptorError> {
    decrypt_with(encoded, password, CryptorConfig::v3())
}

/// Decrypt with explicit parameters.
pub fn decrypt_with(
    encoded: &str,
    password: &[u8],
    config: CryptorConfig,
) -> Result<Vec<u8>, CryptorError> {
    let bytes = base64_decode(encoded).map_err(|_| CryptorError::MalformedEnvelope)?;
    let envelope = Envelope::parse(&bytes)?;

    let mac_key = derive_key(password, &envelope.mac_salt, config.iterations);
    if !verify_tag(&envelope, &*mac_key) {
        return Err(CryptorError::IntegrityError);
    }

    let cipher_key = derive_key(password, &envelope.encryption_salt, config.iterations);
    // Only reachable after a true tag match, so bad padding here means a
    // non-compliant producer, not an attacker
    Aes256CbcDec::new((&*cipher_key).into(), (&envelope.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&envelope.cipher_text)
        .map_err(|_| CryptorError::DecryptionError)
}

/// UTF-8 convenience wrapper over [`encrypt`].
pub fn encrypt_string(plaintext: &str, password: &str) -> Result<String, CryptorError> {
    encrypt(plaintext.as_bytes(), password.as_bytes())
}

/// UTF-8 convenience wrapper over [`decrypt`]. Fails with
/// [`CryptorError::DecryptionError`] if the recovered bytes are not UTF-8.
pub fn decrypt_string(encoded: &str, password: &str) -> Result<String, CryptorError> {
    let plaintext = decrypt(encoded, password.as_bytes())?;
    String::from_utf8(plaintext).map_err(|_| CryptorError::DecryptionError)
}
