use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptorError {
    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    #[error("Malformed envelope")]
    MalformedEnvelope,

    // Covers both tampering and a wrong password; no further detail is
    // exposed so callers cannot be used as a padding/password oracle.
    #[error("Integrity check failed")]
    IntegrityError,

    #[error("Decryption failed")]
    DecryptionError,

    #[error("Random number generation failed: {0}")]
    EntropyError(String),
}
