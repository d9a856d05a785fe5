//! Error types for envelope operations

use thiserror::Error;

/// Errors from sealing and opening secret envelopes
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Decryption failed (authentication tag mismatch)
    ///
    /// The key does not match the envelope, or the envelope was tampered
    /// with. Either way this indicates a logic bug or active tampering,
    /// never a recoverable race; callers must not retry.
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// Reason for decryption failure; never contains key or secret bytes
        reason: String,
    },
}

impl CryptoError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Every envelope error is fatal: the envelope holds exactly one value
    /// under exactly one key, so a mismatch cannot be repaired by retrying.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DecryptionFailed { .. } => true,
        }
    }
}
