//! Error types for secret container operations
//!
//! Every error here is terminal for the attempted call: the container's
//! state machine produced it, not a transient condition, so retrying with
//! adjusted input never helps. No variant ever carries secret plaintext,
//! ciphertext, or key bytes.

use thiserror::Error;

/// Errors from secret container operations
#[derive(Debug, Error)]
pub enum SecretError {
    /// `store` or `consume` invoked after the container reached its
    /// terminal state
    ///
    /// Single-use applies to the whole container, not just to reads: once a
    /// secret has been handed out, nothing can be stored in its place.
    #[error("sensitive value already consumed")]
    AlreadyConsumed,

    /// `consume` invoked on a container that never held a secret
    #[error("no sensitive value stored")]
    EmptyContainer,

    /// Integrity check failed while opening the stored envelope
    ///
    /// Indicates a logic bug or active tampering, never a recoverable race.
    /// The container destroys the affected key and becomes terminal.
    #[error("decryption failed: {reason}")]
    DecryptionFailure {
        /// Reason for decryption failure; never contains key or secret bytes
        reason: String,
    },

    /// An attempt was made to externalize container state
    ///
    /// Raised through the encoder whenever a container (or a composite
    /// holding one) is handed to a serializer, in every lifecycle state.
    #[error("sensitive value cannot be serialized")]
    SerializationDenied,

    /// Collaborator-level validation rejected a password before storage
    #[error("password shorter than {minimum} characters")]
    WeakPassword {
        /// Minimum accepted password length
        minimum: usize,
    },
}

impl From<readonce_crypto::CryptoError> for SecretError {
    fn from(err: readonce_crypto::CryptoError) -> Self {
        match err {
            readonce_crypto::CryptoError::DecryptionFailed { reason } => {
                Self::DecryptionFailure { reason }
            },
        }
    }
}
