//! Cross-thread access to a container
//!
//! [`SecretContainer`] takes `&mut self`, so single-owner use is already
//! serialized by the borrow checker. When a container genuinely has to be
//! shared between threads, this wrapper owns the lock: `store` and `consume`
//! are mutually exclusive per instance, which the state machine requires —
//! a `store` racing a `consume` could reintroduce key material after it was
//! zeroized, or hand out a secret from a half-replaced slot.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::container::{MASKED, SecretContainer};
use crate::error::SecretError;
use crate::plaintext::Plaintext;

/// A [`SecretContainer`] behind a mutex, usable from `&self`.
pub struct SharedSecretContainer {
    inner: Mutex<SecretContainer>,
}

impl SharedSecretContainer {
    /// Create an empty shared container.
    pub fn new() -> Self {
        Self { inner: Mutex::new(SecretContainer::new()) }
    }

    /// Encrypt and store a secret. See [`SecretContainer::store`].
    pub fn store(&self, secret: impl Into<Plaintext>) -> Result<(), SecretError> {
        self.lock().store(secret)
    }

    /// Decrypt and return the secret, exactly once.
    /// See [`SecretContainer::consume`].
    pub fn consume(&self) -> Result<Plaintext, SecretError> {
        self.lock().consume()
    }

    /// Whether a secret is currently stored and unconsumed.
    pub fn is_present(&self) -> bool {
        self.lock().is_present()
    }

    // Every transition is atomic, so the inner state is coherent even if a
    // previous holder panicked; recover instead of propagating the poison.
    fn lock(&self) -> MutexGuard<'_, SecretContainer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedSecretContainer {
    fn default() -> Self {
        Self::new()
    }
}

// Masked without taking the lock; the literal is state-independent anyway
impl std::fmt::Display for SharedSecretContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MASKED)
    }
}

impl std::fmt::Debug for SharedSecretContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MASKED)
    }
}

impl serde::Serialize for SharedSecretContainer {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(serde::ser::Error::custom(SecretError::SerializationDenied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_the_owned_container() {
        let shared = SharedSecretContainer::new();
        assert!(!shared.is_present());

        shared.store("hunter2").unwrap();
        assert!(shared.is_present());

        assert_eq!(shared.consume().unwrap().as_str(), Some("hunter2"));
        assert!(matches!(shared.consume(), Err(SecretError::AlreadyConsumed)));
        assert!(matches!(shared.store("new"), Err(SecretError::AlreadyConsumed)));
    }

    #[test]
    fn display_is_masked() {
        let shared = SharedSecretContainer::new();
        shared.store("db-password").unwrap();
        assert_eq!(shared.to_string(), "SecretContainer[secrets=*****]");
    }
}
