//! The single-use secret container
//!
//! # State Machine
//!
//! ```text
//!            store                    consume
//! Empty ──────────────▶ Stored ──────────────▶ Consumed (terminal)
//!                         │  ▲
//!                         └──┘
//!                        store (overwrite, old key destroyed)
//! ```
//!
//! Every transition is synchronous and atomic with respect to observable
//! state. `store` and `consume` from the terminal state fail without
//! mutating anything further.
//!
//! # Access Control
//!
//! The fields live only in this module and no accessor exposes them. The
//! helpers that handle key material additionally require a [`MutationToken`],
//! which only `store` and `consume` can mint, so they cannot be invoked out
//! of context even from elsewhere in the crate.
//!
//! Because `store` and `consume` are inherent methods resolved at compile
//! time, replacing them from outside the type is not expressible; there is
//! no override point equivalent to swapping a method on a live object.
//!
//! Direct state manipulation does not compile:
//!
//! ```compile_fail
//! let mut container = readonce_core::SecretContainer::new();
//! container.consumed = false; // private field
//! ```
//!
//! ```compile_fail
//! let container = readonce_core::SecretContainer::new();
//! let slot = &container.slot; // private field
//! ```

use readonce_crypto::{EphemeralKey, SealedSecret, open, seal};

use crate::error::SecretError;
use crate::plaintext::Plaintext;

/// Fixed masked rendering used by every formatting path.
pub(crate) const MASKED: &str = "SecretContainer[secrets=*****]";

/// Capability token for the key-handling helpers.
///
/// Constructed only inside `store` and `consume`; [`StoredSecret`]'s methods
/// demand one, so sealing, opening, and key destruction are unreachable from
/// any other context.
struct MutationToken(());

/// A secret at rest: the envelope and the one key that opens it.
///
/// Bundling the two in a single struct makes the "ciphertext and key are
/// both present or both absent" invariant structural.
struct StoredSecret {
    key: EphemeralKey,
    sealed: SealedSecret,
}

impl StoredSecret {
    /// Mint a fresh key and seal the plaintext under it.
    fn seal_new(plaintext: &Plaintext, _token: &MutationToken) -> Self {
        let key = EphemeralKey::generate();
        let sealed = seal(&key, plaintext.as_bytes());
        Self { key, sealed }
    }

    /// Open the envelope and destroy the key, in that order, on every path.
    fn open(self, _token: &MutationToken) -> Result<Plaintext, SecretError> {
        let Self { key, sealed } = self;
        let result = open(&key, &sealed);
        key.destroy();
        match result {
            Ok(bytes) => Ok(Plaintext::new(bytes)),
            Err(err) => Err(err.into()),
        }
    }

    /// Destroy the key without opening the envelope (overwrite path).
    fn discard(self, _token: &MutationToken) {
        self.key.destroy();
    }
}

/// A container that accepts one sensitive value and gives it back once.
///
/// The value is encrypted at rest under a per-secret [`EphemeralKey`] from
/// the moment [`store`](Self::store) returns until [`consume`](Self::consume)
/// hands it back, at which point the key is destroyed and the container is
/// terminal. Formatting a container through `Display` or `Debug` always
/// yields the fixed literal `SecretContainer[secrets=*****]`, and handing it
/// to any serde encoder fails, so neither logging nor persistence paths can
/// leak the value.
///
/// Every instance owns its state independently from construction; nothing is
/// shared across containers.
pub struct SecretContainer {
    slot: Option<StoredSecret>,
    consumed: bool,
}

impl SecretContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self { slot: None, consumed: false }
    }

    /// Encrypt and store a secret.
    ///
    /// A fresh key is generated per call. Storing over an unconsumed secret
    /// is allowed and discards the previous value, destroying its key before
    /// the call returns (last-write-wins). The plaintext copy taken from the
    /// caller is zeroized once sealed.
    ///
    /// # Errors
    ///
    /// - `AlreadyConsumed`: the container already gave out its secret;
    ///   single-use covers writes as well as reads.
    pub fn store(&mut self, secret: impl Into<Plaintext>) -> Result<(), SecretError> {
        if self.consumed {
            return Err(SecretError::AlreadyConsumed);
        }
        let token = MutationToken(());
        let plaintext = secret.into();

        // Seal first, replace second: the previous secret stays intact until
        // its successor exists, then its key is destroyed.
        let fresh = StoredSecret::seal_new(&plaintext, &token);
        if let Some(previous) = self.slot.replace(fresh) {
            previous.discard(&token);
        }

        tracing::debug!(state = "stored", "secret stored");
        Ok(())
    }

    /// Decrypt and return the secret, exactly once.
    ///
    /// The key is destroyed and the container becomes terminal whether or
    /// not the envelope opens: tampered material must not be presented a
    /// second time.
    ///
    /// # Errors
    ///
    /// - `EmptyContainer`: no secret was ever stored.
    /// - `AlreadyConsumed`: the secret was already read.
    /// - `DecryptionFailure`: integrity check failed; fatal, the container
    ///   is poisoned.
    pub fn consume(&mut self) -> Result<Plaintext, SecretError> {
        if self.consumed {
            return Err(SecretError::AlreadyConsumed);
        }
        let token = MutationToken(());
        let Some(stored) = self.slot.take() else {
            return Err(SecretError::EmptyContainer);
        };
        self.consumed = true;

        match stored.open(&token) {
            Ok(plaintext) => {
                tracing::debug!(state = "consumed", "secret consumed");
                Ok(plaintext)
            },
            Err(err) => {
                tracing::warn!(state = "consumed", "integrity check failed, container poisoned");
                Err(err)
            },
        }
    }

    /// Whether a secret is currently stored and unconsumed.
    ///
    /// Reveals presence only: never content, never how many times `store`
    /// was called.
    pub fn is_present(&self) -> bool {
        self.slot.is_some()
    }
}

impl Default for SecretContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SecretContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MASKED)
    }
}

// Debug deliberately matches Display: accidental `{:?}` logging of the
// internal fields must render the same fixed literal in every state.
impl std::fmt::Debug for SecretContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MASKED)
    }
}

// Externalization is refused unconditionally, in every lifecycle state.
// There is no Deserialize counterpart: no external representation exists to
// restore from.
impl serde::Serialize for SecretContainer {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(serde::ser::Error::custom(SecretError::SerializationDenied))
    }
}
