//! Readonce Secret Container
//!
//! A single-use secret container: it accepts exactly one sensitive payload,
//! hands it back exactly once, keeps it encrypted at rest in between, and
//! resists disclosure through logging, serialization, extension, or direct
//! state manipulation.
//!
//! # Lifecycle
//!
//! ```text
//! SecretContainer::new
//!        │
//!        ▼ store          EphemeralKey minted, plaintext sealed (AEAD)
//!      Stored ──── store  overwrite: old key destroyed, fresh key minted
//!        │
//!        ▼ consume        envelope opened, key destroyed
//!     Consumed            terminal: store and consume both refuse
//! ```
//!
//! # Confidentiality
//!
//! - Encryption at rest: the plaintext exists only inside `store`/`consume`;
//!   between the two calls the container holds ciphertext and a per-secret
//!   key, both destroyed when the secret is consumed or superseded
//! - Masked formatting: `Display` and `Debug` always render
//!   `SecretContainer[secrets=*****]`, independent of state and content
//! - Serialization denial: handing a container (or a composite holding one)
//!   to any serde encoder fails; no `Deserialize` impl exists
//! - Sealed extension: one newtype level over the container is sanctioned
//!   ([`Password`], [`ConnectionUri`]); the shared trait is sealed and the
//!   guarded operations are non-virtual, so a second level that intercepts
//!   the secret does not compile
//!
//! # Example
//!
//! ```
//! use readonce_core::{SecretContainer, SecretError};
//!
//! let mut container = SecretContainer::new();
//! container.store("hunter2")?;
//!
//! let secret = container.consume()?;
//! assert_eq!(secret.as_str(), Some("hunter2"));
//!
//! // The container is terminal: a second read fails
//! assert!(container.consume().is_err());
//! # Ok::<(), SecretError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod container;
pub mod credentials;
pub mod error;
pub mod kinds;
pub mod plaintext;
pub mod shared;

pub use container::SecretContainer;
pub use credentials::DbCredentials;
pub use error::SecretError;
pub use kinds::{ConnectionUri, OneTimeSecret, Password};
pub use plaintext::Plaintext;
pub use shared::SharedSecretContainer;
