//! Readonce Cryptographic Primitives
//!
//! Encryption-at-rest for a single secret value. Each stored secret gets a
//! fresh symmetric key that lives exactly as long as the secret does.
//!
//! # Key Lifecycle
//!
//! ```text
//! OS CSPRNG
//!     │
//!     ▼
//! EphemeralKey (one per stored secret)
//!     │
//!     ▼
//! AEAD Seal → SealedSecret (nonce + ciphertext)
//!     │
//!     ▼
//! AEAD Open → plaintext, key destroyed
//! ```
//!
//! Keys are used for exactly one seal/open pair and are zeroized the moment
//! the secret is consumed or superseded, so a later memory disclosure cannot
//! recover a secret that was already read.
//!
//! # Security
//!
//! - XChaCha20-Poly1305 AEAD provides tamper-evident encryption
//! - Per-secret keys: a leaked key exposes at most one value
//! - Failed authentication tag -> `DecryptionFailed`, treated as fatal
//! - All key material is zeroized on drop

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;
pub mod error;
pub mod key;

pub use envelope::{SEALED_NONCE_SIZE, SealedSecret, open, seal, seal_with_nonce};
pub use error::CryptoError;
pub use key::{EphemeralKey, KEY_SIZE};
