//! Ephemeral symmetric keys
//!
//! # Security Properties
//!
//! - One key per stored secret, minted fresh from the OS CSPRNG
//! - Key bytes are zeroized on drop and on explicit destruction
//! - The raw bytes are reachable only through a borrow, never by value

use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroize;

/// Symmetric key length in bytes (XChaCha20-Poly1305)
pub const KEY_SIZE: usize = 32;

/// A single-use symmetric key.
///
/// Generated for exactly one [`seal`](crate::seal) and destroyed after the
/// matching [`open`](crate::open), or when the secret it protects is
/// superseded. Holding per-secret keys (rather than a long-lived master key)
/// limits the blast radius of a key leak to one value and lets the owner
/// erase the key the moment the secret is no longer needed.
pub struct EphemeralKey {
    /// The 32-byte symmetric key for XChaCha20-Poly1305
    bytes: [u8; KEY_SIZE],
}

impl EphemeralKey {
    /// Generate a fresh key from the OS CSPRNG.
    ///
    /// Every call produces an independent key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Build a key from caller-provided bytes.
    ///
    /// For deterministic tests. Production callers use [`generate`](Self::generate).
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// 32-byte symmetric key for XChaCha20-Poly1305 AEAD.
    pub fn bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Overwrite the key material now, ahead of drop.
    ///
    /// Used on paths where the key's owner wants the erasure to happen at a
    /// named point rather than whenever the value goes out of scope.
    pub fn destroy(mut self) {
        self.bytes.zeroize();
    }
}

// Never print key material, not even in debug output
impl std::fmt::Debug for EphemeralKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EphemeralKey[*****]")
    }
}

impl Drop for EphemeralKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
