//! Secret envelopes sealed with `XChaCha20-Poly1305`
//!
//! An envelope binds one plaintext to one [`EphemeralKey`]. The nonce is
//! minted per seal and travels inside the envelope, so an envelope is
//! self-contained: key + envelope is everything `open` needs.

use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::CryptoError;
use crate::key::EphemeralKey;

/// Size of the `XChaCha20` nonce stored in each envelope (24 bytes)
pub const SEALED_NONCE_SIZE: usize = 24;

/// Poly1305 tag size (16 bytes)
const POLY1305_TAG_SIZE: usize = 16;

/// An encrypted secret at rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedSecret {
    /// The 24-byte `XChaCha20` nonce minted for this envelope
    pub nonce: [u8; SEALED_NONCE_SIZE],
    /// The ciphertext including 16-byte Poly1305 tag
    pub ciphertext: Vec<u8>,
}

impl SealedSecret {
    /// Plaintext length (ciphertext length minus authentication tag).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(POLY1305_TAG_SIZE)
    }
}

/// Seal a plaintext under an ephemeral key.
///
/// Mints a random 24-byte nonce from the OS CSPRNG. The extended nonce makes
/// random generation collision-safe, so no counter state needs to survive
/// alongside the key.
pub fn seal(key: &EphemeralKey, plaintext: &[u8]) -> SealedSecret {
    let mut nonce = [0u8; SEALED_NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce);
    seal_with_nonce(key, plaintext, nonce)
}

/// Seal a plaintext under an ephemeral key with a caller-provided nonce.
///
/// For deterministic tests. Production callers use [`seal`], which mints the
/// nonce itself.
pub fn seal_with_nonce(
    key: &EphemeralKey,
    plaintext: &[u8],
    nonce: [u8; SEALED_NONCE_SIZE],
) -> SealedSecret {
    let cipher = XChaCha20Poly1305::new(key.bytes().into());

    let Ok(ciphertext) = cipher.encrypt(XNonce::from_slice(&nonce), plaintext) else {
        unreachable!("XChaCha20-Poly1305 encryption cannot fail with valid inputs");
    };

    SealedSecret { nonce, ciphertext }
}

/// Open an envelope, returning the plaintext.
///
/// # Errors
///
/// - `DecryptionFailed`: the key does not match the envelope, or the
///   ciphertext/nonce was tampered with. Fatal; callers must not retry.
pub fn open(key: &EphemeralKey, sealed: &SealedSecret) -> Result<Vec<u8>, CryptoError> {
    let cipher = XChaCha20Poly1305::new(key.bytes().into());
    let nonce = XNonce::from_slice(&sealed.nonce);

    cipher.decrypt(nonce, sealed.ciphertext.as_slice()).map_err(|_| {
        CryptoError::DecryptionFailed { reason: "authentication failed".to_string() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key(fill: u8) -> EphemeralKey {
        EphemeralKey::from_bytes([fill; 32])
    }

    #[test]
    fn seal_open_roundtrip() {
        let key = test_key(0x01);
        let plaintext = b"hunter2";

        let sealed = seal(&key, plaintext);
        let opened = open(&key, &sealed).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn seal_open_empty_plaintext() {
        let key = test_key(0x02);

        let sealed = seal(&key, b"");
        let opened = open(&key, &sealed).unwrap();

        assert_eq!(opened, b"");
    }

    #[test]
    fn seal_open_large_plaintext() {
        let key = test_key(0x03);
        let plaintext = vec![0x42u8; 64 * 1024]; // 64KB

        let sealed = seal(&key, &plaintext);
        let opened = open(&key, &sealed).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn ciphertext_is_larger_than_plaintext() {
        let key = test_key(0x04);
        let plaintext = b"db-password";

        let sealed = seal(&key, plaintext);

        // Ciphertext should be plaintext + 16-byte tag
        assert_eq!(sealed.ciphertext.len(), plaintext.len() + POLY1305_TAG_SIZE);
        assert_eq!(sealed.plaintext_len(), plaintext.len());
    }

    #[test]
    fn fresh_nonce_per_seal() {
        let key = test_key(0x05);
        let plaintext = b"same input";

        let sealed1 = seal(&key, plaintext);
        let sealed2 = seal(&key, plaintext);

        assert_ne!(sealed1.nonce, sealed2.nonce);
        // Ciphertexts should also differ due to different nonces
        assert_ne!(sealed1.ciphertext, sealed2.ciphertext);
    }

    #[test]
    fn deterministic_with_fixed_nonce() {
        let key = test_key(0x06);
        let nonce = [0xAB; SEALED_NONCE_SIZE];

        let sealed1 = seal_with_nonce(&key, b"payload", nonce);
        let sealed2 = seal_with_nonce(&key, b"payload", nonce);

        assert_eq!(sealed1, sealed2);
    }

    #[test]
    fn wrong_key_fails_open() {
        let key = test_key(0x07);
        let sealed = seal(&key, b"secret value");

        let wrong_key = test_key(0x08);
        let result = open(&wrong_key, &sealed);

        assert!(matches!(
            result,
            Err(CryptoError::DecryptionFailed { reason })
                if reason.contains("authentication")
        ));
    }

    #[test]
    fn tampered_ciphertext_fails_open() {
        let key = test_key(0x09);
        let mut sealed = seal(&key, b"original value");

        sealed.ciphertext[0] ^= 0xFF;

        assert!(open(&key, &sealed).is_err());
    }

    #[test]
    fn tampered_nonce_fails_open() {
        let key = test_key(0x0A);
        let mut sealed = seal(&key, b"original value");

        sealed.nonce[0] ^= 0xFF;

        assert!(open(&key, &sealed).is_err());
    }
}
