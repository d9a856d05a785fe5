//! Property-based tests for secret envelopes
//!
//! These tests verify the fundamental invariants of the encryption layer:
//!
//! 1. **Round-trip**: open(k, seal(k, p)) == p for all plaintexts
//! 2. **Key binding**: an envelope opens only under the key that sealed it
//! 3. **Tamper evidence**: any ciphertext mutation is rejected

use proptest::prelude::*;
use readonce_crypto::{CryptoError, EphemeralKey, SEALED_NONCE_SIZE, open, seal, seal_with_nonce};

fn key_bytes() -> impl Strategy<Value = [u8; 32]> {
    prop::collection::vec(any::<u8>(), 32..=32).prop_map(|v| {
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&v);
        arr
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_seal_open_roundtrip(
        plaintext in prop::collection::vec(any::<u8>(), 0..1000),
        key in key_bytes(),
    ) {
        let key = EphemeralKey::from_bytes(key);

        let sealed = seal(&key, &plaintext);
        let opened = open(&key, &sealed).unwrap();

        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn prop_wrong_key_never_opens(
        plaintext in prop::collection::vec(any::<u8>(), 0..200),
        key in key_bytes(),
        other in key_bytes(),
    ) {
        prop_assume!(key != other);

        let sealed = seal(&EphemeralKey::from_bytes(key), &plaintext);
        let result = open(&EphemeralKey::from_bytes(other), &sealed);

        let denied = matches!(result, Err(CryptoError::DecryptionFailed { .. }));
        prop_assert!(denied, "wrong key must be rejected as a decryption failure");
    }

    #[test]
    fn prop_bit_flip_is_rejected(
        plaintext in prop::collection::vec(any::<u8>(), 1..200),
        key in key_bytes(),
        flip_index in any::<prop::sample::Index>(),
    ) {
        let key = EphemeralKey::from_bytes(key);
        let mut sealed = seal_with_nonce(&key, &plaintext, [0x11; SEALED_NONCE_SIZE]);

        let index = flip_index.index(sealed.ciphertext.len());
        sealed.ciphertext[index] ^= 0x01;

        prop_assert!(open(&key, &sealed).is_err());
    }
}
