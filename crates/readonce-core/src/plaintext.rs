//! Owned plaintext buffers that clean up after themselves
//!
//! `Plaintext` carries a secret across the container boundary in both
//! directions: callers hand one to [`store`](crate::SecretContainer::store)
//! and receive one back from [`consume`](crate::SecretContainer::consume).
//! The buffer is zeroized on drop, so the window in which a secret exists in
//! memory unencrypted is exactly the caller's borrow of this value.

use zeroize::Zeroize;

/// An owned secret payload, zeroized on drop.
pub struct Plaintext {
    bytes: Vec<u8>,
}

impl Plaintext {
    /// Wrap an owned byte buffer.
    ///
    /// Takes ownership so no second copy of the secret survives with the
    /// caller. Conversions from `String` and `Vec<u8>` reuse the original
    /// allocation.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Borrow the secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow the secret as UTF-8 text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Plaintext {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<String> for Plaintext {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<&str> for Plaintext {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Plaintext {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

// Never print payload bytes, not even in debug output
impl std::fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Plaintext[*****]")
    }
}

impl Drop for Plaintext {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
