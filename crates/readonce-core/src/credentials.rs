//! Composite credentials record
//!
//! Glue demonstrating containers embedded in a multi-field structure. The
//! container guarantees only that each embedded secret enforces its own
//! masking and serialization denial; the construction-time validation here
//! (password strength) belongs to this collaborator, not to the core.

use serde::Serialize;

use crate::error::SecretError;
use crate::kinds::{ConnectionUri, Password};
use crate::plaintext::Plaintext;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// Database credentials with each sensitive field held in its own container.
///
/// Serializing this record fails: the derived impl delegates to the fields,
/// and every field refuses externalization.
#[derive(Serialize)]
pub struct DbCredentials {
    password: Password,
    uri: ConnectionUri,
}

impl DbCredentials {
    /// Validate and store the credentials.
    ///
    /// # Errors
    ///
    /// - `WeakPassword`: the password is shorter than the accepted minimum.
    ///   The rejected plaintext is zeroized before returning.
    pub fn new(
        password: impl Into<Plaintext>,
        uri: impl Into<Plaintext>,
    ) -> Result<Self, SecretError> {
        let password = password.into();
        if password.len() < MIN_PASSWORD_LEN {
            return Err(SecretError::WeakPassword { minimum: MIN_PASSWORD_LEN });
        }
        Ok(Self { password: Password::new(password), uri: ConnectionUri::new(uri) })
    }

    /// The password field, for the one read it allows.
    pub fn password(&mut self) -> &mut Password {
        &mut self.password
    }

    /// The connection URI field, for the one read it allows.
    pub fn uri(&mut self) -> &mut ConnectionUri {
        &mut self.uri
    }
}

impl std::fmt::Display for DbCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DbCredentials(password={}, uri={})", self.password, self.uri)
    }
}

impl std::fmt::Debug for DbCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}
