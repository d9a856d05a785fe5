//! Concrete secret kinds built directly on the container
//!
//! The container sanctions exactly one level of extension: a newtype holding
//! a [`SecretContainer`], like [`Password`] or [`ConnectionUri`] below. The
//! shared behavior lives in [`OneTimeSecret`], which is sealed — no impl can
//! exist outside this crate — and the container's guarded operations are
//! inherent methods, so a second layer that replaces `reveal` or intercepts
//! the secret before the guarded path runs is not expressible. The attempt
//! is rejected when the extending type is defined:
//!
//! ```compile_fail
//! use readonce_core::{OneTimeSecret, Password, Plaintext, SecretError};
//!
//! struct Intercepted(Password);
//!
//! // OneTimeSecret is sealed; this impl does not compile
//! impl OneTimeSecret for Intercepted {
//!     fn is_present(&self) -> bool {
//!         self.0.is_present()
//!     }
//!     fn reveal(&mut self) -> Result<Plaintext, SecretError> {
//!         self.0.reveal()
//!     }
//! }
//! ```

use crate::container::SecretContainer;
use crate::error::SecretError;
use crate::plaintext::Plaintext;

mod sealed {
    pub trait Sealed {}
}

/// Shared behavior of the concrete secret kinds.
///
/// Sealed: only the kinds defined in this crate implement it, which removes
/// the override point a further extension level would need.
pub trait OneTimeSecret: sealed::Sealed {
    /// Whether the secret is still unconsumed.
    fn is_present(&self) -> bool;

    /// Decrypt and return the secret, exactly once.
    fn reveal(&mut self) -> Result<Plaintext, SecretError>;
}

macro_rules! secret_kind {
    ($(#[$doc:meta])* $name:ident, $ctor_arg:ident) => {
        $(#[$doc])*
        pub struct $name {
            container: SecretContainer,
        }

        impl $name {
            /// Store the value into a fresh container.
            pub fn new($ctor_arg: impl Into<Plaintext>) -> Self {
                let mut container = SecretContainer::new();
                let Ok(()) = container.store($ctor_arg) else {
                    unreachable!("a fresh container accepts its first secret");
                };
                Self { container }
            }
        }

        impl sealed::Sealed for $name {}

        impl OneTimeSecret for $name {
            fn is_present(&self) -> bool {
                self.container.is_present()
            }

            fn reveal(&mut self) -> Result<Plaintext, SecretError> {
                self.container.consume()
            }
        }

        // Formatting delegates to the container's fixed masked literal
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.container, f)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(&self.container, f)
            }
        }

        // Serialization delegates to the container and is therefore denied
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.container.serialize(serializer)
            }
        }
    };
}

secret_kind!(
    /// A password that can be read exactly once.
    Password,
    password
);

secret_kind!(
    /// A connection URI (with embedded credentials) that can be read exactly
    /// once.
    ConnectionUri,
    uri
);
