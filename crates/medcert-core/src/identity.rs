//! # Identity Newtypes
//!
//! Newtype wrappers for the identifiers the hosted store hands out.
//! Each identifier is a distinct type — you cannot pass a [`CategoryId`]
//! where a [`CertificateId`] is expected, which rules out the
//! cross-reference mix-ups the resolution rules are sensitive to.
//!
//! ## Validation
//!
//! The hosted store issues opaque string keys. The only structural
//! constraint we can enforce is non-emptiness, and it is enforced at
//! construction AND at deserialization time — a row with a blank key is
//! rejected before it can reach the resolution engine.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Implements the shared surface of a validated string identifier:
/// `new()`, `from_static()`, `as_str()`, `Display`, `FromStr`, and a
/// `Deserialize` impl that routes through `new()` so invalid values are
/// rejected at the serde boundary rather than silently accepted.
macro_rules! string_id {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $ty(String);

        impl $ty {
            /// Create an identifier, rejecting empty or all-whitespace input.
            pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(ValidationError::EmptyIdentifier {
                        kind: stringify!($ty),
                    });
                }
                Ok(Self(raw))
            }

            /// Create an identifier from a compile-time constant known to be
            /// non-empty. Intended for fixtures and well-known keys.
            pub fn from_static(raw: &'static str) -> Self {
                debug_assert!(!raw.trim().is_empty());
                Self(raw.to_string())
            }

            /// Access the underlying key string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

string_id! {
    /// Unique identifier for a compliance certificate.
    CertificateId
}

string_id! {
    /// Unique identifier for a product category.
    CategoryId
}

string_id! {
    /// Unique identifier for a catalog product.
    ProductId
}

string_id! {
    /// Unique identifier for a top-level market segment.
    SegmentId
}
