//! # Validation Errors
//!
//! Errors raised when constructing domain primitives from untrusted input.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Error constructing a validated domain primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An identifier was empty or all-whitespace.
    #[error("{kind} must not be empty")]
    EmptyIdentifier {
        /// The identifier type that rejected the input (e.g. "CertificateId").
        kind: &'static str,
    },
}
