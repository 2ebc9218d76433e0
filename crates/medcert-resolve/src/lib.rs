//! # medcert-resolve — Certificate Resolution Engine
//!
//! Computes the effective set of active certificates for a product or a
//! category, honoring per-product overrides. This is the subsystem the
//! product pages and compliance reports hang off: a product either
//! inherits its category's certificate mappings (the default) or carries
//! an explicit selection, and in both modes only `Active` certificates
//! are ever surfaced.
//!
//! ## Shape
//!
//! Resolution is pure and synchronous: the engine operates on a
//! [`CatalogSnapshot`] of collections already fetched from the store.
//! There is no I/O, no locking, and no error path — every "not found"
//! condition degrades to an empty result. That permissiveness is the
//! contract: a product page or report must always render something
//! rather than fail on a dangling reference.
//!
//! ## Crate Policy
//!
//! - Depends only on `medcert-core`.
//! - No `unwrap()` outside tests; no panics on malformed references.

pub mod engine;
pub mod snapshot;

pub use engine::CertificateUsage;
pub use snapshot::CatalogSnapshot;
