//! # medcert-core — Foundational Types for the medcert Stack
//!
//! Domain types shared by every other crate in the workspace: identifier
//! newtypes, the catalog entities (certificates, categories, segments,
//! products), and activity-log records. This crate owns the shape of the
//! data; it never talks to the hosted store and never performs resolution.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `CertificateId`, `CategoryId`,
//!    `ProductId`, `SegmentId` — all distinct types with validated
//!    constructors. You cannot pass a category id where a certificate id
//!    is expected.
//!
//! 2. **`CertificateSource` resolved once at the serde boundary.** The
//!    hosted store's legacy `inherit_certificates` / `certificate_ids`
//!    column pair is folded into a tagged union when a product row is
//!    deserialized. Downstream code matches on `Inherited` vs `Overridden`
//!    and never re-derives "is the flag exactly false".
//!
//! ## Crate Policy
//!
//! - No dependencies on other `medcert-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod activity;
pub mod catalog;
pub mod error;
pub mod identity;

pub use activity::ActivityLogEntry;
pub use catalog::{
    Category, Certificate, CertificateSource, CertificateStatus, ComplianceMode, Product, Segment,
};
pub use error::ValidationError;
pub use identity::{CategoryId, CertificateId, ProductId, SegmentId};
