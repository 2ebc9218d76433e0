//! # Resolution Operations
//!
//! The three public operations of the resolution engine, implemented on
//! [`CatalogSnapshot`]:
//!
//! - [`CatalogSnapshot::certificates_for_category`] — active certificates
//!   mapped to a category.
//! - [`CatalogSnapshot::effective_certificates`] — a product's displayed
//!   certificates after applying inheritance/override rules.
//! - [`CatalogSnapshot::usage_of`] — advisory usage report for a
//!   certificate an operator is about to delete.
//!
//! ## Invariant
//!
//! No operation ever yields a certificate whose status is not `Active`,
//! on any code path. Draft and disabled certificates stay invisible to
//! end customers even when a mapping or override still names them.

use serde::{Deserialize, Serialize};

use medcert_core::{CategoryId, Certificate, CertificateId, CertificateSource, Product};

use crate::snapshot::CatalogSnapshot;

/// Advisory usage report for a certificate.
///
/// `categories` carries the names of categories the certificate is
/// mapped to; `products` carries only products that reference it through
/// an explicit override — inherited usage is attributed to the category,
/// not enumerated per product. Deletion is never blocked here; blocking
/// policy, if any, belongs to the calling UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateUsage {
    /// Whether anything still references the certificate.
    pub in_use: bool,
    /// Names of categories mapped to the certificate.
    pub categories: Vec<String>,
    /// Names of products explicitly overriding to the certificate.
    pub products: Vec<String>,
}

impl CatalogSnapshot {
    /// Active certificates mapped to `category_id`, in store return order.
    ///
    /// An unknown category or an empty mapping yields an empty vector,
    /// never an error.
    pub fn certificates_for_category(&self, category_id: &CategoryId) -> Vec<Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.is_active() && c.applies_to(category_id))
            .cloned()
            .collect()
    }

    /// A product's effective certificates after inheritance/override rules.
    ///
    /// - `None` → empty.
    /// - Inherit mode → the product's category mapping, or empty when the
    ///   category id does not resolve.
    /// - Override mode → the active subset of the explicit selection;
    ///   ids of deleted or unknown certificates are silently dropped.
    pub fn effective_certificates(&self, product: Option<&Product>) -> Vec<Certificate> {
        let Some(product) = product else {
            return Vec::new();
        };

        match &product.certificates {
            CertificateSource::Inherited => {
                if self.category(&product.category_id).is_none() {
                    tracing::debug!(
                        product = %product.id,
                        category = %product.category_id,
                        "product references unknown category; resolving to no certificates"
                    );
                    return Vec::new();
                }
                self.certificates_for_category(&product.category_id)
            }
            CertificateSource::Overridden(ids) => self
                .certificates
                .iter()
                .filter(|c| c.is_active() && ids.contains(&c.id))
                .cloned()
                .collect(),
        }
    }

    /// Advisory usage report for `certificate_id`.
    ///
    /// Unknown certificate ids yield an empty, not-in-use report.
    pub fn usage_of(&self, certificate_id: &CertificateId) -> CertificateUsage {
        let categories: Vec<String> = match self.certificate(certificate_id) {
            Some(cert) => cert
                .category_ids
                .iter()
                .filter_map(|id| self.category(id))
                .map(|c| c.name.clone())
                .collect(),
            None => Vec::new(),
        };

        let products: Vec<String> = self
            .products
            .iter()
            .filter(|p| {
                p.certificates
                    .override_ids()
                    .is_some_and(|ids| ids.contains(certificate_id))
            })
            .map(|p| p.name.clone())
            .collect();

        CertificateUsage {
            in_use: !categories.is_empty() || !products.is_empty(),
            categories,
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medcert_core::{CertificateStatus, ProductId, SegmentId};
    use std::collections::BTreeSet;

    fn cert(id: &'static str, name: &str, status: CertificateStatus, cats: &[&'static str]) -> Certificate {
        Certificate {
            id: CertificateId::from_static(id),
            name: name.to_string(),
            issuer: "TÜV SÜD".to_string(),
            expiry_date: None,
            image_ref: None,
            status,
            show_on_products: true,
            show_on_homepage: false,
            category_ids: cats.iter().map(|&c| CategoryId::from_static(c)).collect(),
        }
    }

    fn category(id: &'static str, name: &str) -> medcert_core::Category {
        medcert_core::Category {
            id: CategoryId::from_static(id),
            name: name.to_string(),
            segment_id: SegmentId::from_static("seg_healthcare"),
            display_order: 0,
            active: true,
        }
    }

    fn product_inherit(id: &'static str, name: &str, cat: &'static str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category_id": cat,
            "segment_id": "seg_healthcare"
        }))
        .unwrap()
    }

    fn product_override(
        id: &'static str,
        name: &str,
        cat: &'static str,
        certs: &[&'static str],
    ) -> Product {
        Product {
            id: ProductId::from_static(id),
            name: name.to_string(),
            category_id: CategoryId::from_static(cat),
            segment_id: SegmentId::from_static("seg_healthcare"),
            certificates: CertificateSource::Overridden(
                certs
                    .iter()
                    .map(|&c| CertificateId::from_static(c))
                    .collect::<BTreeSet<_>>(),
            ),
        }
    }

    fn gloves_snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![
                cert("cert_iso", "ISO 13485", CertificateStatus::Active, &["cat_1"]),
                cert("cert_ce_old", "Old CE Mark", CertificateStatus::Disabled, &["cat_1"]),
                cert("cert_draft", "FDA 510(k)", CertificateStatus::Draft, &["cat_1"]),
            ],
            vec![category("cat_1", "Surgical Gloves")],
            vec![],
        )
    }

    // ── certificates_for_category ────────────────────────────────────

    #[test]
    fn category_resolution_returns_only_active() {
        // Scenario: cat_1 maps an Active and a Disabled certificate.
        let snapshot = gloves_snapshot();
        let certs = snapshot.certificates_for_category(&CategoryId::from_static("cat_1"));
        let names: Vec<&str> = certs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ISO 13485"]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let snapshot = gloves_snapshot();
        let certs =
            snapshot.certificates_for_category(&CategoryId::from_static("nonexistent-id"));
        assert!(certs.is_empty());
    }

    #[test]
    fn empty_snapshot_yields_empty() {
        let snapshot = CatalogSnapshot::default();
        assert!(snapshot
            .certificates_for_category(&CategoryId::from_static("cat_1"))
            .is_empty());
    }

    // ── effective_certificates ───────────────────────────────────────

    #[test]
    fn absent_product_yields_empty() {
        let snapshot = gloves_snapshot();
        assert!(snapshot.effective_certificates(None).is_empty());
    }

    #[test]
    fn inherited_product_gets_category_certificates() {
        // Scenario: inherit flag omitted on the stored row.
        let mut snapshot = gloves_snapshot();
        snapshot.products = vec![product_inherit("prod_1", "Nitrile Gloves", "cat_1")];
        let product = snapshot.product(&ProductId::from_static("prod_1")).cloned();

        let certs = snapshot.effective_certificates(product.as_ref());
        let names: Vec<&str> = certs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ISO 13485"]);
    }

    #[test]
    fn inherited_product_with_unknown_category_yields_empty() {
        let snapshot = gloves_snapshot();
        let orphan = product_inherit("prod_x", "Orphan Product", "cat_gone");
        assert!(snapshot.effective_certificates(Some(&orphan)).is_empty());
    }

    #[test]
    fn inherited_equals_category_resolution() {
        let snapshot = gloves_snapshot();
        let product = product_inherit("prod_1", "Nitrile Gloves", "cat_1");
        assert_eq!(
            snapshot
                .effective_certificates(Some(&product))
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>(),
            snapshot
                .certificates_for_category(&CategoryId::from_static("cat_1"))
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>(),
        );
    }

    #[test]
    fn inherited_ignores_stray_certificate_ids_from_store() {
        // A legacy row carrying garbage certificate_ids while inheriting:
        // the serde boundary discards the garbage, so resolution cannot
        // consult it.
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "prod_1",
            "name": "Nitrile Gloves",
            "category_id": "cat_1",
            "segment_id": "seg_healthcare",
            "inherit_certificates": true,
            "certificate_ids": ["cert_ce_old", "cert_bogus"]
        }))
        .unwrap();

        let snapshot = gloves_snapshot();
        let names: Vec<String> = snapshot
            .effective_certificates(Some(&product))
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["ISO 13485".to_string()]);
    }

    #[test]
    fn override_returns_active_subset_of_selection() {
        let snapshot = gloves_snapshot();
        let product = product_override(
            "prod_1",
            "Nitrile Gloves",
            "cat_1",
            &["cert_iso", "cert_ce_old", "cert_missing"],
        );

        let names: Vec<String> = snapshot
            .effective_certificates(Some(&product))
            .iter()
            .map(|c| c.name.clone())
            .collect();
        // Disabled and dangling ids silently dropped.
        assert_eq!(names, vec!["ISO 13485".to_string()]);
    }

    #[test]
    fn override_path_is_independent_of_category_mapping() {
        // Same visible result as inheritance, different code path: remove
        // the category mapping and the override result must not change.
        let mut snapshot = gloves_snapshot();
        let product = product_override("prod_1", "Nitrile Gloves", "cat_1", &["cert_iso"]);

        let before = snapshot.effective_certificates(Some(&product));
        assert_eq!(before.len(), 1);

        // Detach every certificate from cat_1.
        for cert in &mut snapshot.certificates {
            cert.category_ids.clear();
        }
        assert!(snapshot
            .certificates_for_category(&CategoryId::from_static("cat_1"))
            .is_empty());

        let after = snapshot.effective_certificates(Some(&product));
        assert_eq!(
            before.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
            after.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn override_with_empty_selection_yields_empty() {
        let snapshot = gloves_snapshot();
        let product = product_override("prod_1", "Nitrile Gloves", "cat_1", &[]);
        assert!(snapshot.effective_certificates(Some(&product)).is_empty());
    }

    // ── usage_of ─────────────────────────────────────────────────────

    #[test]
    fn usage_lists_mapped_categories() {
        let snapshot = gloves_snapshot();
        let usage = snapshot.usage_of(&CertificateId::from_static("cert_iso"));
        assert!(usage.in_use);
        assert_eq!(usage.categories, vec!["Surgical Gloves".to_string()]);
        assert!(usage.products.is_empty());
    }

    #[test]
    fn usage_lists_override_products_but_not_inheriting_ones() {
        let mut snapshot = gloves_snapshot();
        snapshot.products = vec![
            product_inherit("prod_a", "Nitrile Gloves", "cat_1"),
            product_override("prod_b", "Latex Gloves", "cat_1", &["cert_iso"]),
        ];

        let usage = snapshot.usage_of(&CertificateId::from_static("cert_iso"));
        // prod_a reaches cert_iso through its category; that usage is
        // attributed to the category, not enumerated per product.
        assert_eq!(usage.products, vec!["Latex Gloves".to_string()]);
    }

    #[test]
    fn usage_skips_dangling_category_mappings() {
        let mut snapshot = gloves_snapshot();
        snapshot.categories.clear();
        let usage = snapshot.usage_of(&CertificateId::from_static("cert_iso"));
        assert!(usage.categories.is_empty());
        assert!(!usage.in_use);
    }

    #[test]
    fn usage_of_unknown_certificate_is_empty() {
        let snapshot = gloves_snapshot();
        let usage = snapshot.usage_of(&CertificateId::from_static("cert_nope"));
        assert_eq!(
            usage,
            CertificateUsage {
                in_use: false,
                categories: vec![],
                products: vec![],
            }
        );
    }

    // ── property: no non-Active certificate ever escapes ─────────────

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_status() -> impl Strategy<Value = CertificateStatus> {
            prop_oneof![
                Just(CertificateStatus::Active),
                Just(CertificateStatus::Draft),
                Just(CertificateStatus::Disabled),
            ]
        }

        const CAT_POOL: [&str; 3] = ["cat_1", "cat_2", "cat_3"];
        const CERT_POOL: [&str; 4] = ["cert_a", "cert_b", "cert_c", "cert_d"];

        fn arb_certificate(id: &'static str) -> impl Strategy<Value = Certificate> {
            (arb_status(), proptest::collection::btree_set(0usize..CAT_POOL.len(), 0..=3)).prop_map(
                move |(status, cat_idx)| Certificate {
                    id: CertificateId::from_static(id),
                    name: id.to_string(),
                    issuer: "issuer".to_string(),
                    expiry_date: None,
                    image_ref: None,
                    status,
                    show_on_products: true,
                    show_on_homepage: false,
                    category_ids: cat_idx
                        .into_iter()
                        .map(|i| CategoryId::from_static(CAT_POOL[i]))
                        .collect(),
                },
            )
        }

        fn arb_snapshot() -> impl Strategy<Value = CatalogSnapshot> {
            (
                arb_certificate("cert_a"),
                arb_certificate("cert_b"),
                arb_certificate("cert_c"),
                arb_certificate("cert_d"),
            )
                .prop_map(|(a, b, c, d)| {
                    CatalogSnapshot::new(
                        vec![a, b, c, d],
                        CAT_POOL.iter().map(|&id| category(id, id)).collect(),
                        vec![],
                    )
                })
        }

        fn arb_product() -> impl Strategy<Value = Product> {
            let cat = 0usize..CAT_POOL.len();
            let override_ids =
                proptest::collection::btree_set(0usize..CERT_POOL.len(), 0..=CERT_POOL.len());
            (cat, proptest::option::of(override_ids)).prop_map(|(cat_idx, ids)| Product {
                id: ProductId::from_static("prod_p"),
                name: "prop product".to_string(),
                category_id: CategoryId::from_static(CAT_POOL[cat_idx]),
                segment_id: SegmentId::from_static("seg_1"),
                certificates: match ids {
                    None => CertificateSource::Inherited,
                    Some(idx) => CertificateSource::Overridden(
                        idx.into_iter()
                            .map(|i| CertificateId::from_static(CERT_POOL[i]))
                            .collect(),
                    ),
                },
            })
        }

        proptest! {
            #[test]
            fn category_resolution_never_yields_inactive(
                snapshot in arb_snapshot(),
                cat_idx in 0usize..CAT_POOL.len(),
            ) {
                let certs = snapshot
                    .certificates_for_category(&CategoryId::from_static(CAT_POOL[cat_idx]));
                prop_assert!(certs.iter().all(|c| c.is_active()));
            }

            #[test]
            fn effective_certificates_never_yield_inactive(
                snapshot in arb_snapshot(),
                product in arb_product(),
            ) {
                let certs = snapshot.effective_certificates(Some(&product));
                prop_assert!(certs.iter().all(|c| c.is_active()));
            }

            #[test]
            fn inherited_always_matches_category_resolution(
                snapshot in arb_snapshot(),
                cat_idx in 0usize..CAT_POOL.len(),
            ) {
                let product = Product {
                    id: ProductId::from_static("prod_p"),
                    name: "prop product".to_string(),
                    category_id: CategoryId::from_static(CAT_POOL[cat_idx]),
                    segment_id: SegmentId::from_static("seg_1"),
                    certificates: CertificateSource::Inherited,
                };
                let effective: Vec<_> = snapshot
                    .effective_certificates(Some(&product))
                    .iter()
                    .map(|c| c.id.clone())
                    .collect();
                let by_category: Vec<_> = snapshot
                    .certificates_for_category(&product.category_id)
                    .iter()
                    .map(|c| c.id.clone())
                    .collect();
                prop_assert_eq!(effective, by_category);
            }
        }
    }
}
