//! # Report Assembly
//!
//! Gathers the data for one compliance report. Assembly is a single-shot
//! pure computation once the four store fetches (certificates,
//! categories, products, activity log) have resolved — there is no
//! intermediate state to corrupt, so any fetch can be retried or
//! abandoned by the data-access layer without coordination here.

use std::sync::Arc;

use medcert_core::{CategoryId, CertificateId, ProductId};
use medcert_resolve::CatalogSnapshot;
use medcert_store::{CatalogStore, StoreError};

use crate::report::ComplianceReport;
use crate::scope::ReportScope;

/// The organization name used as the company-scope target.
pub const COMPANY_NAME: &str = "Novamed Medical Supplies";

/// How many activity-log entries a report carries.
pub const ACTIVITY_LOG_LIMIT: usize = 50;

/// Assembles compliance reports from an injected catalog store.
#[derive(Clone)]
pub struct ReportAssembler {
    store: Arc<dyn CatalogStore>,
}

impl ReportAssembler {
    /// Create an assembler over a catalog store.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Build the report for `scope` / `target_id`.
    ///
    /// Unknown target ids degrade to placeholder names and empty
    /// collections; only store-access failures are errors. The `logs`
    /// excerpt is always the [`ACTIVITY_LOG_LIMIT`] most-recent entries
    /// globally, independent of scope — the audit section documents
    /// recent console activity, not activity on the target.
    ///
    /// Two calls with the same inputs and no intervening store mutation
    /// yield structurally equal reports.
    pub async fn build_report(
        &self,
        scope: ReportScope,
        target_id: &str,
    ) -> Result<ComplianceReport, StoreError> {
        let certificates = self.store.fetch_certificates().await?;
        let categories = self.store.fetch_categories().await?;
        let products = self.store.fetch_products().await?;
        let logs = self.store.fetch_activity_log(ACTIVITY_LOG_LIMIT).await?;

        let snapshot = CatalogSnapshot::new(certificates, categories, products);

        let report = match scope {
            ReportScope::Company => ComplianceReport {
                scope,
                target_name: COMPANY_NAME.to_string(),
                // Company-wide audits list every certificate, drafts and
                // disabled ones included.
                certificates: snapshot.certificates.clone(),
                products: snapshot.products.clone(),
                logs,
            },
            ReportScope::Category => {
                let category = CategoryId::new(target_id)
                    .ok()
                    .and_then(|id| snapshot.category(&id).cloned());
                match category {
                    Some(category) => ComplianceReport {
                        scope,
                        target_name: category.name.clone(),
                        certificates: snapshot.certificates_for_category(&category.id),
                        products: snapshot
                            .products
                            .iter()
                            .filter(|p| p.category_id == category.id)
                            .cloned()
                            .collect(),
                        logs,
                    },
                    None => {
                        tracing::warn!(target_id, "category did not resolve for report");
                        ComplianceReport {
                            scope,
                            target_name: "Unknown Category".to_string(),
                            certificates: Vec::new(),
                            products: Vec::new(),
                            logs,
                        }
                    }
                }
            }
            ReportScope::Product => {
                let product = ProductId::new(target_id)
                    .ok()
                    .and_then(|id| snapshot.product(&id).cloned());
                match product {
                    Some(product) => ComplianceReport {
                        scope,
                        target_name: product.name.clone(),
                        certificates: snapshot.effective_certificates(Some(&product)),
                        products: vec![product],
                        logs,
                    },
                    None => {
                        tracing::warn!(target_id, "product did not resolve for report");
                        ComplianceReport {
                            scope,
                            target_name: "Unknown Product".to_string(),
                            certificates: Vec::new(),
                            products: Vec::new(),
                            logs,
                        }
                    }
                }
            }
            ReportScope::Certificate => {
                let certificate = CertificateId::new(target_id)
                    .ok()
                    .and_then(|id| snapshot.certificate(&id).cloned());
                match certificate {
                    Some(certificate) => ComplianceReport {
                        scope,
                        target_name: certificate.name.clone(),
                        // The report audits the certificate itself, so it
                        // is listed whatever its status.
                        products: snapshot
                            .products
                            .iter()
                            .filter(|p| {
                                p.certificates
                                    .override_ids()
                                    .is_some_and(|ids| ids.contains(&certificate.id))
                            })
                            .cloned()
                            .collect(),
                        certificates: vec![certificate],
                        logs,
                    },
                    None => {
                        tracing::warn!(target_id, "certificate did not resolve for report");
                        ComplianceReport {
                            scope,
                            target_name: "Unknown Certificate".to_string(),
                            certificates: Vec::new(),
                            products: Vec::new(),
                            logs,
                        }
                    }
                }
            }
        };

        tracing::info!(
            scope = %report.scope,
            target = %report.target_name,
            certificates = report.certificates.len(),
            products = report.products.len(),
            "assembled compliance report"
        );

        Ok(report)
    }
}
