//! # Resolve CLI — Certificate resolution queries.
//!
//! ## Usage
//!
//! ```bash
//! # Effective certificates for a product (inheritance/override applied):
//! medcert resolve product --id prod_nitrile_gloves
//!
//! # Active certificates mapped to a category:
//! medcert resolve category --id cat_surgical_gloves
//!
//! # Usage check before deleting a certificate:
//! medcert resolve usage --id cert_iso13485
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};

use medcert_core::{CategoryId, CertificateId, ProductId};
use medcert_resolve::CatalogSnapshot;
use medcert_store::CatalogStore;

use crate::{print_json, store_from_env};

/// Resolve subcommand arguments.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(subcommand)]
    pub command: ResolveCommand,
}

/// Available resolution queries.
#[derive(Subcommand, Debug)]
pub enum ResolveCommand {
    /// Effective certificates for a product.
    Product {
        /// Product identifier.
        #[arg(long)]
        id: String,
    },

    /// Active certificates mapped to a category.
    Category {
        /// Category identifier.
        #[arg(long)]
        id: String,
    },

    /// Advisory usage check for a certificate.
    Usage {
        /// Certificate identifier.
        #[arg(long)]
        id: String,
    },
}

/// Execute the resolve subcommand.
pub async fn run_resolve(args: &ResolveArgs) -> Result<u8> {
    let store = store_from_env()?;
    let snapshot = CatalogSnapshot::new(
        store.fetch_certificates().await?,
        store.fetch_categories().await?,
        store.fetch_products().await?,
    );

    match &args.command {
        ResolveCommand::Product { id } => {
            let product = ProductId::new(id.as_str())
                .ok()
                .and_then(|pid| snapshot.product(&pid).cloned());
            if product.is_none() {
                tracing::warn!(id = %id, "product not found; resolving to empty set");
            }
            let certificates = snapshot.effective_certificates(product.as_ref());
            print_json(&serde_json::json!({
                "product_id": id,
                "compliance_mode": product.as_ref().map(|p| p.compliance_mode().to_string()),
                "certificates": certificates,
            }))?;
        }
        ResolveCommand::Category { id } => {
            let certificates = match CategoryId::new(id.as_str()) {
                Ok(cid) => snapshot.certificates_for_category(&cid),
                Err(_) => Vec::new(),
            };
            print_json(&serde_json::json!({
                "category_id": id,
                "certificates": certificates,
            }))?;
        }
        ResolveCommand::Usage { id } => {
            let usage = match CertificateId::new(id.as_str()) {
                Ok(cid) => snapshot.usage_of(&cid),
                Err(_) => medcert_resolve::CertificateUsage {
                    in_use: false,
                    categories: Vec::new(),
                    products: Vec::new(),
                },
            };
            print_json(&serde_json::json!({
                "certificate_id": id,
                "usage": usage,
            }))?;
        }
    }

    Ok(0)
}
