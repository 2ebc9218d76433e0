//! # Report CLI — Assemble compliance reports from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Company-wide audit document:
//! medcert report --scope company
//!
//! # Scoped to one category or product:
//! medcert report --scope category --target-id cat_surgical_gloves
//! medcert report --scope product --target-id prod_nitrile_gloves
//!
//! # Usage audit for a single certificate:
//! medcert report --scope certificate --target-id cert_iso13485
//! ```

use anyhow::Result;
use clap::Args;

use medcert_report::{detect_exceptions, ReportAssembler, ReportScope};
use medcert_resolve::CatalogSnapshot;
use medcert_store::CatalogStore;

use crate::{print_json, store_from_env};

/// Report subcommand arguments.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report scope: company | category | product | certificate.
    #[arg(long)]
    pub scope: String,

    /// Target identifier; omit for company scope.
    #[arg(long, default_value = "")]
    pub target_id: String,
}

/// Execute the report subcommand.
pub async fn run_report(args: &ReportArgs) -> Result<u8> {
    let scope: ReportScope = args.scope.parse()?;
    let store = store_from_env()?;

    let assembler = ReportAssembler::new(store.clone());
    let report = assembler.build_report(scope, &args.target_id).await?;

    let snapshot = CatalogSnapshot::new(
        store.fetch_certificates().await?,
        store.fetch_categories().await?,
        store.fetch_products().await?,
    );
    let exceptions = detect_exceptions(&snapshot, &report.products);

    print_json(&serde_json::json!({
        "report": report,
        "exceptions": exceptions,
    }))?;

    Ok(0)
}
