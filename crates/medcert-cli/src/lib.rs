//! # medcert-cli — Operator CLI for the medcert Stack
//!
//! Provides the `medcert` command-line interface for operators and CI:
//!
//! - `medcert resolve` — certificate resolution queries against the
//!   hosted store (product, category, usage).
//! - `medcert report` — assemble a compliance report and print it as
//!   JSON, for piping into audit tooling.
//! - `medcert serve` — run the API surface.
//!
//! All subcommands read store connection settings from the environment
//! (`MEDCERT_STORE_URL`, `MEDCERT_STORE_API_KEY`).

pub mod report;
pub mod resolve;
pub mod serve;

use std::sync::Arc;

use anyhow::{Context, Result};

use medcert_store::{CatalogStore, HttpCatalogStore, StoreConfig};

/// Build the hosted-store client from environment configuration.
pub fn store_from_env() -> Result<Arc<dyn CatalogStore>> {
    let config = StoreConfig::from_env().context("store configuration")?;
    let store = HttpCatalogStore::new(&config).context("store client construction")?;
    Ok(Arc::new(store))
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
