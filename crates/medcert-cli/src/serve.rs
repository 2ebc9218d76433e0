//! # Serve CLI — Run the API surface.
//!
//! ## Usage
//!
//! ```bash
//! MEDCERT_STORE_URL=… MEDCERT_STORE_API_KEY=… medcert serve --bind 0.0.0.0:8080
//! ```

use anyhow::{Context, Result};
use clap::Args;

use medcert_api::{app, AppState};

use crate::store_from_env;

/// Serve subcommand arguments.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: String,
}

/// Execute the serve subcommand. Runs until interrupted.
pub async fn run_serve(args: &ServeArgs) -> Result<u8> {
    let store = store_from_env()?;
    let state = AppState::new(store);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!(bind = %args.bind, "medcert API listening");

    axum::serve(listener, app(state))
        .await
        .context("server run")?;

    Ok(0)
}
