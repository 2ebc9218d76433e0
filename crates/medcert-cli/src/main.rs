//! # medcert CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use medcert_cli::report::{run_report, ReportArgs};
use medcert_cli::resolve::{run_resolve, ResolveArgs};
use medcert_cli::serve::{run_serve, ServeArgs};

/// medcert stack CLI
///
/// Certificate resolution queries, compliance-report generation, and the
/// API server for the Novamed site and admin console.
#[derive(Parser, Debug)]
#[command(name = "medcert", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Certificate resolution queries (product, category, usage).
    Resolve(ResolveArgs),

    /// Assemble a compliance report and print it as JSON.
    Report(ReportArgs),

    /// Run the API surface.
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(&args).await,
        Commands::Report(args) => run_report(&args).await,
        Commands::Serve(args) => run_serve(&args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_report_command() {
        let cli = Cli::parse_from([
            "medcert",
            "report",
            "--scope",
            "category",
            "--target-id",
            "cat_1",
        ]);
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.scope, "category");
                assert_eq!(args.target_id, "cat_1");
            }
            other => panic!("expected report command, got: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_resolve_product() {
        let cli = Cli::parse_from(["medcert", "-vv", "resolve", "product", "--id", "prod_1"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }

    #[test]
    fn report_target_id_defaults_to_empty() {
        let cli = Cli::parse_from(["medcert", "report", "--scope", "company"]);
        match cli.command {
            Commands::Report(args) => assert!(args.target_id.is_empty()),
            other => panic!("expected report command, got: {other:?}"),
        }
    }
}
