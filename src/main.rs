//! `link-reports` entry point.
//!
//! # Usage
//!
//! ```bash
//! # Page through short URLs, starting at page 3, with tags
//! link-reports short-url list -p 3 -t
//!
//! # All visits of one short URL on a custom domain
//! link-reports visits short-url abc123 -d s.example.com
//!
//! # Orphan visits to the base URL
//! link-reports visits orphan --type base_url
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_USER`/...): PostgreSQL connection
//! - `PAGE_SIZE`, `RUST_LOG`, `LOG_FORMAT`: see [`link_reports::config`]

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use sqlx::postgres::PgPoolOptions;

use link_reports::cli::{Cli, Reports, TerminalConfirmer};
use link_reports::config;
use link_reports::infrastructure::persistence::{PgShortUrlRepository, PgVisitRepository};
use link_reports::logging::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_from_env()?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(filter, &config.log_format);
    config.print_summary();

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(&config.database_url)
        .context("Invalid database connection string")?;
    let pool = Arc::new(pool);

    let reports = Reports::new(
        Arc::new(PgShortUrlRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool.clone())),
        config.page_size,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = reports
        .dispatch(&cli.command, &mut out, &TerminalConfirmer)
        .await;
    out.flush()?;

    pool.close().await;
    result?;
    Ok(())
}
