//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use redirect_status::initialization::{init_crypto_provider, init_logger_with};
use redirect_status::{trace_with_config, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    let result = trace_with_config(&config).await;

    if config.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize trace result")?
        );
        if result.failed {
            process::exit(1);
        }
        return Ok(());
    }

    if result.failed {
        eprintln!("redirect_status error: {}", result.failure_message);
        process::exit(1);
    }

    println!("{}", result.requested_url);
    for hop in &result.hops {
        println!(
            "{:>3}  {:<4} {:<9} {:<8} {}",
            hop.number, hop.status_code, hop.protocol, hop.tls_version, hop.url
        );
    }

    Ok(())
}
