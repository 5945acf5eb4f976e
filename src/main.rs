//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_resolver` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All redirect resolution is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use redirect_resolver::initialization::init_logger_with;
use redirect_resolver::{Config, Opt, RedirectClient};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();
    let urls = opt.urls.clone();
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = RedirectClient::from_config(&config).context("Failed to build HTTP client")?;

    let mut failed = 0usize;
    for url in &urls {
        match client.resolve(url).await {
            Ok(response) => match (response.url(), response.error()) {
                (Some(target), None) => {
                    println!("{url} -> {target} ({})", response.status());
                }
                (_, error) => {
                    failed += 1;
                    let reason = error
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "no response".to_string());
                    eprintln!("{url} -> failed ({reason})");
                }
            },
            Err(e) => {
                failed += 1;
                eprintln!("{url} -> invalid URL ({e})");
            }
        }
    }

    if failed > 0 {
        eprintln!(
            "redirect_resolver: {failed} of {} URL{} failed",
            urls.len(),
            if urls.len() == 1 { "" } else { "s" }
        );
        process::exit(1);
    }
    Ok(())
}
