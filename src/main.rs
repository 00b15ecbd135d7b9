//! # Idiom Recipe
//!
//! Runs one demonstration and prints its report to stdout.
//!
//! ```bash
//! cargo run -- --help
//! ```

use clap::Parser;
use idiom_recipe::lifecycle::{setup_tracing, DemoConfig, Showcase};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DemoConfig::parse();
    info!(demo = ?config.demo, count = config.count, delay_ms = config.delay_ms, "Starting");

    let showcase = Showcase::new(config);
    let mut out = std::io::stdout();
    if let Err(e) = showcase.run(&mut out).await {
        error!(error = %e, "Demonstration failed");
        return Err(e.to_string());
    }

    info!("Completed successfully");
    Ok(())
}
