//! Command-line configuration for the demonstration binary.
//!
//! Logging is configured separately, through `RUST_LOG` (see
//! [`setup_tracing`](super::setup_tracing)).

use clap::{Parser, ValueEnum};
use std::time::Duration;

/// Which demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Checked parsing and reciprocals.
    Arithmetic,
    /// Pattern matching over living things.
    Living,
    /// Country-code lookup in every chaining style.
    Options,
    /// A delayed greeting from a spawned task.
    Greeting,
    /// Summing many awaited results.
    Sum,
    /// Two concurrent dog lookups.
    Lookup,
    /// The greeting, sum and lookup demonstrations, in order.
    Async,
    /// Everything above, in order.
    All,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "idiom-recipe", version, about = "Runs one idiom demonstration and prints the outcome")]
pub struct DemoConfig {
    /// Demonstration to run.
    #[arg(value_enum, default_value_t = Demo::Async)]
    pub demo: Demo,

    /// Number of results summed by the `sum` demonstration.
    #[arg(long, default_value_t = 1_000_000)]
    pub count: u64,

    /// Delay before the greeting, in milliseconds.
    #[arg(long = "delay-ms", default_value_t = 1000)]
    pub delay_ms: u64,
}

impl DemoConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: Demo::Async,
            count: 1_000_000,
            delay_ms: 1000,
        }
    }
}
