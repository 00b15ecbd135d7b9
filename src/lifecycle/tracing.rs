//! # Observability & Tracing
//!
//! Structured logging for the demonstrations.
//!
//! ## What Gets Traced
//!
//! - **Chains**: which link was missing when a lookup comes up empty (`debug`)
//! - **Results**: settlement and the number of observers woken (`debug`)
//! - **Abandonment**: promises dropped without completing (`warn`)
//! - **Demonstrations**: one span per demonstration (`info`)
//!
//! ## Usage
//!
//! ```bash
//! # Demonstration spans only
//! RUST_LOG=info cargo run -- options
//!
//! # Every short-circuit and settlement
//! RUST_LOG=debug cargo run -- all --count 1000
//! ```
//!
//! Demonstration output goes to stdout with `println!`-style writes; log
//! records are separate and only appear when `RUST_LOG` enables them.

/// Installs the global subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
