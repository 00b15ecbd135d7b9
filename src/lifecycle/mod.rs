//! # Demonstration Lifecycle
//!
//! Wires the library pieces into runnable demonstrations for the binary.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`DemoConfig`], parsed from the command line
//! 2. **Wiring** - [`Showcase`] owns the dog store the lookup demo uses
//! 3. **Running** - one `info` span per demonstration, report written to any `Write`
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ```bash
//! cargo run -- options
//! cargo run -- sum --count 1000000
//! RUST_LOG=debug cargo run -- all --count 100 --delay-ms 50
//! ```

pub mod config;
pub mod error;
pub mod showcase;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use showcase::*;
pub use self::tracing::*;
