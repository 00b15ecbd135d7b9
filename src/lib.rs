#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Idiom Recipe
//!
//! > **Optional chains and awaitable callbacks, the Rust way.**
//!
//! This crate collects small, self-contained demonstrations of functional error handling,
//! optional chaining, algebraic data types and callback-to-`await` adaptation on Tokio.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One Representation for Absence
//! Absence is always `Option`, failure is always `Result`. There are no nulls and no
//! parallel "optional" types; the different *styles* of walking a nested optional structure
//! are kept side by side instead, and they are required to agree.
//!
//! ### Waiting Without Blocking
//! A callback that fires "some time later" becomes a value you can `.await`. The waiting task
//! yields its worker thread instead of sleeping on it.
//!
//! ## 🚀 Core Concepts
//!
//! ### Short-Circuit Chains
//! [`chain::Chain`] walks `root -> field -> field -> leaf`, stopping at the first missing link
//! and remembering which one it was. See [`chain`] for the monadic, imperative and
//! `and_then` equivalents.
//!
//! ### One-Shot Results
//! [`future::AsyncResult`] is resolved exactly once by its [`future::Promise`] and may be awaited
//! by any number of tasks. [`future::suspend`] is the general adapter underneath it: hand out a
//! [`future::Continuation`], then await its resumption.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each module defines its own error enum (`NumberError`, `AsyncFailure`, `DemoError`) with
//! `thiserror`. Failures that cross an `.await` are returned unchanged to the waiter.
//!
//! ### 2. Concurrency Model
//! A result's state is a single mutex-guarded cell; observers are registered and invoked
//! outside the lock, and each waiter parks on its own `oneshot` channel.
//!
//! ### 3. Observability
//! `tracing` throughout: chains log where they short-circuited, results log settlement, and
//! every demonstration runs in its own span. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`chain`] - optional chain resolution in four equivalent styles
//! - [`future`] - the callback-to-`await` adapter and one-shot results
//! - [`model`] - the nested person records and the `LivingThing` sum type
//! - [`numbers`] - checked parsing and reciprocals as a `Result` pipeline
//! - [`store`] - an async dog store whose lookups return [`future::AsyncResult`]
//! - [`lifecycle`] - configuration, tracing setup and the demonstration runner
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Greeting, sum and lookup demonstrations (default)
//! cargo run
//!
//! # Anything else, with logs
//! RUST_LOG=debug cargo run -- options
//! cargo run -- sum --count 1000000
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod chain;
pub mod future;
pub mod lifecycle;
pub mod model;
pub mod numbers;
pub mod store;
