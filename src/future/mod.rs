//! # Future Adapter
//!
//! Bridges push-style completion ("the producer calls you back once") into
//! pull-style waiting ("`.await` the outcome").
//!
//! ## Pieces
//!
//! - [`suspend`] / [`Continuation`]: the general adapter. Hand the
//!   continuation to any callback API, then await.
//! - [`AsyncResult`] / [`Promise`]: a one-shot, many-reader result with a
//!   `when_complete` observer API, awaited through [`suspend`].
//! - [`Abandoned`] / [`AsyncFailure`]: what a waiter sees when the producer
//!   fails or disappears.
//!
//! ## Concurrency Model
//!
//! Waiting never blocks a worker thread. Each wait registers exactly one
//! observer and parks on its own `oneshot` channel, so any number of waits on
//! the same or different results proceed independently. A result that is
//! already settled wakes its waiter on the first poll.
//!
//! ```
//! use idiom_recipe::future::{AsyncFailure, AsyncResult};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lookup = AsyncResult::<String, AsyncFailure>::spawn(async { Ok("harry".to_string()) });
//! assert_eq!(lookup.await.as_deref(), Ok("harry"));
//! # }
//! ```

pub mod completion;
pub mod error;
pub mod suspend;

pub use completion::*;
pub use error::*;
pub use suspend::*;
