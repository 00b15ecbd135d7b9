//! # Optional Chains
//!
//! Resolves the leaf of a nested structure of optional fields, stopping at the
//! first missing link.
//!
//! ## The Algorithm
//!
//! A short-circuit, left-to-right fold:
//!
//! 1. An absent root resolves to `None`.
//! 2. Each accessor receives the unwrapped value of the previous step.
//! 3. The first accessor that yields `None` ends the walk; later accessors are
//!    **never** invoked.
//! 4. The final step's result is returned unmodified.
//!
//! Absence is a normal outcome, not a failure, so nothing here returns `Result`.
//!
//! ## Styles
//!
//! The same walk can be written several ways and they must all agree:
//!
//! | Style | Function |
//! |-------|----------|
//! | Monadic binding (`?`) | [`country_code_bound`] |
//! | Nested presence checks | [`country_code_imperative`] |
//! | `and_then` chaining | [`country_code_flat_mapped`] |
//! | Step builder | [`country_code`] via [`Chain`] |
//!
//! ```
//! use idiom_recipe::chain::{country_code, Chain};
//! use idiom_recipe::model::HumanPerson;
//!
//! let bobby = HumanPerson::located("bobby", 3, "UK");
//! assert_eq!(country_code(Some(bobby)), Some("UK".to_string()));
//!
//! let chain = Chain::new(Some(HumanPerson::new("alice", None)))
//!     .step(|p| p.address)
//!     .step(|a| a.country);
//! assert_eq!(chain.absent_at(), Some(1));
//! ```

pub mod resolver;
pub mod styles;

pub use resolver::*;
pub use styles::*;
