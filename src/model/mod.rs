//! Plain data records used by the demonstrations.
//!
//! - [`person`] holds the nested-optional chain walked by [`crate::chain`].
//! - [`living`] holds the closed [`LivingThing`] sum type.

pub mod living;
pub mod person;

pub use living::*;
pub use person::*;
