//! # Checked Arithmetic
//!
//! A small pipeline showing errors as values: each stage returns `Result`, and
//! [`magic`] threads them with `and_then`/`map` so the first failure wins.
//!
//! ```
//! use idiom_recipe::numbers::{magic, NumberError};
//!
//! assert_eq!(magic("4"), Ok("0.25".to_string()));
//! assert_eq!(magic("0"), Err(NumberError::Reciprocal));
//! assert_eq!(magic("saf"), Err(NumberError::Parse("saf".into())));
//! ```

pub mod error;

pub use error::*;

use tracing::debug;

/// Parses an optionally negative run of ASCII digits.
///
/// Signs other than a leading `-`, whitespace and out-of-range values are all
/// rejected with [`NumberError::Parse`].
pub fn parse(input: &str) -> Result<i32, NumberError> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumberError::Parse(input.to_string()));
    }
    input
        .parse()
        .map_err(|_| NumberError::Parse(input.to_string()))
}

pub fn reciprocal(value: i32) -> Result<f64, NumberError> {
    if value == 0 {
        Err(NumberError::Reciprocal)
    } else {
        Ok(1.0 / f64::from(value))
    }
}

/// Shortest round-trip form, always with a fractional part (`1.0`) and in
/// exponent notation at the extremes (`-4.656612873077393e-10`).
pub fn stringify(value: f64) -> String {
    format!("{value:?}")
}

/// `parse`, then `reciprocal`, then `stringify`.
pub fn magic(input: &str) -> Result<String, NumberError> {
    let outcome = parse(input).and_then(reciprocal).map(stringify);
    if let Err(e) = &outcome {
        debug!(input, error = %e, "magic failed");
    }
    outcome
}

/// Two's-complement product; overflow wraps around.
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
