//! Construction error types for Tally entities.
//!
//! Operations on a constructed entity never fail with these: a refused
//! operation returns a [`Rejection`](crate::outcome::Rejection) value instead.
//! `CoreError` only covers values that cannot be built in the first place.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Constructor arguments failed validation (zero bounds, impossible ceilings).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A counter was given a value above its maximum.
    #[error("Invalid counter: value {value} exceeds maximum {max}")]
    InvalidCounter { value: u32, max: u32 },
}
