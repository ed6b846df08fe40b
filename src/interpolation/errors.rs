//! Interpolation error types.
//!
//! ┌ input validation   : point count, duplicate or non-finite samples
//! ├ generator requests : invalid interval or sample count
//! └ method selection   : formula not valid for the point layout

use thiserror::Error;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::spacing::Spacing;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("too many points: got {got}, at most {max} supported")]
    TooManyPoints { got: usize, max: usize },

    #[error("duplicate x-value {x} at indices {first} and {second}")]
    DuplicateX { x: f64, first: usize, second: usize },

    #[error("non-finite sample at index {idx}: ({x}, {y})")]
    NonFiniteSample { idx: usize, x: f64, y: f64 },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("invalid interval: need finite a < b and n >= 2. got [{a}, {b}] with n={n}")]
    InvalidInterval { a: f64, b: f64, n: usize },

    #[error("{algorithm} interpolation does not apply to {spacing} points")]
    InapplicableMethod { algorithm: Algorithm, spacing: Spacing },

    #[error("invalid spacing tolerance {got}: must be finite and > 0")]
    InvalidXTol { got: f64 },
}
