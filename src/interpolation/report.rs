//! Defines the [`InterpolationReport`] struct returned by every
//! `interpolate(cfg)` entry point.
//!
//! Batch counterpart of [`Interpolator::eval`](crate::interpolation::Interpolator::eval):
//! the report pairs each requested x with its estimate and records the
//! spacing class the method was validated against.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::spacing::Spacing;

/// Summary of a batch interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm`   : method used ([`Algorithm`])
/// - `spacing`     : spacing class of the input points
/// - `n_provided`  : number of input samples
/// - `x_eval`      : requested evaluation points, in request order
/// - `evaluated`   : estimate at each entry of `x_eval`
#[derive(Debug, Clone, Serialize)]
pub struct InterpolationReport {
    pub algorithm  : Algorithm,
    pub spacing    : Spacing,
    pub n_provided : usize,
    pub x_eval     : Vec<f64>,
    pub evaluated  : Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, spacing: Spacing, n_provided: usize, x_eval: &[f64]) -> Self {
        Self {
            algorithm,
            spacing,
            n_provided,
            x_eval: x_eval.to_vec(),
            evaluated: Vec::with_capacity(x_eval.len()),
        }
    }

    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.algorithm_name()
    }

    #[inline]
    pub fn n_evaluated(&self) -> usize {
        self.evaluated.len()
    }

    /// `(x, estimate)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_eval.iter().copied().zip(self.evaluated.iter().copied())
    }
}
