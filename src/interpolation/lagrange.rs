//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in
//! [Lagrange form](https://en.wikipedia.org/wiki/Lagrange_polynomial):
//!
//! ```text
//! P(x) = Σ_i y_i · Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! Valid for any layout of distinct x-values. `O(n^2)` per query and
//! ill-conditioned for many or tightly clustered nodes.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::{validate_samples, Sample};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;

/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then setters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);

/// Lagrange interpolant borrowing its nodes.
#[derive(Debug, Clone, Copy)]
pub struct Lagrange<'a> {
    points: &'a [Sample],
}

impl<'a> Lagrange<'a> {
    pub fn new(points: &'a [Sample]) -> Result<Self, InterpolationError> {
        validate_samples(points)?;
        Ok(Self { points })
    }

    /// Basis polynomial `l_i(x)`.
    #[inline]
    fn basis(&self, i: usize, x: f64) -> f64 {
        let xi = self.points[i].x;
        self.points
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(1.0, |acc, (_, p)| acc * (x - p.x) / (xi - p.x))
    }
}

impl Interpolator for Lagrange<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lagrange
    }

    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok((0..self.points.len())
            .map(|i| self.points[i].y * self.basis(i, x))
            .sum())
    }
}

/// Performs Lagrange interpolation at every point of `cfg.x_eval`.
///
/// # Returns
/// [`InterpolationReport`] with `algorithm` = [`Algorithm::Lagrange`].
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] if no points were set.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let points = cfg.common.points();
    let evals  = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        cfg.common.spacing(),
        points.len(),
        evals,
    );

    let interp = Lagrange::new(points)?;
    report.evaluated = interp.eval_many(evals)?;

    Ok(report)
}
