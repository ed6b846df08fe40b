//! Newton/Gauss (Finite-Difference) Interpolation
//!
//! Interpolation on equidistant nodes from the finite-difference table,
//! with step `h` and `t = (x - x_s) / h`.
//!
//! Queries with `x <= x[n/2]` use the forward formula anchored at the
//! bracketing node `s`:
//!
//! ```text
//! P(x) = y_s + t Δy_s + t(t-1)/2! Δ²y_s + ...        (while s + k < n)
//! ```
//!
//! Queries with `x > x[n/2]` use the backward formula anchored at the last
//! node:
//!
//! ```text
//! P(x) = y_n + t ∇y_n + t(t+1)/2! ∇²y_n + ...         (∇^k y_n = Δ^k y_{n-k})
//! ```
//!
//! The branch is a hard switch at the middle node, not a blend.
//! Unevenly spaced nodes are rejected with
//! [`InterpolationError::InapplicableMethod`].

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::differences::{finite_differences, DifferenceTable};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::{validate_samples, Sample};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spacing::{classify_with_tol, Spacing};
use crate::interpolation::traits::Interpolator;

/// Finite-difference interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`GaussCfg::new`] then setters.
///
/// # Defaults
/// - Equidistance tolerance [`DEFAULT_SPACING_TOL`]; points that fail the
///   check are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> GaussCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(GaussCfg<'a>);

/// Which Newton formula a query was evaluated with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Branch {
    /// forward differences from the bracketing node
    Forward { start: usize },
    /// backward differences from the last node
    Backward { start: usize },
}

/// Finds the anchor node for the forward formula.
///
/// Returns the first `i` with `x[i] <= xq <= x[i+1]`. Left of the first
/// node clamps to `0`, right of the last node clamps to `n - 1`.
/// Assumes non-decreasing `x`; falls back to `0` if no bracket exists.
pub fn bracket_start(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    if n == 0 || xq < x[0] {
        return 0;
    }
    if xq > x[n - 1] {
        return n - 1;
    }
    x.windows(2)
        .position(|w| w[0] <= xq && xq <= w[1])
        .unwrap_or(0)
}

/// Newton/Gauss finite-difference interpolant.
#[derive(Debug, Clone)]
pub struct NewtonFinite {
    x: Vec<f64>,
    h: f64,
    table: DifferenceTable,
}

impl NewtonFinite {
    pub fn new(points: &[Sample]) -> Result<Self, InterpolationError> {
        Self::with_tol(points, DEFAULT_SPACING_TOL)
    }

    pub fn with_tol(points: &[Sample], x_tol: f64) -> Result<Self, InterpolationError> {
        Self::with_spacing(points, classify_with_tol(points, x_tol))
    }

    /// Builds from points whose spacing class is already known; the step
    /// `h` is taken from `spacing`.
    pub fn with_spacing(points: &[Sample], spacing: Spacing) -> Result<Self, InterpolationError> {
        validate_samples(points)?;

        let Some(h) = spacing.step() else {
            return Err(InterpolationError::InapplicableMethod {
                algorithm: Algorithm::NewtonFinite,
                spacing,
            });
        };

        Ok(Self {
            x: points.iter().map(|p| p.x).collect(),
            h,
            table: finite_differences(points),
        })
    }

    #[inline] pub fn step(&self) -> f64 { self.h }
    #[inline] pub fn table(&self) -> &DifferenceTable { &self.table }

    /// Formula and anchor node used for `xq`.
    pub fn branch(&self, xq: f64) -> Branch {
        let n = self.x.len();
        if xq <= self.x[n / 2] {
            Branch::Forward { start: bracket_start(&self.x, xq) }
        } else {
            Branch::Backward { start: n - 1 }
        }
    }

    fn forward(&self, start: usize, xq: f64) -> f64 {
        let n = self.x.len();
        let t = (xq - self.x[start]) / self.h;

        let mut result = self.table.get(start, 0);
        let mut term = 1.0;
        let mut factorial = 1.0;

        for k in 1..n - start {
            let kf = k as f64;
            term *= t - kf + 1.0;
            factorial *= kf;
            let delta = self.table.get(start, k);
            result += term / factorial * delta;
            tracing::trace!(k, delta, result, "forward term");
        }
        result
    }

    fn backward(&self, start: usize, xq: f64) -> f64 {
        let t = (xq - self.x[start]) / self.h;

        let mut result = self.table.get(start, 0);
        let mut term = 1.0;
        let mut factorial = 1.0;

        for k in 1..=start {
            let kf = k as f64;
            term *= t + kf - 1.0;
            factorial *= kf;
            let nabla = self.table.get(start - k, k);
            result += term / factorial * nabla;
            tracing::trace!(k, nabla, result, "backward term");
        }
        result
    }
}

impl Interpolator for NewtonFinite {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NewtonFinite
    }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let branch = self.branch(xq);
        tracing::debug!(xq, ?branch, "finite-difference branch");

        Ok(match branch {
            Branch::Forward { start }  => self.forward(start, xq),
            Branch::Backward { start } => self.backward(start, xq),
        })
    }
}

/// Performs Newton/Gauss finite-difference interpolation.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm`  : [`Algorithm::NewtonFinite`]
/// - `spacing`    : [`Spacing::Equidistant`] with the common step
/// - `evaluated`  : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] if no points were set.
/// - [`InterpolationError::InapplicableMethod`] if the points are not
///   equidistant under `cfg`'s tolerance.
pub fn interpolate(cfg: GaussCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let points = cfg.common.points();
    let evals  = cfg.common.x_eval();

    let interp = NewtonFinite::with_tol(points, cfg.common.x_tol())?;

    let mut report = InterpolationReport::new(
        Algorithm::NewtonFinite,
        Spacing::Equidistant { h: interp.step() },
        points.len(),
        evals,
    );
    report.evaluated = interp.eval_many(evals)?;

    Ok(report)
}
