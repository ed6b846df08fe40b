//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial)
//! for unevenly spaced nodes.
//!
//! Coefficients come from row 0 of the divided-difference table, built once
//! bottom-up, and are evaluated with Horner's scheme:
//!
//! ```text
//! P(x) = f[x0] + (x - x0)(f[x0,x1] + (x - x1)(f[x0,x1,x2] + ...))
//! ```
//!
//! Equidistant nodes are rejected with
//! [`InterpolationError::InapplicableMethod`]; use
//! [`gauss`](crate::interpolation::gauss) for those.

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_SPACING_TOL};
use crate::interpolation::differences::{divided_differences, DifferenceTable};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::{validate_samples, Sample};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::spacing::{classify_with_tol, Spacing};
use crate::interpolation::traits::Interpolator;

/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters.
///
/// # Defaults
/// - Equidistance tolerance [`DEFAULT_SPACING_TOL`]; points that pass the
///   check are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg<'a>);

/// Newton divided-difference interpolant.
///
/// Owns the node x-values and the Newton coefficients
/// `c[k] = f[x0, ..., xk]`.
#[derive(Debug, Clone)]
pub struct NewtonDivided {
    x: Vec<f64>,
    coeffs: Vec<f64>,
    table: DifferenceTable,
}

impl NewtonDivided {
    pub fn new(points: &[Sample]) -> Result<Self, InterpolationError> {
        Self::with_tol(points, DEFAULT_SPACING_TOL)
    }

    pub fn with_tol(points: &[Sample], x_tol: f64) -> Result<Self, InterpolationError> {
        Self::with_spacing(points, classify_with_tol(points, x_tol))
    }

    /// Builds from points whose spacing class is already known.
    pub fn with_spacing(points: &[Sample], spacing: Spacing) -> Result<Self, InterpolationError> {
        validate_samples(points)?;

        if !Algorithm::NewtonDivided.applies_to(spacing) {
            return Err(InterpolationError::InapplicableMethod {
                algorithm: Algorithm::NewtonDivided,
                spacing,
            });
        }

        let table = divided_differences(points);
        let coeffs = table.row_triangle(0).to_vec();
        tracing::trace!(?coeffs, "newton coefficients");

        Ok(Self {
            x: points.iter().map(|p| p.x).collect(),
            coeffs,
            table,
        })
    }

    /// Coefficients `f[x0..xk]` for `k = 0..n`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// The full divided-difference table the coefficients were read from.
    pub fn table(&self) -> &DifferenceTable {
        &self.table
    }
}

impl Interpolator for NewtonDivided {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NewtonDivided
    }

    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        let n = self.coeffs.len();

        let mut p = self.coeffs[n - 1];
        for j in (0..n - 1).rev() {
            p = self.coeffs[j] + (xq - self.x[j]) * p;
        }
        Ok(p)
    }
}

/// Performs Newton divided-difference interpolation.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm`  : [`Algorithm::NewtonDivided`]
/// - `spacing`    : [`Spacing::Uneven`]
/// - `evaluated`  : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] if no points were set.
/// - [`InterpolationError::InapplicableMethod`] if the points are
///   equidistant under `cfg`'s tolerance.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let points = cfg.common.points();
    let evals  = cfg.common.x_eval();

    let interp = NewtonDivided::with_tol(points, cfg.common.x_tol())?;

    let mut report = InterpolationReport::new(
        Algorithm::NewtonDivided,
        Spacing::Uneven,
        points.len(),
        evals,
    );
    report.evaluated = interp.eval_many(evals)?;

    Ok(report)
}
