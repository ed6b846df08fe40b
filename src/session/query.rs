//! Result bundle of a single interpolation query.

use std::fmt;

use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spacing::Spacing;
use crate::interpolation::traits::Interpolator;

/// Estimate from one method, or a marker that its formula does not apply
/// to the current point layout.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome {
    Value(f64),
    NotApplicable,
}

impl Outcome {
    /// Evaluates `built` at `x`, mapping an inapplicable method to
    /// [`Outcome::NotApplicable`]. Every other error propagates.
    pub fn evaluate<I: Interpolator>(
        built: Result<I, InterpolationError>,
        x: f64,
    ) -> Result<Self, InterpolationError> {
        match built {
            Ok(interp) => Ok(Outcome::Value(interp.eval(x)?)),
            Err(InterpolationError::InapplicableMethod { algorithm, spacing }) => {
                tracing::debug!(%algorithm, %spacing, "method not applicable");
                Ok(Outcome::NotApplicable)
            }
            Err(e) => Err(e),
        }
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::NotApplicable => None,
        }
    }

    #[inline]
    pub fn is_applicable(self) -> bool {
        matches!(self, Outcome::Value(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{v}"),
            Outcome::NotApplicable => f.write_str("not applicable"),
        }
    }
}

/// Ground-truth comparison, present when the points were generated from a
/// known function. Errors are absolute; `None` for an inapplicable method.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ExactComparison {
    pub function             : &'static str,
    pub exact                : f64,
    pub lagrange_error       : f64,
    pub newton_divided_error : Option<f64>,
    pub newton_finite_error  : Option<f64>,
}

impl ExactComparison {
    pub fn new(
        function: &'static str,
        exact: f64,
        lagrange: f64,
        newton_divided: Outcome,
        newton_finite: Outcome,
    ) -> Self {
        let err = |o: Outcome| o.value().map(|v| (exact - v).abs());
        Self {
            function,
            exact,
            lagrange_error: (exact - lagrange).abs(),
            newton_divided_error: err(newton_divided),
            newton_finite_error: err(newton_finite),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub x              : f64,
    pub spacing        : Spacing,
    pub lagrange       : f64,
    pub newton_divided : Outcome,
    pub newton_finite  : Outcome,
    pub exact          : Option<ExactComparison>,
}

fn fmt_error(e: Option<f64>) -> String {
    e.map_or_else(|| "cannot be computed".to_string(), |v| v.to_string())
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Interpolation at x = {} ({} points):", self.x, self.spacing)?;
        writeln!(f, "  Lagrange:                   {}", self.lagrange)?;
        writeln!(f, "  Newton (divided diffs):     {}", self.newton_divided)?;
        writeln!(f, "  Newton (finite diffs):      {}", self.newton_finite)?;
        if let Some(cmp) = &self.exact {
            writeln!(f, "  Exact value of {}: {}", cmp.function, cmp.exact)?;
            writeln!(f, "  Lagrange error:             {}", cmp.lagrange_error)?;
            writeln!(f, "  Newton (divided) error:     {}", fmt_error(cmp.newton_divided_error))?;
            writeln!(f, "  Newton (finite) error:      {}", fmt_error(cmp.newton_finite_error))?;
        }
        Ok(())
    }
}
