//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with the default spacing tolerance
//! [`DEFAULT_SPACING_TOL`]. Shared by all interpolation algorithms.
//!
//! [`CommonCfg`] : universal fields
//! - `points`  : samples to interpolate
//! - `x_eval`  : x values to evaluate
//! - `x_tol`   : equidistance tolerance, eps = max(tol, tol * |h|)
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::{validate_samples, Sample};
use crate::interpolation::spacing::{self, Spacing};

pub use crate::interpolation::spacing::DEFAULT_SPACING_TOL;

#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) points : &'a [Sample],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_tol  : f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            points : &[],
            x_eval : &[],
            x_tol  : DEFAULT_SPACING_TOL,
        }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        validate_samples(self.points)
    }

    /// Spacing class of the configured points under `x_tol`.
    pub fn spacing(&self) -> Spacing {
        spacing::classify_with_tol(self.points, self.x_tol)
    }

    // getters
    pub fn points(&self) -> &'a [Sample] { self.points }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_tol(&self)  -> f64 { self.x_tol }

    // setters
    pub(crate) fn with_points(&mut self, v: &'a [Sample]) { self.points = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_tol(&mut self, v: f64) { self.x_tol = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_points(
                mut self,
                v: &'a $crate::interpolation::points::PointSet,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::points::validate_samples(v.samples())?;
                self.common.with_points(v.samples());
                Ok(self)
            }

            pub fn set_samples(
                mut self,
                v: &'a [$crate::interpolation::points::Sample],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::points::validate_samples(v)?;
                self.common.with_points(v);
                Ok(self)
            }

            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_tol(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
