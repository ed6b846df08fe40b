//! Equidistance classification of sample x-values.
//!
//! Points are equidistant when every consecutive gap matches the first gap
//! `h = x[1] - x[0]` within `eps = max(tol, tol * |h|)`, where `tol`
//! defaults to [`DEFAULT_SPACING_TOL`].
//!
//! The check walks the samples in their stored order; it does not sort.

use std::fmt;

use serde::Serialize;

use crate::interpolation::points::Sample;

pub const DEFAULT_SPACING_TOL: f64 = 1e-14;

/// Spacing class of a point set.
/// - [`Spacing::Equidistant`] carries the common step `h` (the first gap)
/// - [`Spacing::Uneven`]      also covers sets with fewer than 2 points
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spacing {
    Equidistant { h: f64 },
    Uneven,
}

impl Spacing {
    #[inline]
    pub fn is_equidistant(self) -> bool {
        matches!(self, Spacing::Equidistant { .. })
    }

    #[inline]
    pub fn step(self) -> Option<f64> {
        match self {
            Spacing::Equidistant { h } => Some(h),
            Spacing::Uneven => None,
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Equidistant { h } => write!(f, "equidistant (h = {h})"),
            Spacing::Uneven => f.write_str("unevenly spaced"),
        }
    }
}

/// Classifies `samples` with [`DEFAULT_SPACING_TOL`].
pub fn classify(samples: &[Sample]) -> Spacing {
    classify_with_tol(samples, DEFAULT_SPACING_TOL)
}

pub fn classify_with_tol(samples: &[Sample], tol: f64) -> Spacing {
    if samples.len() < 2 {
        return Spacing::Uneven;
    }

    let h = samples[1].x - samples[0].x;
    let eps = tol.max(tol * h.abs());

    let even = samples
        .windows(2)
        .all(|w| ((w[1].x - w[0].x) - h).abs() < eps);

    if even { Spacing::Equidistant { h } } else { Spacing::Uneven }
}

/// `true` iff `samples` are equidistant under the default tolerance.
pub fn is_equidistant(samples: &[Sample]) -> bool {
    classify(samples).is_equidistant()
}
