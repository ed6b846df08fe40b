//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and the point layout each one requires.

use std::fmt;

use serde::Serialize;

use crate::interpolation::spacing::Spacing;

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`]      Lagrange basis polynomials, any layout
/// - [`Algorithm::NewtonDivided`] Newton form with divided differences, uneven points only
/// - [`Algorithm::NewtonFinite`]  Newton/Gauss form with finite differences, equidistant points only
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Lagrange,
    NewtonDivided,
    NewtonFinite,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange      => "lagrange",
            Algorithm::NewtonDivided => "newton divided-difference",
            Algorithm::NewtonFinite  => "newton finite-difference",
        }
    }

    /// Whether the method's formula is valid for points with the given spacing.
    pub fn applies_to(self, spacing: Spacing) -> bool {
        match self {
            Algorithm::Lagrange      => true,
            Algorithm::NewtonDivided => !spacing.is_equidistant(),
            Algorithm::NewtonFinite  => spacing.is_equidistant(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}
