//! Sample points and the point set they are collected into.
//!
//! A [`PointSet`] is an ordered sequence of [`Sample`]s kept in insertion
//! (or generation) order. Construction always validates:
//! - at least 2 samples
//! - finite coordinates
//! - pairwise distinct x-values (exact comparison, no tolerance)
//!
//! Each set records its [`Provenance`]. Only [`Provenance::Generated`]
//! carries a ground-truth function, so exact values and errors can be
//! reported for it and for nothing else.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spacing::{self, Spacing};

/// A single `(x, y)` sample.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Functions points can be generated from.
///
/// `Custom` takes a plain function pointer so the set stays `Copy`
/// and carries no captured state.
#[derive(Debug, Copy, Clone)]
pub enum TestFunction {
    Sin,
    Square,
    Custom { name: &'static str, f: fn(f64) -> f64 },
}

impl TestFunction {
    #[inline]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            TestFunction::Sin            => x.sin(),
            TestFunction::Square         => x * x,
            TestFunction::Custom { f, .. } => f(x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TestFunction::Sin               => "sin(x)",
            TestFunction::Square            => "x^2",
            TestFunction::Custom { name, .. } => name,
        }
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the current points came from.
#[derive(Debug, Clone, Default)]
pub enum Provenance {
    #[default]
    Manual,
    FromFile(PathBuf),
    Generated(TestFunction),
}

impl Provenance {
    /// The ground-truth function, if the points were sampled from one.
    pub fn generator(&self) -> Option<TestFunction> {
        match self {
            Provenance::Generated(f) => Some(*f),
            _ => None,
        }
    }
}

/// Upper bound on the number of samples in a point set.
///
/// Validation and every interpolant are quadratic in the point count.
pub const MAX_POINTS: usize = 10_000;

/// Checks a requested sample count against `2..=MAX_POINTS`.
///
/// Lets callers reject a count before reading or allocating any samples.
pub fn validate_count(n: usize) -> Result<(), InterpolationError> {
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n });
    }
    if n > MAX_POINTS {
        return Err(InterpolationError::TooManyPoints { got: n, max: MAX_POINTS });
    }
    Ok(())
}

/// Checks the point-set invariants on a raw slice of samples.
///
/// # Errors
/// ┌ [`InterpolationError::InsufficientPoints`] if fewer than 2 samples
/// ├ [`InterpolationError::TooManyPoints`]      if more than [`MAX_POINTS`] samples
/// ├ [`InterpolationError::NonFiniteSample`]    if any coordinate is NaN or infinite
/// └ [`InterpolationError::DuplicateX`]         if two samples share an x-value
pub fn validate_samples(samples: &[Sample]) -> Result<(), InterpolationError> {
    validate_count(samples.len())?;
    if let Some(idx) = samples.iter().position(|s| !s.x.is_finite() || !s.y.is_finite()) {
        let Sample { x, y } = samples[idx];
        return Err(InterpolationError::NonFiniteSample { idx, x, y });
    }
    for i in 0..samples.len() {
        for j in i + 1..samples.len() {
            if samples[i].x == samples[j].x {
                return Err(InterpolationError::DuplicateX {
                    x: samples[i].x,
                    first: i,
                    second: j,
                });
            }
        }
    }
    Ok(())
}

/// Ordered, validated collection of samples.
///
/// An empty set is the only unvalidated state and is what a session
/// starts with; every other value has passed [`validate_samples`].
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    samples: Vec<Sample>,
    provenance: Provenance,
    /// step of a generated grid; those points are equidistant by construction
    grid_step: Option<f64>,
}

impl PointSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a validated set from samples entered by hand.
    pub fn new(samples: Vec<Sample>) -> Result<Self, InterpolationError> {
        Self::with_provenance(samples, Provenance::Manual)
    }

    pub fn with_provenance(
        samples: Vec<Sample>,
        provenance: Provenance,
    ) -> Result<Self, InterpolationError> {
        validate_samples(&samples)?;
        Ok(Self { samples, provenance, grid_step: None })
    }

    /// Samples `function` at `n` evenly spaced points over `[a, b]`.
    ///
    /// `x_i = a + i * (b - a) / (n - 1)` for `i = 0..n`, so both end points
    /// are included. The set is classified as equidistant with step
    /// `(b - a) / (n - 1)` whatever rounding does to the individual gaps.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidInterval`] if `n < 2`, `a >= b`, or
    ///   either bound is non-finite.
    /// - [`InterpolationError::TooManyPoints`] if `n > MAX_POINTS`; checked
    ///   before any sample is produced.
    /// - [`InterpolationError::NonFiniteSample`] if the function produces
    ///   a non-finite value on the grid.
    pub fn generate(
        function: TestFunction,
        a: f64,
        b: f64,
        n: usize,
    ) -> Result<Self, InterpolationError> {
        if n < 2 || !a.is_finite() || !b.is_finite() || a >= b {
            return Err(InterpolationError::InvalidInterval { a, b, n });
        }
        validate_count(n)?;

        let step = (b - a) / (n - 1) as f64;
        let samples = (0..n)
            .map(|i| {
                let x = a + i as f64 * step;
                Sample::new(x, function.eval(x))
            })
            .collect();

        let mut set = Self::with_provenance(samples, Provenance::Generated(function))?;
        set.grid_step = Some(step);
        Ok(set)
    }

    /// Replaces the contents in place.
    ///
    /// Validation happens before anything is touched; on error `self`
    /// is left exactly as it was.
    pub fn set(
        &mut self,
        samples: Vec<Sample>,
        provenance: Provenance,
    ) -> Result<(), InterpolationError> {
        *self = Self::with_provenance(samples, provenance)?;
        Ok(())
    }

    #[inline] pub fn samples(&self) -> &[Sample] { &self.samples }
    #[inline] pub fn len(&self) -> usize { self.samples.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    #[inline] pub fn provenance(&self) -> &Provenance { &self.provenance }
    #[inline] pub fn generator(&self) -> Option<TestFunction> { self.provenance.generator() }

    pub fn xs(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    /// `(min_x, max_x)`, or `None` for an empty set.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(self.samples.iter().map(|s| s.x))
    }

    /// `(min_y, max_y)`, or `None` for an empty set.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(self.samples.iter().map(|s| s.y))
    }

    /// Spacing class with the default tolerance.
    pub fn spacing(&self) -> Spacing {
        self.spacing_with_tol(spacing::DEFAULT_SPACING_TOL)
    }

    /// Spacing class under `tol`. Generated grids report their nominal
    /// step without re-measuring the gaps.
    pub fn spacing_with_tol(&self, tol: f64) -> Spacing {
        match self.grid_step {
            Some(h) => Spacing::Equidistant { h },
            None    => spacing::classify_with_tol(&self.samples, tol),
        }
    }

    pub fn is_equidistant(&self) -> bool {
        self.spacing().is_equidistant()
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None           => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
