//! Interactive session state.
//!
//! A [`Session`] owns the current [`PointSet`] and answers every request
//! against it: replacing the points, dumping difference tables, querying
//! all three interpolators at once and producing plot data.
//!
//! Every input method validates before touching the stored set. A failed
//! request leaves the previous points (and their provenance) in place.

pub mod config;
pub mod errors;
pub mod input;
pub mod plot;
pub mod query;

use std::path::Path;

use crate::interpolation::differences::{divided_differences, finite_differences, DifferenceTable};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::gauss::NewtonFinite;
use crate::interpolation::lagrange::Lagrange;
use crate::interpolation::newton::NewtonDivided;
use crate::interpolation::points::{PointSet, Provenance, Sample, TestFunction};
use crate::interpolation::spacing::Spacing;
use crate::interpolation::traits::Interpolator;

pub use config::SessionCfg;
pub use errors::SessionError;
pub use plot::{PlotBundle, Series};
pub use query::{ExactComparison, Outcome, QueryReport};

#[derive(Debug, Clone, Default)]
pub struct Session {
    cfg: SessionCfg,
    points: PointSet,
}

impl Session {
    pub fn new(cfg: SessionCfg) -> Result<Self, SessionError> {
        Ok(Self {
            cfg: cfg.validate()?,
            points: PointSet::empty(),
        })
    }

    #[inline] pub fn cfg(&self) -> &SessionCfg { &self.cfg }
    #[inline] pub fn points(&self) -> &PointSet { &self.points }

    fn replace(&mut self, samples: Vec<Sample>, provenance: Provenance) -> Result<(), SessionError> {
        match self.points.set(samples, provenance) {
            Ok(()) => {
                tracing::info!(
                    n = self.points.len(),
                    provenance = ?self.points.provenance(),
                    spacing = %self.spacing(),
                    "point set replaced"
                );
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "point set rejected; keeping previous points");
                Err(e.into())
            }
        }
    }

    /// Replaces the points with samples entered by hand.
    pub fn set_manual(&mut self, samples: Vec<Sample>) -> Result<(), SessionError> {
        self.replace(samples, Provenance::Manual)
    }

    /// Replaces the points with the contents of an `x,y` file.
    ///
    /// Returns the number of samples loaded.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, SessionError> {
        let path = path.as_ref();
        let samples = input::read_points(path)?;
        self.replace(samples, Provenance::FromFile(path.to_path_buf()))?;
        Ok(self.points.len())
    }

    /// Replaces the points with `n` samples of `function` over `[a, b]`.
    pub fn generate(
        &mut self,
        function: TestFunction,
        a: f64,
        b: f64,
        n: usize,
    ) -> Result<(), SessionError> {
        let generated = PointSet::generate(function, a, b, n)
            .inspect_err(|e| tracing::debug!(error = %e, "generator request rejected"))?;
        self.points = generated;
        tracing::info!(%function, a, b, n, "generated point set");
        Ok(())
    }

    /// Spacing class under the configured tolerance. Generated points
    /// are always equidistant.
    pub fn spacing(&self) -> Spacing {
        self.points.spacing_with_tol(self.cfg.spacing_tol())
    }

    pub fn is_equidistant(&self) -> bool {
        self.spacing().is_equidistant()
    }

    fn require_points(&self) -> Result<&[Sample], SessionError> {
        if self.points.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: self.points.len() }.into());
        }
        Ok(self.points.samples())
    }

    /// Finite-difference table of the current points.
    ///
    /// # Errors
    /// [`InterpolationError::InsufficientPoints`] when no points are loaded.
    pub fn difference_table(&self) -> Result<DifferenceTable, SessionError> {
        Ok(finite_differences(self.require_points()?))
    }

    /// Divided-difference table of the current points.
    pub fn divided_difference_table(&self) -> Result<DifferenceTable, SessionError> {
        Ok(divided_differences(self.require_points()?))
    }

    /// Evaluates all three methods at `x`.
    ///
    /// The Newton variant that does not match the current spacing comes back
    /// as [`Outcome::NotApplicable`]. When the points were generated, the
    /// report also carries the exact value and absolute errors.
    pub fn query(&self, x: f64) -> Result<QueryReport, SessionError> {
        if !x.is_finite() {
            return Err(SessionError::NonFiniteQuery { x });
        }
        let samples = self.require_points()?;
        let spacing = self.spacing();

        let lagrange = Lagrange::new(samples)?.eval(x)?;
        let newton_divided = Outcome::evaluate(NewtonDivided::with_spacing(samples, spacing), x)?;
        let newton_finite = Outcome::evaluate(NewtonFinite::with_spacing(samples, spacing), x)?;

        let exact = self.points.generator().map(|f| {
            ExactComparison::new(f.name(), f.eval(x), lagrange, newton_divided, newton_finite)
        });

        Ok(QueryReport {
            x,
            spacing,
            lagrange,
            newton_divided,
            newton_finite,
            exact,
        })
    }

    /// Samples the applicable interpolants for plotting.
    ///
    /// Curves: Lagrange, then finite-difference Newton for equidistant
    /// points or divided-difference Newton otherwise.
    pub fn plot(&self) -> Result<PlotBundle, SessionError> {
        let samples = self.require_points()?;
        let spacing = self.spacing();

        let (lo, hi) = self.points.x_range().unwrap_or((0.0, 0.0));
        let grid = plot::linspace(lo, hi, self.cfg.plot_resolution());

        let mut curves = vec![plot::sample_curve(&Lagrange::new(samples)?, &grid)?];
        if spacing.is_equidistant() {
            let g = NewtonFinite::with_spacing(samples, spacing)?;
            curves.push(plot::sample_curve(&g, &grid)?);
        } else {
            let nd = NewtonDivided::with_spacing(samples, spacing)?;
            curves.push(plot::sample_curve(&nd, &grid)?);
        }

        Ok(PlotBundle::assemble(&self.points, spacing, &grid, curves, self.cfg.plot_y_margin()))
    }
}
