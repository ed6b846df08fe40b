//! Session configuration.
//!
//! # Defaults
//!
//! ┌ DEFAULT_PLOT_RESOLUTION - samples per plotted curve
//! ├ DEFAULT_PLOT_Y_MARGIN   - padding added above and below the sample y-range
//! └ DEFAULT_SPACING_TOL     - equidistance tolerance, eps = max(tol, tol * |h|)
//!
//! # Validation
//! └ [`SessionCfg::validate`] checks
//!    ├ `plot_resolution` >= 2
//!    ├ `plot_y_margin`   >= 0 and finite
//!    └ `spacing_tol`     >  0 and finite

use serde::{Deserialize, Serialize};

use crate::interpolation::spacing::DEFAULT_SPACING_TOL;
use crate::session::errors::SessionError;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCfg {
    plot_resolution: Option<usize>,
    plot_y_margin:   Option<f64>,
    spacing_tol:     Option<f64>,
}

impl SessionCfg {
    pub const DEFAULT_PLOT_RESOLUTION: usize = 100;
    pub const DEFAULT_PLOT_Y_MARGIN:   f64   = 1.0;
    pub const DEFAULT_SPACING_TOL:     f64   = DEFAULT_SPACING_TOL;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_plot_resolution(mut self, v: usize) -> Self { self.plot_resolution = Some(v); self }
    pub fn with_plot_y_margin  (mut self, v: f64)   -> Self { self.plot_y_margin   = Some(v); self }
    pub fn with_spacing_tol    (mut self, v: f64)   -> Self { self.spacing_tol     = Some(v); self }

    #[inline] #[must_use] pub fn plot_resolution(&self) -> usize { self.plot_resolution.unwrap_or(Self::DEFAULT_PLOT_RESOLUTION) }
    #[inline] #[must_use] pub fn plot_y_margin  (&self) -> f64   { self.plot_y_margin.unwrap_or(Self::DEFAULT_PLOT_Y_MARGIN) }
    #[inline] #[must_use] pub fn spacing_tol    (&self) -> f64   { self.spacing_tol.unwrap_or(Self::DEFAULT_SPACING_TOL) }

    pub fn validate(&self) -> Result<SessionCfg, SessionError> {
        let plot_resolution = self.plot_resolution();
        if plot_resolution < 2 {
            return Err(SessionError::InvalidConfig {
                field: "plot_resolution",
                reason: "must be >= 2",
                got: plot_resolution as f64,
            });
        }

        let plot_y_margin = self.plot_y_margin();
        if !plot_y_margin.is_finite() || plot_y_margin < 0.0 {
            return Err(SessionError::InvalidConfig {
                field: "plot_y_margin",
                reason: "must be finite and >= 0",
                got: plot_y_margin,
            });
        }

        let spacing_tol = self.spacing_tol();
        if !spacing_tol.is_finite() || spacing_tol <= 0.0 {
            return Err(SessionError::InvalidConfig {
                field: "spacing_tol",
                reason: "must be finite and > 0",
                got: spacing_tol,
            });
        }

        Ok(Self {
            plot_resolution: Some(plot_resolution),
            plot_y_margin:   Some(plot_y_margin),
            spacing_tol:     Some(spacing_tol),
        })
    }
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            plot_resolution: Some(Self::DEFAULT_PLOT_RESOLUTION),
            plot_y_margin:   Some(Self::DEFAULT_PLOT_Y_MARGIN),
            spacing_tol:     Some(Self::DEFAULT_SPACING_TOL),
        }
    }
}
