//! Plot data for an external renderer.
//!
//! A [`PlotBundle`] holds the sample nodes plus dense samplings over
//! `[min_x, max_x]` of the generator function (when known), the Lagrange
//! interpolant and whichever Newton variant applies. It is written as
//! JSON; drawing is left to the consumer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::points::PointSet;
use crate::interpolation::spacing::Spacing;
use crate::interpolation::traits::Interpolator;
use crate::session::errors::SessionError;

/// Paired x/y sequence with a legend label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotBundle {
    pub spacing   : Spacing,
    pub nodes     : Series,
    pub reference : Option<Series>,
    pub curves    : Vec<Series>,
    pub x_range   : (f64, f64),
    pub y_range   : (f64, f64),
}

/// `n` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + i as f64 * step).collect()
        }
    }
}

/// Samples `interp` on `grid`, labelled with its method name.
pub fn sample_curve<I: Interpolator>(interp: &I, grid: &[f64]) -> Result<Series, InterpolationError> {
    Ok(Series {
        label: interp.algorithm().algorithm_name().to_string(),
        x: grid.to_vec(),
        y: interp.eval_many(grid)?,
    })
}

impl PlotBundle {
    /// Assembles the node series, reference curve and axis ranges around
    /// already-sampled interpolant `curves`.
    pub(crate) fn assemble(
        points: &PointSet,
        spacing: Spacing,
        grid: &[f64],
        curves: Vec<Series>,
        y_margin: f64,
    ) -> Self {
        let x_range = points.x_range().unwrap_or((0.0, 0.0));
        let (y_lo, y_hi) = points.y_range().unwrap_or((0.0, 0.0));

        let reference = points.generator().map(|f| Series {
            label: f.name().to_string(),
            x: grid.to_vec(),
            y: grid.iter().map(|&x| f.eval(x)).collect(),
        });

        Self {
            spacing,
            nodes: Series {
                label: "nodes".to_string(),
                x: points.xs(),
                y: points.ys(),
            },
            reference,
            curves,
            x_range,
            y_range: (y_lo - y_margin, y_hi + y_margin),
        }
    }

    /// Writes the bundle as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), SessionError> {
        let file = File::create(path).map_err(|source| SessionError::PlotWrite {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        tracing::info!(path = %path.display(), curves = self.curves.len(), "wrote plot data");
        Ok(())
    }
}
