//! Finite- and divided-difference tables.
//!
//! Both tables are `n x n` for `n` samples with only the upper-left
//! triangle (`i + j < n`) meaningful; the rest stays `0.0`.
//!
//! ```text
//! finite : t[i][0] = y_i,  t[i][j] = t[i+1][j-1] - t[i][j-1]
//! divided: d[i][0] = y_i,  d[i][j] = (d[i+1][j-1] - d[i][j-1]) / (x_{i+j} - x_i)
//! ```
//!
//! Columns are filled left to right, each one entirely from the previous
//! column. Tables are derived data: rebuild them whenever the points change.

use std::fmt;

use serde::Serialize;

use crate::interpolation::points::Sample;

/// Which difference a [`DifferenceTable`] holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    Finite,
    Divided,
}

/// Square difference table, row-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceTable {
    kind: DifferenceKind,
    n: usize,
    data: Vec<f64>,
}

impl DifferenceTable {
    fn zeros(kind: DifferenceKind, n: usize) -> Self {
        Self { kind, n, data: vec![0.0; n * n] }
    }

    #[inline] pub fn kind(&self) -> DifferenceKind { self.kind }
    #[inline] pub fn size(&self) -> usize { self.n }
    #[inline] pub fn is_empty(&self) -> bool { self.n == 0 }

    /// Entry `(i, j)`: difference of order `j` starting at sample `i`.
    ///
    /// # Panics
    /// If `i` or `j` is `>= size()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds for {n}x{n} table", n = self.n);
        self.data[i * self.n + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, v: f64) {
        self.data[i * self.n + j] = v;
    }

    /// Full row `i`, including the unused tail past `n - i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Meaningful part of row `i` (`n - i` entries).
    pub fn row_triangle(&self, i: usize) -> &[f64] {
        &self.row(i)[..self.n - i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.n.max(1)).take(self.n)
    }

    /// Copy as nested vectors.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

/// Builds the finite-difference table of the y-values.
///
/// Independent of x-spacing. Returns an empty table for no samples.
pub fn finite_differences(samples: &[Sample]) -> DifferenceTable {
    let n = samples.len();
    let mut t = DifferenceTable::zeros(DifferenceKind::Finite, n);

    for (i, s) in samples.iter().enumerate() {
        t.set(i, 0, s.y);
    }
    for j in 1..n {
        for i in 0..n - j {
            let v = t.get(i + 1, j - 1) - t.get(i, j - 1);
            t.set(i, j, v);
        }
    }

    tracing::debug!(n, "built finite-difference table");
    t
}

/// Builds the divided-difference table bottom-up in `O(n^2)`.
///
/// Entry `(i, j)` is `f[x_i, ..., x_{i+j}]`, so row 0 holds the Newton
/// coefficients. Samples must have distinct x-values.
pub fn divided_differences(samples: &[Sample]) -> DifferenceTable {
    let n = samples.len();
    let mut d = DifferenceTable::zeros(DifferenceKind::Divided, n);

    for (i, s) in samples.iter().enumerate() {
        d.set(i, 0, s.y);
    }
    for j in 1..n {
        for i in 0..n - j {
            let v = (d.get(i + 1, j - 1) - d.get(i, j - 1))
                / (samples[i + j].x - samples[i].x);
            d.set(i, j, v);
        }
    }

    tracing::debug!(n, "built divided-difference table");
    d
}

impl fmt::Display for DifferenceTable {
    /// One line per sample, `y[i]:` followed by its tab-separated triangle row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            write!(f, "y[{i}]:")?;
            for v in self.row_triangle(i) {
                write!(f, "\t{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
