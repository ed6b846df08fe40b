//! # nodal
//!
//! Polynomial interpolation of one-dimensional sample data.
//!
//! - [`interpolation`] : point sets, finite/divided-difference tables, the
//!   equidistance check, and three interpolants:
//!   - Lagrange ([`interpolation::lagrange`]) for any layout
//!   - Newton with divided differences ([`interpolation::newton`]) for
//!     unevenly spaced points
//!   - Newton/Gauss with finite differences ([`interpolation::gauss`]) for
//!     equidistant points
//! - [`session`] : the stateful front end: input (manual, file, generated),
//!   table dumps, combined queries with error reporting, plot data.
//! - [`observe`] : `tracing` subscriber setup for the binary.
//!
//! ```
//! use nodal::interpolation::{Interpolator, Lagrange, NewtonDivided, Sample};
//!
//! let pts = [Sample::new(0.0, 0.0), Sample::new(1.0, 1.0), Sample::new(4.0, 16.0)];
//! let l = Lagrange::new(&pts).unwrap().eval(2.0).unwrap();
//! let n = NewtonDivided::new(&pts).unwrap().eval(2.0).unwrap();
//! assert!((l - 4.0).abs() < 1e-12 && (n - 4.0).abs() < 1e-12);
//! ```

pub mod interpolation;
pub mod observe;
pub mod session;
