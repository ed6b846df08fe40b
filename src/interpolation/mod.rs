pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod points;
pub mod spacing;
pub mod differences;

pub mod lagrange;
pub mod newton;
pub mod gauss;

pub use algorithms::Algorithm;
pub use differences::{divided_differences, finite_differences, DifferenceKind, DifferenceTable};
pub use errors::InterpolationError;
pub use gauss::NewtonFinite;
pub use lagrange::Lagrange;
pub use newton::NewtonDivided;
pub use points::{PointSet, Provenance, Sample, TestFunction};
pub use spacing::Spacing;
