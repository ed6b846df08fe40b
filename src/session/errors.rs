//! Session error types.
//!
//! ┌ [`SessionError::Interpolation`] : core validation and method errors
//! ├ [`SessionError::FileRead`]      : point file could not be read
//! ├ [`SessionError::Parse`]         : malformed `x,y` line
//! ├ [`SessionError::PlotWrite`]     : plot bundle could not be written
//! └ [`SessionError::InvalidConfig`] : rejected session setting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: malformed sample {content:?}, expected `x,y`")]
    Parse { line: usize, content: String },

    #[error("query point must be finite. got {x}")]
    NonFiniteQuery { x: f64 },

    #[error("failed to write plot data to {}: {source}", path.display())]
    PlotWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize plot data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}. got {got}")]
    InvalidConfig { field: &'static str, reason: &'static str, got: f64 },
}
