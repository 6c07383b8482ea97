// THEORY:
// Numeric edge cases (zero means, NaN samples) are never errors here: they resolve to a
// fixed value inside the mean-ratio functor. What *can* go wrong is structural: a window
// whose sample count does not match its radius, two windows of different shapes, or a
// window requested outside of its image. Those are reported through `FilterError`.

use thiserror::Error;

/// Structural errors raised while building windows and filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("neighborhood radius must name at least one dimension")]
    EmptyRadius,
    #[error("neighborhood window size overflows usize for radius {0:?}")]
    SizeOverflow(Vec<usize>),
    #[error("size mismatch: expected {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("neighborhood shape mismatch: expected radius {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("image windows need a 2-dimensional radius, got {0} dimensions")]
    NotPlanar(usize),
    #[error("image size mismatch: {left:?} vs {right:?}")]
    ImageSizeMismatch { left: (u32, u32), right: (u32, u32) },
    #[error("window of radius {radius:?} centered at ({x}, {y}) leaves the {width}x{height} image")]
    WindowOutOfBounds {
        x: u32,
        y: u32,
        radius: Vec<usize>,
        width: u32,
        height: u32,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;
