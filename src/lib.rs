// THEORY:
// This file is the entry point of the `mean_ratio` library crate. It exposes a single
// neighborhood change detector (the mean ratio) and the small set of types needed to
// drive it: windows, their radius, the operator traits and the filter shell that pairs
// an operator with a window shape.
//
// The crate computes one output value per call. Iterating over a whole image, tiling
// it across threads and handling its borders are the caller's business; every operator
// here is stateless and can be shared freely between threads for that purpose.

pub mod core_modules;
pub mod error;
pub mod filter;

pub use crate::core_modules::mean::MeanFunctor;
pub use crate::core_modules::mean_ratio::{FULL_CHANGE, MeanRatioFunctor, NO_CHANGE, mean_ratio};
pub use crate::core_modules::neighborhood::neighborhood::{Neighborhood, Radius};
pub use crate::core_modules::operator::{BinaryNeighborhoodOperator, UnaryNeighborhoodOperator};
pub use crate::core_modules::sample::{OutputSample, Sample};
pub use crate::error::{FilterError, FilterResult};
pub use crate::filter::{FilterConfig, MeanFilter, MeanRatioImageFilter, NeighborhoodFilter};
