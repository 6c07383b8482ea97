// THEORY:
// The mean functor is the simplest neighborhood operator: the arithmetic mean of one
// window, narrowed to the output sample type. It is the local smoothing step that
// ratio-of-means change detection builds on.

use crate::core_modules::neighborhood::neighborhood::Neighborhood;
use crate::core_modules::operator::UnaryNeighborhoodOperator;
use crate::core_modules::sample::{OutputSample, Sample, mean};
use std::marker::PhantomData;

/// Arithmetic mean of a single neighborhood.
#[derive(Debug)]
pub struct MeanFunctor<Out> {
    _output: PhantomData<fn() -> Out>,
}

impl<Out> MeanFunctor<Out> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<Out> Default for MeanFunctor<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Out> Clone for MeanFunctor<Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Out> Copy for MeanFunctor<Out> {}

impl<In, Out> UnaryNeighborhoodOperator<In, Out> for MeanFunctor<Out>
where
    In: Sample,
    Out: OutputSample,
{
    fn evaluate(&self, neighborhood: &Neighborhood<'_, In>) -> Out {
        // A validated window is never empty.
        Out::narrow(mean(neighborhood.samples()).unwrap_or(0.0))
    }
}
