// THEORY:
// The mean ratio is a change detector for two co-registered images, typically SAR
// amplitude or intensity acquisitions of the same scene at two dates. Speckle makes a
// pixel-wise difference useless, so each pixel is compared through the means of its
// two local windows instead, and the comparison is a ratio rather than a difference so
// that it is insensitive to the overall radiometric level:
//
//     r = 1 - min(|m1|, |m2|) / max(|m1|, |m2|)
//
// Key properties:
// 1.  **Bounded**: r lies in [0, 1]. 0 means the windows have the same mean level,
//     values towards 1 mean one window is much darker than the other.
// 2.  **Symmetric**: swapping the two images never changes r.
// 3.  **Fixed degenerate cases**: when both means have the same magnitude (including
//     both zero, or both infinite) r is 0. When exactly one mean is zero r is 1, which
//     falls out of the formula. A NaN sample poisons its mean and r is NaN.
// 4.  **Signs**: amplitudes and intensities are non-negative, but signed inputs still
//     give a bounded result. Means of opposite sign are a full change; otherwise
//     means are compared by absolute value.

use crate::core_modules::neighborhood::neighborhood::Neighborhood;
use crate::core_modules::operator::BinaryNeighborhoodOperator;
use crate::core_modules::sample::{OutputSample, Sample, Working, mean};
use std::marker::PhantomData;

/// Value reported when the two windows have the same mean level.
pub const NO_CHANGE: Working = 0.0;
/// Value reported when exactly one window has a zero mean.
pub const FULL_CHANGE: Working = 1.0;

/// Ratio-of-means statistic for two window means.
///
/// Meant for non-negative intensities. Two non-zero means of opposite sign give
/// `FULL_CHANGE`.
pub fn mean_ratio(first_mean: Working, second_mean: Working) -> Working {
    if first_mean.is_nan() || second_mean.is_nan() {
        return Working::NAN;
    }
    if first_mean != 0.0 && second_mean != 0.0 && (first_mean < 0.0) != (second_mean < 0.0) {
        return FULL_CHANGE;
    }

    let (a, b) = (first_mean.abs(), second_mean.abs());

    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if low == high {
        return NO_CHANGE;
    }
    1.0 - low / high
}

/// Mean-ratio change detector over two co-located neighborhoods.
#[derive(Debug)]
pub struct MeanRatioFunctor<Out> {
    _output: PhantomData<fn() -> Out>,
}

impl<Out> MeanRatioFunctor<Out> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<Out> Default for MeanRatioFunctor<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Out> Clone for MeanRatioFunctor<Out> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Out> Copy for MeanRatioFunctor<Out> {}

impl<In1, In2, Out> BinaryNeighborhoodOperator<In1, In2, Out> for MeanRatioFunctor<Out>
where
    In1: Sample,
    In2: Sample,
    Out: OutputSample,
{
    fn evaluate(&self, first: &Neighborhood<'_, In1>, second: &Neighborhood<'_, In2>) -> Out {
        let first_mean = mean(first.samples()).unwrap_or(0.0);
        let second_mean = mean(second.samples()).unwrap_or(0.0);
        Out::narrow(mean_ratio(first_mean, second_mean))
    }
}
