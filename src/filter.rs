// THEORY:
// The `filter` module is the top-level API of the crate. A filter does no computation
// of its own: it pairs a neighborhood operator with the window shape it is meant to be
// evaluated on, and checks that every window it is handed has that shape before the
// operator sees it.
//
// Walking an image, splitting it into tiles and deciding what happens at its borders is
// left to the caller. The `*_at` helpers only cover the common single-pixel case of
// gathering co-located windows out of grayscale `image` buffers.

use crate::core_modules::mean::MeanFunctor;
use crate::core_modules::mean_ratio::MeanRatioFunctor;
use crate::core_modules::neighborhood::neighborhood::{Neighborhood, Radius};
use crate::core_modules::operator::{BinaryNeighborhoodOperator, UnaryNeighborhoodOperator};
use crate::error::{FilterError, FilterResult};
use image::{ImageBuffer, Luma, Primitive};

/// Configuration for a `NeighborhoodFilter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Half-width of the window along each dimension. Defaults to a 3x3 window.
    pub radius: Radius,
}

impl FilterConfig {
    pub fn with_radius(radius: Radius) -> Self {
        Self { radius }
    }
}

/// Binds a neighborhood operator to a window shape.
#[derive(Debug, Clone)]
pub struct NeighborhoodFilter<F> {
    config: FilterConfig,
    functor: F,
}

/// Local mean of one image.
pub type MeanFilter<Out> = NeighborhoodFilter<MeanFunctor<Out>>;
/// Mean-ratio change detection between two images.
pub type MeanRatioImageFilter<Out> = NeighborhoodFilter<MeanRatioFunctor<Out>>;

impl<F> NeighborhoodFilter<F> {
    pub fn new(config: FilterConfig, functor: F) -> Self {
        log::debug!(
            "{} over radius {:?} ({} samples per window)",
            std::any::type_name::<F>(),
            config.radius.extents(),
            config.radius.window_len()
        );
        Self { config, functor }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn radius(&self) -> &Radius {
        &self.config.radius
    }

    pub fn functor(&self) -> &F {
        &self.functor
    }

    fn check_shape<T: Clone>(&self, neighborhood: &Neighborhood<'_, T>) -> FilterResult<()> {
        if neighborhood.radius() != self.radius() {
            return Err(FilterError::ShapeMismatch {
                expected: self.radius().extents().to_vec(),
                actual: neighborhood.radius().extents().to_vec(),
            });
        }
        Ok(())
    }

    /// Applies a unary operator to one window of the configured shape.
    pub fn evaluate<In, Out>(&self, neighborhood: &Neighborhood<'_, In>) -> FilterResult<Out>
    where
        In: Clone,
        F: UnaryNeighborhoodOperator<In, Out>,
    {
        self.check_shape(neighborhood)?;
        Ok(self.functor.evaluate(neighborhood))
    }

    /// Applies a binary operator to two windows of the configured shape.
    pub fn evaluate_pair<In1, In2, Out>(
        &self,
        first: &Neighborhood<'_, In1>,
        second: &Neighborhood<'_, In2>,
    ) -> FilterResult<Out>
    where
        In1: Clone,
        In2: Clone,
        F: BinaryNeighborhoodOperator<In1, In2, Out>,
    {
        self.check_shape(first)?;
        self.check_shape(second)?;
        Ok(self.functor.evaluate(first, second))
    }

    /// Output value for pixel `(x, y)` of a grayscale image.
    pub fn evaluate_at<In, Out>(
        &self,
        image: &ImageBuffer<Luma<In>, Vec<In>>,
        x: u32,
        y: u32,
    ) -> FilterResult<Out>
    where
        In: Primitive,
        F: UnaryNeighborhoodOperator<In, Out>,
    {
        let window = Neighborhood::from_luma(image, x, y, self.radius())?;
        Ok(self.functor.evaluate(&window))
    }

    /// Output value for pixel `(x, y)` of two co-registered grayscale images.
    pub fn evaluate_pair_at<In1, In2, Out>(
        &self,
        first: &ImageBuffer<Luma<In1>, Vec<In1>>,
        second: &ImageBuffer<Luma<In2>, Vec<In2>>,
        x: u32,
        y: u32,
    ) -> FilterResult<Out>
    where
        In1: Primitive,
        In2: Primitive,
        F: BinaryNeighborhoodOperator<In1, In2, Out>,
    {
        if first.dimensions() != second.dimensions() {
            return Err(FilterError::ImageSizeMismatch {
                left: first.dimensions(),
                right: second.dimensions(),
            });
        }
        let first_window = Neighborhood::from_luma(first, x, y, self.radius())?;
        let second_window = Neighborhood::from_luma(second, x, y, self.radius())?;
        Ok(self.functor.evaluate(&first_window, &second_window))
    }
}

impl<Out> NeighborhoodFilter<MeanFunctor<Out>> {
    pub fn mean(config: FilterConfig) -> Self {
        Self::new(config, MeanFunctor::new())
    }
}

impl<Out> NeighborhoodFilter<MeanRatioFunctor<Out>> {
    pub fn mean_ratio(config: FilterConfig) -> Self {
        Self::new(config, MeanRatioFunctor::new())
    }
}
