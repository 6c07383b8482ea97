// THEORY:
// A neighborhood operator turns one or two windows into a single output sample. These
// traits are the seam between a per-pixel computation and whatever walks the image:
// the walker supplies read-only windows, the operator returns the value to store.
// Operators take `&self` and must not keep per-call state, so one instance can be
// shared across threads and called in any order.

use crate::core_modules::neighborhood::neighborhood::Neighborhood;

/// `(neighborhood) -> sample`.
pub trait UnaryNeighborhoodOperator<In: Clone, Out> {
    fn evaluate(&self, neighborhood: &Neighborhood<'_, In>) -> Out;
}

/// `(neighborhood, neighborhood) -> sample`, one window from each input image.
pub trait BinaryNeighborhoodOperator<In1: Clone, In2: Clone, Out> {
    fn evaluate(&self, first: &Neighborhood<'_, In1>, second: &Neighborhood<'_, In2>) -> Out;
}
