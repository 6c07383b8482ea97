// THEORY:
// The `Neighborhood` module holds the unit of local statistics: a fixed-shape window of
// samples taken around a center coordinate. Like `Chunk` in a grid-based engine, it is a
// "dumb" data container. It knows its shape and hands out its samples; it never decides
// how it was sampled or what is computed from it.
//
// Key architectural principles:
// 1.  **Shape is validated once**: a `Radius` is checked when it is built (at least one
//     dimension, window length fits in `usize`), and a `Neighborhood` checks that its
//     sample count matches the radius. Downstream code can trust both.
// 2.  **Row-major layout**: samples are ordered with dimension 0 varying fastest, so for
//     a 2-D window the first `2 * rx + 1` samples are the top row.
// 3.  **Borrow when possible**: a window built over a caller's slice borrows it; a window
//     gathered from an image owns a copy, because image rows are not contiguous.
// 4.  **No boundary policy**: a window that would leave its image is refused, not padded.
//     Boundary handling belongs to whoever walks the image.

pub mod neighborhood {
    use crate::error::{FilterError, FilterResult};
    use image::{ImageBuffer, Luma, Primitive};
    use std::borrow::Cow;

    /// Per-dimension half-widths of a window. A window spans `2 * r + 1` samples along
    /// each dimension.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Radius {
        extents: Vec<usize>,
        window_len: usize,
    }

    impl Radius {
        pub fn new(extents: Vec<usize>) -> FilterResult<Self> {
            if extents.is_empty() {
                return Err(FilterError::EmptyRadius);
            }
            let window_len = extents
                .iter()
                .try_fold(1usize, |len, &r| {
                    r.checked_mul(2)
                        .and_then(|d| d.checked_add(1))
                        .and_then(|span| len.checked_mul(span))
                })
                .ok_or_else(|| FilterError::SizeOverflow(extents.clone()))?;

            Ok(Self { extents, window_len })
        }

        /// The same radius along every one of `dimensions` axes.
        pub fn uniform(dimensions: usize, radius: usize) -> FilterResult<Self> {
            Self::new(vec![radius; dimensions])
        }

        /// A 2-D `(2r + 1) x (2r + 1)` window.
        pub fn square(radius: usize) -> FilterResult<Self> {
            Self::uniform(2, radius)
        }

        pub fn extents(&self) -> &[usize] {
            &self.extents
        }

        pub fn dimensions(&self) -> usize {
            self.extents.len()
        }

        /// Number of samples in a window of this radius.
        pub fn window_len(&self) -> usize {
            self.window_len
        }
    }

    impl Default for Radius {
        /// 3x3.
        fn default() -> Self {
            Self {
                extents: vec![1, 1],
                window_len: 9,
            }
        }
    }

    /// A read-only window of samples around a center coordinate.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Neighborhood<'a, T: Clone> {
        radius: Radius,
        samples: Cow<'a, [T]>,
    }

    impl<'a, T: Clone> Neighborhood<'a, T> {
        /// Wraps `samples` (row-major, dimension 0 fastest) as a window of `radius`.
        pub fn new(radius: Radius, samples: &'a [T]) -> FilterResult<Self> {
            if samples.len() != radius.window_len() {
                return Err(FilterError::SizeMismatch {
                    expected: radius.window_len(),
                    actual: samples.len(),
                });
            }
            Ok(Self {
                radius,
                samples: Cow::Borrowed(samples),
            })
        }

        pub fn radius(&self) -> &Radius {
            &self.radius
        }

        pub fn samples(&self) -> &[T] {
            &self.samples
        }

        pub fn len(&self) -> usize {
            self.samples.len()
        }

        /// Always false: every radius yields at least one sample.
        pub fn is_empty(&self) -> bool {
            self.samples.is_empty()
        }

        /// The sample the window is centered on.
        pub fn center(&self) -> &T {
            // Every span is odd, so the row-major center sits at len / 2.
            &self.samples[self.samples.len() / 2]
        }
    }

    impl<'a, T: Primitive> Neighborhood<'a, T> {
        /// Copies the window of `radius` centered on `(x, y)` out of a grayscale image.
        ///
        /// `radius` must be 2-D (`[rx, ry]`) and the whole window must lie inside the image.
        pub fn from_luma(
            image: &ImageBuffer<Luma<T>, Vec<T>>,
            x: u32,
            y: u32,
            radius: &Radius,
        ) -> FilterResult<Self> {
            let &[rx, ry] = radius.extents() else {
                return Err(FilterError::NotPlanar(radius.dimensions()));
            };
            let (width, height) = image.dimensions();

            let bounds = |center: u32, r: usize, limit: u32| -> Option<(usize, usize)> {
                let first = (center as usize).checked_sub(r)?;
                let last = (center as usize).checked_add(r)?;
                (last < limit as usize).then_some((first, last))
            };

            let (Some((x0, x1)), Some((y0, y1))) = (bounds(x, rx, width), bounds(y, ry, height))
            else {
                log::trace!(
                    "window {:?} at ({}, {}) leaves {}x{} image",
                    radius.extents(),
                    x,
                    y,
                    width,
                    height
                );
                return Err(FilterError::WindowOutOfBounds {
                    x,
                    y,
                    radius: radius.extents().to_vec(),
                    width,
                    height,
                });
            };

            // Luma has a single channel, so the raw buffer is one sample per pixel.
            let raw = image.as_raw();
            let row_len = width as usize;
            let mut samples = Vec::with_capacity(radius.window_len());
            for row in y0..=y1 {
                let start = row * row_len;
                samples.extend_from_slice(&raw[start + x0..=start + x1]);
            }

            Ok(Self {
                radius: radius.clone(),
                samples: Cow::Owned(samples),
            })
        }
    }
}
