// THEORY:
// Every statistic in this crate is computed in `f64`, whatever the storage type of the
// images. Samples are widened on the way in and the final value is narrowed on the way
// out. Both directions use Rust's native `as` conversion through `num_traits::AsPrimitive`,
// so the output type decides how a value is truncated or saturated:
// - integers truncate toward zero, clamp to their bounds and map NaN to 0
// - floats round to the nearest representable value and keep NaN/Inf

use num_traits::AsPrimitive;

pub type Working = f64;

/// A numeric sample that can be read out of a neighborhood.
pub trait Sample: AsPrimitive<Working> {
    #[inline]
    fn widen(self) -> Working {
        self.as_()
    }
}

impl<T: AsPrimitive<Working>> Sample for T {}

/// A numeric type a computed statistic can be stored as.
pub trait OutputSample: Copy + 'static {
    fn narrow(value: Working) -> Self;
}

impl<T: Copy + 'static> OutputSample for T
where
    Working: AsPrimitive<T>,
{
    #[inline]
    fn narrow(value: Working) -> Self {
        value.as_()
    }
}

/// Mean of the samples, accumulated in `f64`. `None` for an empty slice.
pub fn mean<T: Sample>(samples: &[T]) -> Option<Working> {
    if samples.is_empty() {
        return None;
    }

    let len = samples.len() as Working;

    // Blocked accumulation keeps the inner loop vectorizable.
    const BLOCK: usize = 64;
    let mut sum = 0.0;
    for block in samples.chunks(BLOCK) {
        let mut partial = 0.0;
        for &sample in block {
            partial += sample.widen();
        }
        sum += partial;
    }
    if sum.is_finite() {
        return Some(sum / len);
    }

    // The plain sum overflowed (or a sample is not finite). Scaling every sample down by
    // a power of two no smaller than the count is exact and keeps a finite sum finite.
    let scale = samples.len().next_power_of_two() as Working;
    let scaled: Working = samples.iter().map(|&sample| sample.widen() / scale).sum();
    Some(scaled / len * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_follows_native_casts() {
        assert_eq!(u8::narrow(0.5), 0);
        assert_eq!(u8::narrow(0.999), 0);
        assert_eq!(u8::narrow(300.0), 255);
        assert_eq!(u8::narrow(-3.0), 0);
        assert_eq!(u8::narrow(f64::NAN), 0);
        assert_eq!(i16::narrow(-2.7), -2);
        assert_eq!(f32::narrow(0.5), 0.5f32);
        assert!(f32::narrow(f64::NAN).is_nan());
    }

    #[test]
    fn mean_of_mixed_sample_types() {
        assert_eq!(mean(&[1u8, 2, 3, 6]), Some(3.0));
        assert_eq!(mean(&[-4i32, 4]), Some(0.0));
        assert_eq!(mean(&[0.25f32, 0.75]), Some(0.5));
        assert_eq!(mean::<u16>(&[]), None);
    }

    #[test]
    fn mean_over_many_blocks() {
        let samples = vec![255u8; 1000];
        assert_eq!(mean(&samples), Some(255.0));
    }

    #[test]
    fn mean_of_huge_finite_samples_stays_finite() {
        let top = mean(&[f64::MAX; 3]).unwrap();
        assert!(top.is_finite());
        assert!((top / f64::MAX - 1.0).abs() < 1e-12);

        let mixed = mean(&[f64::MAX, f64::MAX, -f64::MAX, -f64::MAX]).unwrap();
        assert_eq!(mixed, 0.0);

        assert_eq!(mean(&[f64::INFINITY, 1.0]), Some(f64::INFINITY));
        assert!(mean(&[f64::INFINITY, f64::NEG_INFINITY]).unwrap().is_nan());
        assert!(mean(&[f64::NAN, 1.0]).unwrap().is_nan());
    }
}
