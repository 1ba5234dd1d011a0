use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::AugmentError;

/// A uniform random generator consumed by the augmentations.
///
/// The transforms never own a generator: the caller passes one in on every
/// call and controls its seeding.
pub trait RandomSource {
    /// Draw an integer uniformly from the closed range `[low, high]`.
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Draw a float uniformly from `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Draw a byte uniformly from `[0, 255]`.
    fn byte(&mut self) -> u8;

    /// Draw three independent bytes, one per color channel.
    fn fill_color(&mut self) -> [u8; 3] {
        [self.byte(), self.byte(), self.byte()]
    }
}

/// A [`RandomSource`] backed by any [`rand::Rng`].
///
/// # Examples
///
/// ```
/// use cifar_aug_imgproc::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
///
/// assert_eq!(a.int_inclusive(0, 100), b.int_inclusive(0, 100));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A reproducible source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }

    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn byte(&mut self) -> u8 {
        self.rng.random::<u8>()
    }
}

/// Draw an integer in `[low, high]` and verify the source honoured the range.
pub(crate) fn draw_int(
    rng: &mut impl RandomSource,
    name: &'static str,
    low: i64,
    high: i64,
) -> Result<i64, AugmentError> {
    let value = rng.int_inclusive(low, high);
    if value < low || value > high {
        return Err(AugmentError::InvalidRandomDraw {
            name,
            value: value as f64,
            low: low as f64,
            high: high as f64,
        });
    }
    Ok(value)
}

/// Same as [`draw_int`] for non-negative ranges used as pixel indices.
pub(crate) fn draw_index(
    rng: &mut impl RandomSource,
    name: &'static str,
    low: usize,
    high: usize,
) -> Result<usize, AugmentError> {
    Ok(draw_int(rng, name, low as i64, high as i64)? as usize)
}

/// Draw a float in `[0, 1)` and verify the source honoured the range.
pub(crate) fn draw_unit(
    rng: &mut impl RandomSource,
    name: &'static str,
) -> Result<f64, AugmentError> {
    let value = rng.unit();
    if !(0.0..1.0).contains(&value) {
        return Err(AugmentError::InvalidRandomDraw {
            name,
            value,
            low: 0.0,
            high: 1.0,
        });
    }
    Ok(value)
}

/// A source replaying fixed draws, used to force transform parameters in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    ints: std::collections::VecDeque<i64>,
    units: std::collections::VecDeque<f64>,
    bytes: std::collections::VecDeque<u8>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn ints(mut self, values: &[i64]) -> Self {
        self.ints.extend(values);
        self
    }

    pub(crate) fn units(mut self, values: &[f64]) -> Self {
        self.units.extend(values);
        self
    }

    pub(crate) fn bytes(mut self, values: &[u8]) -> Self {
        self.bytes.extend(values);
        self
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.units.is_empty() && self.bytes.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn int_inclusive(&mut self, _low: i64, _high: i64) -> i64 {
        self.ints.pop_front().expect("scripted integer draws exhausted")
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted unit draws exhausted")
    }

    fn byte(&mut self) -> u8 {
        self.bytes.pop_front().expect("scripted byte draws exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_int, draw_unit, RandomSource, RngSource, ScriptedSource};
    use crate::error::AugmentError;

    #[test]
    fn rng_source_respects_ranges() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..1000 {
            let v = rng.int_inclusive(-180, 180);
            assert!((-180..=180).contains(&v));
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn rng_source_is_reproducible() {
        let mut a = RngSource::seeded(3);
        let mut b = RngSource::seeded(3);
        let draws_a = (0..16).map(|_| a.fill_color()).collect::<Vec<_>>();
        let draws_b = (0..16).map(|_| b.fill_color()).collect::<Vec<_>>();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn draw_int_rejects_out_of_range() {
        let mut rng = ScriptedSource::new().ints(&[17]);
        let res = draw_int(&mut rng, "width", 0, 16);
        assert_eq!(
            res,
            Err(AugmentError::InvalidRandomDraw {
                name: "width",
                value: 17.0,
                low: 0.0,
                high: 16.0,
            })
        );
    }

    #[test]
    fn draw_unit_rejects_one() {
        let mut rng = ScriptedSource::new().units(&[0.25, 1.0]);
        assert_eq!(draw_unit(&mut rng, "p"), Ok(0.25));
        assert!(matches!(
            draw_unit(&mut rng, "p"),
            Err(AugmentError::InvalidRandomDraw { name: "p", .. })
        ));
    }
}
