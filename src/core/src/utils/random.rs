use rand::Rng;
use rand::seq::SliceRandom;

pub struct IntegerUtils;

impl IntegerUtils {
    /// Uniform integer in `min..=max`. A reversed range collapses to `min`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }

        rng.gen_range(min..=max)
    }
}

pub struct FloatUtils;

impl FloatUtils {
    /// Uniform float in `[0, 1)`.
    pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.gen_range(0.0..1.0)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }

        rng.gen_range(min..max)
    }

    pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
        rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

pub struct SliceUtils;

impl SliceUtils {
    pub fn sample<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
        items.choose(rng)
    }
}

/// Rounds to the nearest integer and clamps negatives to zero.
pub fn round_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

pub fn round_i64(value: f64) -> i64 {
    value.round() as i64
}
