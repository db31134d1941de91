//! Numeric value generators.

use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, range: &RangeInclusive<i32>) -> i32 {
    rng.gen_range(range.clone())
}
