//! Floating-point enum values with identity semantics.
//!
//! `f64` is not `Eq` or `Hash`, so it cannot key the reverse mapping
//! directly. [`Number`] compares and hashes over the normalized bit pattern
//! instead: `-0.0` folds into `+0.0`, and a NaN is equal to a NaN with the
//! same bits (in particular, [`f64::NAN`] is equal to itself). Numeric
//! equality and identity therefore agree everywhere except the NaN family.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An `f64` usable as an enum value.
#[derive(Copy, Clone, Default)]
pub struct Number(f64);

impl Number {
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    /// The underlying float.
    pub const fn get(self) -> f64 {
        self.0
    }

    // -0.0 and +0.0 are numerically equal and must not be distinct values.
    fn normalized_bits(self) -> u64 {
        if self.0 == 0.0 {
            0.0f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_bits() == other.normalized_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_bits().hash(state);
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero_folds_into_positive_zero() {
        assert_eq!(Number::new(-0.0), Number::new(0.0));
    }

    #[test]
    fn test_nan_is_equal_to_itself() {
        assert_eq!(Number::new(f64::NAN), Number::new(f64::NAN));
    }

    #[test]
    fn test_distinct_floats_stay_distinct() {
        assert_ne!(Number::new(1.5), Number::new(2.5));
    }

    #[test]
    fn test_hash_agrees_with_eq_for_zeroes() {
        use std::hash::BuildHasher;
        let state = std::hash::RandomState::new();
        assert_eq!(
            state.hash_one(Number::new(-0.0)),
            state.hash_one(Number::new(0.0))
        );
    }
}
