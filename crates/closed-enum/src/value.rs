//! The closed set of admissible enum value kinds.
//!
//! A [`ClosedEnum`] is homogeneous in its value type, so "all values are of
//! one primitive kind" is a structural fact rather than a runtime check. The
//! [`Value`] trait is sealed: the admissible kinds are strings, the built-in
//! integers, [`Number`] for floats, and [`Symbol`] for opaque tokens.
//!
//! [`ClosedEnum`]: crate::ClosedEnum
//! [`Number`]: crate::Number
//! [`Symbol`]: crate::Symbol

use std::hash::Hash;

use crate::number::Number;
use crate::symbol::Symbol;

mod private {
    pub trait Sealed {}
}

/// A primitive kind admissible as an enum value.
///
/// `Eq + Hash` is what makes the reverse mapping (value → key) well defined;
/// `Clone` lets the instance own its value bag without consuming the
/// caller's. The trait is sealed and carries no methods of its own.
pub trait Value: private::Sealed + Clone + Eq + Hash {}

macro_rules! impl_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Value for $ty {}
        )+
    };
}

impl_value!(String, &'static str);
impl_value!(i8, i16, i32, i64, i128, isize);
impl_value!(u8, u16, u32, u64, u128, usize);
impl_value!(Number, Symbol);
