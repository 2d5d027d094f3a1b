//! Numeric side lengths.
//!
//! `Side` supplies the two primitives validation needs: strict positivity and
//! "a + b strictly exceeds c". Both are implemented without wrapping or panics.
//!
//! - Integers: an overflowing sum exceeds every representable third side.
//! - Floats: `NaN` is never positive; `x + inf <= inf`, so infinite sides fail
//!   the inequality.

/// A numeric type usable as a triangle side length.
pub trait Side: Copy + PartialEq + PartialOrd {
    /// `true` iff the value is strictly greater than zero.
    fn is_strictly_positive(self) -> bool;
    /// `true` iff `self + other > third`.
    fn sum_exceeds(self, other: Self, third: Self) -> bool;
}

macro_rules! impl_side_int {
    ($($t:ty),* $(,)?) => {$(
        impl Side for $t {
            #[inline]
            fn is_strictly_positive(self) -> bool {
                self > 0
            }
            #[inline]
            fn sum_exceeds(self, other: Self, third: Self) -> bool {
                match self.checked_add(other) {
                    Some(sum) => sum > third,
                    // Positive overflow only; validation rejects negatives first.
                    None => self > 0,
                }
            }
        }
    )*};
}

macro_rules! impl_side_float {
    ($($t:ty),* $(,)?) => {$(
        impl Side for $t {
            #[inline]
            fn is_strictly_positive(self) -> bool {
                self > 0.0
            }
            #[inline]
            fn sum_exceeds(self, other: Self, third: Self) -> bool {
                self + other > third
            }
        }
    )*};
}

impl_side_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_side_float!(f32, f64);
