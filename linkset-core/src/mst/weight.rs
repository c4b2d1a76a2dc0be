//! Edge weight abstraction for Kruskal's algorithm.

use std::cmp::Ordering;
use std::fmt;

/// A totally ordered edge weight with overflow-checked addition.
///
/// Integer weights use their natural order. Floating-point weights order by
/// [`f32::total_cmp`]/[`f64::total_cmp`] and only finite values are
/// admissible, so `NaN` and infinities are rejected before any work starts.
/// Sums that leave the representable range are reported as `None` rather
/// than wrapping or saturating.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
///
/// use linkset_core::Weight;
///
/// assert_eq!(3_u32.total_order(&7), Ordering::Less);
/// assert_eq!((-0.0_f32).total_order(&0.0), Ordering::Less);
/// assert!(1.5_f64.is_admissible());
/// assert!(!f32::NAN.is_admissible());
/// assert_eq!(200_u8.checked_add(55), Some(255));
/// assert_eq!(200_u8.checked_add(56), None);
/// assert_eq!(f64::MAX.checked_add(f64::MAX), None);
/// ```
pub trait Weight: Copy + fmt::Debug + PartialEq + Send + Sync {
    /// The additive identity, used as the weight of an empty forest.
    const ZERO: Self;

    /// Compares two weights under a total order.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Adds two weights, returning `None` when the sum is not representable.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `true` when the weight may take part in a spanning forest.
    fn is_admissible(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }
            }
        )+
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.is_finite().then_some(sum)
                }

                fn is_admissible(&self) -> bool {
                    self.is_finite()
                }
            }
        )+
    };
}

impl_float_weight!(f32, f64);
