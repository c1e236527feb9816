use std::{cmp::Ordering, fmt::Debug, ops::Add};

/// Numeric type used for edge weights and accumulated path costs.
///
/// Costs are summed with plain `+`, so overflow is up to the caller: pick a
/// type wide enough for the longest path you expect.
pub trait Weight: Copy + Debug + PartialEq + PartialOrd + Add<Output = Self> {
    const ZERO: Self;

    /// Total order used by the search frontier.
    fn cmp_weight(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn cmp_weight(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);
