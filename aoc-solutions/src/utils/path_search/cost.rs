//! Numeric bound for edge costs and heuristic estimates.

use std::fmt::Debug;
use std::ops::Add;

/// A totally ordered, additive cost.
///
/// Implemented for every primitive integer type. Floating point costs are
/// not supported because they have no total order.
///
/// Signed types are accepted for convenience, but the search engine still
/// assumes that every edge cost and every heuristic value is `>= ZERO`.
pub trait Cost: Copy + Ord + Add<Output = Self> + Debug {
    /// Cost of the empty path.
    const ZERO: Self;
    /// Cost of a single unweighted step.
    const ONE: Self;
}

macro_rules! impl_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
