//! Cost algebra: the `zero` / `add` / `compare` triple the search engine
//! folds edge costs with.
//!
//! An algebra is a type-level value (usually a zero-sized marker), so the
//! frontier can order entries through `Ord` without carrying a comparator.
//!
//! # Contract
//!
//! - `zero()` is the identity for `add`.
//! - `add` is associative and monotonically non-decreasing in both
//!   arguments under `compare` (no negative edges).
//! - `compare` is a total order.
//!
//! None of this is checked at runtime. A broken algebra yields a wrong but
//! non-panicking search result.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Add;

/// A cost algebra over `Self::Cost`.
pub trait CostAlgebra {
    /// The cost value type.
    type Cost: Clone + Debug;

    /// Identity element for [`CostAlgebra::add`].
    fn zero() -> Self::Cost;

    /// Combine two costs.
    fn add(a: &Self::Cost, b: &Self::Cost) -> Self::Cost;

    /// Total order over costs. `Less` means cheaper.
    fn compare(a: &Self::Cost, b: &Self::Cost) -> Ordering;

    /// `true` if `a` is strictly cheaper than `b`.
    fn lt(a: &Self::Cost, b: &Self::Cost) -> bool {
        Self::compare(a, b) == Ordering::Less
    }

    /// `true` if `a` is strictly more expensive than `b`.
    fn gt(a: &Self::Cost, b: &Self::Cost) -> bool {
        Self::compare(a, b) == Ordering::Greater
    }
}

/// Scalar types usable with [`Numeric`].
///
/// Blanket-implemented for every `Copy + Add + PartialOrd + Default` type,
/// which covers the primitive integers and floats. `Default` supplies zero.
pub trait NumericCost: Copy + Debug + Add<Output = Self> + PartialOrd + Default {}

impl<T> NumericCost for T where T: Copy + Debug + Add<Output = T> + PartialOrd + Default {}

/// The default algebra: arithmetic zero, `+`, and numeric ordering.
///
/// Incomparable values (float `NaN`) compare as equal.
///
/// `add` is plain `+`, so integer overflow panics in debug builds and wraps
/// in release builds. Pick a cost type wide enough for the dearest path the
/// search can register (`Numeric<u8>` overflows after a few heavy edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric<T>(PhantomData<T>);

impl<T: NumericCost> CostAlgebra for Numeric<T> {
    type Cost = T;

    fn zero() -> T {
        T::default()
    }

    fn add(a: &T, b: &T) -> T {
        *a + *b
    }

    fn compare(a: &T, b: &T) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }
}

/// Lexicographic composition of two algebras over `(A::Cost, B::Cost)`.
///
/// Addition is component-wise; ordering compares the first component and
/// falls back to the second on a tie. `Lexicographic<Numeric<u32>,
/// Numeric<u32>>` models e.g. "fewest turns, then shortest distance".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicographic<A, B>(PhantomData<(A, B)>);

impl<A: CostAlgebra, B: CostAlgebra> CostAlgebra for Lexicographic<A, B> {
    type Cost = (A::Cost, B::Cost);

    fn zero() -> Self::Cost {
        (A::zero(), B::zero())
    }

    fn add(a: &Self::Cost, b: &Self::Cost) -> Self::Cost {
        (A::add(&a.0, &b.0), B::add(&a.1, &b.1))
    }

    fn compare(a: &Self::Cost, b: &Self::Cost) -> Ordering {
        A::compare(&a.0, &b.0).then_with(|| B::compare(&a.1, &b.1))
    }
}
