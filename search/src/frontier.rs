//! Best-first frontier with lazy invalidation.
//!
//! The frontier never updates an entry in place. A key whose cost improves
//! is simply pushed again; the engine discards the older, now stale entry
//! when it surfaces (see [`crate::search`]). Any number of entries may
//! reference the same key at once.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use wayfinder_kernel::cost::CostAlgebra;

/// The frontier ordering key: `(estimated_total, cumulative, creation_order)`.
///
/// Lower estimated total first, then lower cumulative cost, then older
/// creation order. The last component only makes tie order reproducible;
/// callers must not rely on it.
pub struct FrontierKey<A: CostAlgebra> {
    pub estimated: A::Cost,
    pub cumulative: A::Cost,
    pub creation_order: u64,
    _algebra: PhantomData<A>,
}

impl<A: CostAlgebra> FrontierKey<A> {
    #[must_use]
    pub fn new(estimated: A::Cost, cumulative: A::Cost, creation_order: u64) -> Self {
        Self {
            estimated,
            cumulative,
            creation_order,
            _algebra: PhantomData,
        }
    }
}

impl<A: CostAlgebra> PartialEq for FrontierKey<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A: CostAlgebra> Eq for FrontierKey<A> {}

impl<A: CostAlgebra> PartialOrd for FrontierKey<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: CostAlgebra> Ord for FrontierKey<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        A::compare(&self.estimated, &other.estimated)
            .then_with(|| A::compare(&self.cumulative, &other.cumulative))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

/// A frontier entry wrapping a registry key with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest estimate first).
struct FrontierEntry<A: CostAlgebra, K> {
    order: Reverse<FrontierKey<A>>,
    key: K,
}

impl<A: CostAlgebra, K> PartialEq for FrontierEntry<A, K> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<A: CostAlgebra, K> Eq for FrontierEntry<A, K> {}

impl<A: CostAlgebra, K> PartialOrd for FrontierEntry<A, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: CostAlgebra, K> Ord for FrontierEntry<A, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order.cmp(&other.order)
    }
}

/// An entry removed from the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoppedEntry<C, K> {
    /// `cumulative + h(node)` at push time.
    pub estimated: C,
    /// Cost from the start at push time.
    pub cumulative: C,
    /// Registry key of the node.
    pub key: K,
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the best entry
/// - A monotonic creation counter for reproducible tie order
/// - A high-water mark of the heap size
pub struct BestFirstFrontier<A: CostAlgebra, K> {
    heap: BinaryHeap<FrontierEntry<A, K>>,
    next_creation_order: u64,
    high_water: u64,
}

impl<A: CostAlgebra, K> BestFirstFrontier<A, K> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push an entry. Duplicates of the same key are allowed.
    pub fn push(&mut self, estimated: A::Cost, cumulative: A::Cost, key: K) {
        let order = FrontierKey::new(estimated, cumulative, self.next_creation_order);
        self.next_creation_order += 1;
        self.heap.push(FrontierEntry {
            order: Reverse(order),
            key,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest estimate) entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<PoppedEntry<A::Cost, K>> {
        self.heap.pop().map(|e| {
            let FrontierKey {
                estimated,
                cumulative,
                ..
            } = e.order.0;
            PoppedEntry {
                estimated,
                cumulative,
                key: e.key,
            }
        })
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<A: CostAlgebra, K> Default for BestFirstFrontier<A, K> {
    fn default() -> Self {
        Self::new()
    }
}
