//! Node registry: best known cost and predecessor(s) per discovered key.
//!
//! The registry owns the canonical node value of every key. The first value
//! registered for a key is kept for the rest of the call; a later value with
//! the same key only contributes its cost and predecessor.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use wayfinder_kernel::cost::CostAlgebra;

use crate::path::{BagNode, Reached};

/// How a registry entry remembers the way it was reached.
///
/// `Option<K>` keeps one best predecessor; [`ParentSet`] keeps every
/// predecessor that achieves the best cost.
pub trait Predecessors<K>: Sized {
    /// Predecessors of the start node.
    fn root() -> Self;

    /// A fresh record with `parent` as the only predecessor.
    fn from_parent(parent: K) -> Self;

    /// Record another equal-cost predecessor. Returns `true` if it was kept.
    fn merge_equal(&mut self, parent: K) -> bool;
}

impl<K> Predecessors<K> for Option<K> {
    fn root() -> Self {
        None
    }

    fn from_parent(parent: K) -> Self {
        Some(parent)
    }

    fn merge_equal(&mut self, _parent: K) -> bool {
        false
    }
}

/// The set of equal-cost best predecessors of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentSet<K>(Vec<K>);

impl<K> ParentSet<K> {
    /// Predecessor keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> &[K] {
        &self.0
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<K> {
        self.0
    }
}

impl<K: Eq> Predecessors<K> for ParentSet<K> {
    fn root() -> Self {
        Self(Vec::new())
    }

    fn from_parent(parent: K) -> Self {
        Self(vec![parent])
    }

    fn merge_equal(&mut self, parent: K) -> bool {
        if self.0.contains(&parent) {
            return false;
        }
        self.0.push(parent);
        true
    }
}

/// One registry record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry<N, C, P> {
    /// Canonical node value (first one seen for this key).
    pub node: N,
    /// Best cumulative cost found so far.
    pub cost: C,
    /// Best predecessor(s).
    pub preds: P,
}

/// Outcome of offering a new path to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// First time the key was seen.
    Inserted,
    /// The recorded cost was strictly worse and has been replaced.
    Improved,
    /// Same cost; the predecessor joined the parent set.
    Merged,
    /// The recorded cost is at least as good; nothing changed.
    Ignored,
}

impl Relaxation {
    /// Whether the key needs a new frontier entry.
    #[must_use]
    pub fn needs_push(self) -> bool {
        matches!(self, Self::Inserted | Self::Improved)
    }
}

/// Key → [`RegistryEntry`] map for one search call.
pub struct NodeRegistry<K, N, A: CostAlgebra, P> {
    entries: HashMap<K, RegistryEntry<N, A::Cost, P>>,
    _algebra: PhantomData<A>,
}

impl<K, N, A, P> NodeRegistry<K, N, A, P>
where
    K: Clone + Eq + Hash,
    A: CostAlgebra,
    P: Predecessors<K>,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _algebra: PhantomData,
        }
    }

    /// Register the start node at cost `zero` with no predecessors.
    pub fn insert_root(&mut self, key: K, node: N) {
        self.entries.insert(
            key,
            RegistryEntry {
                node,
                cost: A::zero(),
                preds: P::root(),
            },
        );
    }

    /// Offer `cost` via `from` as a way to reach `key`.
    ///
    /// `node` is stored only when `key` is new; otherwise it is dropped in
    /// favour of the canonical value already registered.
    pub fn relax(&mut self, key: K, node: N, cost: A::Cost, from: &K) -> Relaxation {
        let Some(entry) = self.entries.get_mut(&key) else {
            self.entries.insert(
                key,
                RegistryEntry {
                    node,
                    cost,
                    preds: P::from_parent(from.clone()),
                },
            );
            return Relaxation::Inserted;
        };

        match A::compare(&cost, &entry.cost) {
            std::cmp::Ordering::Less => {
                entry.cost = cost;
                entry.preds = P::from_parent(from.clone());
                Relaxation::Improved
            }
            // A zero-cost self loop must not make a key its own parent.
            std::cmp::Ordering::Equal if key != *from => {
                if entry.preds.merge_equal(from.clone()) {
                    Relaxation::Merged
                } else {
                    Relaxation::Ignored
                }
            }
            _ => Relaxation::Ignored,
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&RegistryEntry<N, A::Cost, P>> {
        self.entries.get(key)
    }

    /// Number of registered keys.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, N, A, P> Default for NodeRegistry<K, N, A, P>
where
    K: Clone + Eq + Hash,
    A: CostAlgebra,
    P: Predecessors<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, A> NodeRegistry<K, N, A, Option<K>>
where
    K: Eq + Hash,
    A: CostAlgebra,
{
    /// Convert into the public reachability map.
    #[must_use]
    pub fn into_reach_map(self) -> HashMap<K, Reached<N, K, A::Cost>> {
        self.entries
            .into_iter()
            .map(|(k, e)| {
                (
                    k,
                    Reached {
                        node: e.node,
                        parent: e.preds,
                        cost: e.cost,
                    },
                )
            })
            .collect()
    }
}

impl<K, N, A> NodeRegistry<K, N, A, ParentSet<K>>
where
    K: Eq + Hash,
    A: CostAlgebra,
{
    /// Convert into the parent graph walked by [`crate::path::AstarSolution`].
    #[must_use]
    pub fn into_parent_graph(self) -> HashMap<K, BagNode<N, K>> {
        self.entries
            .into_iter()
            .map(|(k, e)| {
                (
                    k,
                    BagNode {
                        node: e.node,
                        parents: e.preds.into_keys(),
                    },
                )
            })
            .collect()
    }
}
