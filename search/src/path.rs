//! Path reconstruction from predecessor records.
//!
//! Single-parent maps rebuild one path by walking `parent` pointers back to
//! the start. Multi-parent graphs are enumerated lazily by
//! [`AstarSolution`], a depth-first cursor with an explicit stack: only one
//! working path is alive at a time no matter how many optimal paths exist.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::PathError;

/// One entry of a reachability map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reached<N, K, C> {
    /// Canonical node value.
    pub node: N,
    /// Best predecessor (`None` for the start).
    pub parent: Option<K>,
    /// Best cumulative cost from the start.
    pub cost: C,
}

/// Rebuild the path from the start to `target`, inclusive at both ends.
///
/// # Errors
///
/// - [`PathError::UnknownTarget`] if `target` is not in `map`.
/// - [`PathError::MissingPredecessor`] if a parent pointer dangles.
/// - [`PathError::CyclicPredecessors`] if the walk outgrows the map.
///
/// None of these occur for maps returned by the search engine.
pub fn build_path<N, K, C>(
    target: &K,
    map: &HashMap<K, Reached<N, K, C>>,
) -> Result<Vec<N>, PathError>
where
    N: Clone,
    K: Eq + Hash,
{
    let mut entry = map.get(target).ok_or(PathError::UnknownTarget)?;
    let mut path = vec![entry.node.clone()];
    while let Some(parent) = &entry.parent {
        entry = map.get(parent).ok_or(PathError::MissingPredecessor)?;
        path.push(entry.node.clone());
        if path.len() > map.len() {
            return Err(PathError::CyclicPredecessors);
        }
    }
    path.reverse();
    Ok(path)
}

/// A node of the multi-parent graph produced by the bag search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BagNode<N, K> {
    pub node: N,
    /// Every predecessor reaching this node at its best cost.
    pub parents: Vec<K>,
}

/// Lazy, finite, restartable sequence of all optimal paths.
///
/// Each call to `next` resumes a depth-first walk over parent sets from
/// the current sink towards the start and yields one complete path
/// (start first). Cloning shares the underlying graph; [`AstarSolution::rewind`]
/// restarts the enumeration in place. Enumeration order is unspecified.
#[derive(Debug, Clone)]
pub struct AstarSolution<N, K> {
    graph: Rc<HashMap<K, BagNode<N, K>>>,
    sinks: Rc<[K]>,
    start: K,
    next_sink: usize,
    /// `(key, index of the next parent to try)` from sink towards start.
    stack: Vec<(K, usize)>,
}

impl<N, K> AstarSolution<N, K>
where
    N: Clone,
    K: Clone + Eq + Hash,
{
    /// Build a cursor over `graph` from each of `sinks` back to `start`.
    #[must_use]
    pub fn new(graph: HashMap<K, BagNode<N, K>>, sinks: Vec<K>, start: K) -> Self {
        Self {
            graph: Rc::new(graph),
            sinks: sinks.into(),
            start,
            next_sink: 0,
            stack: Vec::new(),
        }
    }

    /// Goal keys at the optimal cost.
    #[must_use]
    pub fn sinks(&self) -> &[K] {
        &self.sinks
    }

    /// Restart the enumeration from the first sink.
    pub fn rewind(&mut self) {
        self.next_sink = 0;
        self.stack.clear();
    }

    fn current_path(&self) -> Vec<N> {
        self.stack
            .iter()
            .rev()
            .filter_map(|(key, _)| self.graph.get(key).map(|b| b.node.clone()))
            .collect()
    }

    fn on_stack(&self, key: &K) -> bool {
        self.stack.iter().any(|(k, _)| k == key)
    }
}

impl<N, K> Iterator for AstarSolution<N, K>
where
    N: Clone,
    K: Clone + Eq + Hash,
{
    type Item = Vec<N>;

    fn next(&mut self) -> Option<Vec<N>> {
        loop {
            let Some((key, tried)) = self.stack.last().cloned() else {
                let sink = self.sinks.get(self.next_sink)?.clone();
                self.next_sink += 1;
                self.stack.push((sink, 0));
                continue;
            };

            if key == self.start {
                let path = self.current_path();
                self.stack.pop();
                return Some(path);
            }

            let parent = self
                .graph
                .get(&key)
                .and_then(|b| b.parents.get(tried))
                .cloned();
            match parent {
                Some(parent) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 += 1;
                    }
                    // Zero-cost cycles can make equal-cost keys each other's
                    // parents; a simple path never revisits a key.
                    if !self.on_stack(&parent) {
                        self.stack.push((parent, 0));
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
