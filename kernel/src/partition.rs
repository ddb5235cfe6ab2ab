//! Disjoint-set partitioning of vertex groups.
//!
//! The union-find is indexed by group position, not by vertex: each
//! non-empty group starts as its own set, and a vertex that shows up in a
//! second group merges the two groups' sets. Lookups use path halving
//! (each visited slot is pointed at its grandparent), which stays
//! iterative and amortizes to near-constant time.
//!
//! Set ids are root group indices. They are not compact and carry no
//! meaning across calls. [`EMPTY_SET_ID`] is reserved for empty groups.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

/// Set id reported for an empty input group. Never a real set id.
pub const EMPTY_SET_ID: isize = -1;

/// Result of [`separate_components`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<V: Eq + Hash> {
    /// Final set id of every vertex seen in any group.
    pub vertex_to_set: HashMap<V, isize>,
    /// Final set id of every input group, in input order
    /// ([`EMPTY_SET_ID`] for empty groups).
    pub group_to_set: Vec<isize>,
}

impl<V: Eq + Hash> Partition<V> {
    /// Number of distinct real set ids.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.group_to_set
            .iter()
            .filter(|&&id| id != EMPTY_SET_ID)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Array-backed union-find over group positions.
struct GroupForest {
    parents: Vec<usize>,
}

impl GroupForest {
    fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
        }
    }

    /// Root lookup with path halving.
    fn find(&mut self, mut i: usize) -> usize {
        while self.parents[i] != i {
            let grandparent = self.parents[self.parents[i]];
            self.parents[i] = grandparent;
            i = grandparent;
        }
        i
    }

    /// Merge the sets of `a` and `b`. The lower root index survives.
    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            let (keep, absorb) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parents[absorb] = keep;
        }
    }
}

#[allow(clippy::cast_possible_wrap)]
fn set_id(root: usize) -> isize {
    // Group positions index a slice, so they never exceed isize::MAX.
    root as isize
}

/// Partition the vertices of `groups` into transitively connected sets.
///
/// Each group is a set of mutually connected vertices and may be empty.
/// Two vertices end up with the same set id iff a chain of groups links
/// them. Per-vertex and per-group ids always agree: a vertex reports the id
/// of the group it first appeared in.
pub fn separate_components<V, G>(groups: &[G]) -> Partition<V>
where
    V: Clone + Eq + Hash,
    G: AsRef<[V]>,
{
    let mut forest = GroupForest::new(groups.len());
    let mut owner: HashMap<V, usize> = HashMap::new();
    let mut group_to_set = vec![EMPTY_SET_ID; groups.len()];

    for (index, group) in groups.iter().enumerate() {
        let members = group.as_ref();
        if members.is_empty() {
            continue;
        }
        for vertex in members {
            if let Some(&earlier) = owner.get(vertex) {
                forest.union(index, earlier);
            } else {
                owner.insert(vertex.clone(), index);
            }
        }
    }

    // Halving during the main pass can leave slots pointing at intermediate
    // roots; resolve everything again now that unions are done.
    let vertex_to_set = owner
        .into_iter()
        .map(|(vertex, index)| (vertex, set_id(forest.find(index))))
        .collect();
    for (index, group) in groups.iter().enumerate() {
        if !group.as_ref().is_empty() {
            group_to_set[index] = set_id(forest.find(index));
        }
    }

    Partition {
        vertex_to_set,
        group_to_set,
    }
}

/// Distinct non-empty vertex sets formed by `groups`, ordered by set id.
pub fn components<V, G>(groups: &[G]) -> Vec<HashSet<V>>
where
    V: Clone + Eq + Hash,
    G: AsRef<[V]>,
{
    let partition = separate_components(groups);
    let mut by_set: BTreeMap<isize, HashSet<V>> = BTreeMap::new();
    for (vertex, id) in partition.vertex_to_set {
        by_set.entry(id).or_default().insert(vertex);
    }
    by_set.into_values().collect()
}

/// Invert a component list into a vertex → component index lookup.
pub fn component_index<V>(components: &[HashSet<V>]) -> HashMap<V, usize>
where
    V: Clone + Eq + Hash,
{
    components
        .iter()
        .enumerate()
        .flat_map(|(i, set)| set.iter().map(move |v| (v.clone(), i)))
        .collect()
}

/// Connected components of the graph spanned by `vertices` and an
/// on-demand `neighbours` function.
///
/// Every vertex contributes the group `{v} ∪ neighbours(v)`; neighbours that
/// are not themselves listed in `vertices` still join the component but
/// are not expanded.
pub fn connected_components<V, F, I>(vertices: &[V], mut neighbours: F) -> Vec<HashSet<V>>
where
    V: Clone + Eq + Hash,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = V>,
{
    let groups: Vec<Vec<V>> = vertices
        .iter()
        .map(|v| {
            let mut group = vec![v.clone()];
            group.extend(neighbours(v));
            group
        })
        .collect();
    components(&groups)
}
