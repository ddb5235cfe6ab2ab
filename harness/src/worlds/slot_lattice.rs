//! Slot lattice: procedurally generated assignment states.
//!
//! A state is a row of byte slots, each `UNSET` or a value in
//! `1..=values`. A move sets one unset slot, at cost 1. The goal is a fixed
//! target assignment. Because slots can be set in any order, the same
//! assignment is reached along many routes.
//!
//! States are keyed by a content fingerprint of their slot bytes. The
//! `trail` (the order in which slots were set) is carried on the node but is
//! not identity: whichever trail reaches an assignment first is the one the
//! registry keeps.

use serde_json::{json, Value};
use wayfinder_kernel::cost::Numeric;
use wayfinder_search::contract::SearchSpace;
use wayfinder_search::fingerprint::{fingerprint, ContentHash};

use crate::contract::{SearchWorld, WorldError};

/// Byte value of an unset slot.
pub const UNSET: u8 = 0;

/// Largest supported slot count.
pub const MAX_SLOTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    /// Identity bytes.
    pub slots: Vec<u8>,
    /// Slot indices in the order they were set. Not identity.
    pub trail: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLattice {
    values: u8,
    target: Vec<u8>,
}

impl SlotLattice {
    /// A lattice over `target.len()` slots with values `1..=values`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if there are no slots, more
    /// than [`MAX_SLOTS`], no values, or a target byte outside `1..=values`.
    pub fn new(values: u8, target: Vec<u8>) -> Result<Self, WorldError> {
        if target.is_empty() || target.len() > MAX_SLOTS {
            return Err(WorldError::InvalidLayout {
                detail: format!("slot count {} not in 1..={MAX_SLOTS}", target.len()),
            });
        }
        if values == 0 {
            return Err(WorldError::InvalidLayout {
                detail: "at least one slot value required".into(),
            });
        }
        if let Some(bad) = target.iter().find(|&&v| v == UNSET || v > values) {
            return Err(WorldError::InvalidLayout {
                detail: format!("target value {bad} not in 1..={values}"),
            });
        }
        Ok(Self { values, target })
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.target.len()
    }

    /// Number of assignments, including partial ones.
    #[must_use]
    pub fn state_count(&self) -> u64 {
        let per_slot = u64::from(self.values) + 1;
        let exp = u32::try_from(self.slot_count()).unwrap_or(u32::MAX);
        per_slot.saturating_pow(exp)
    }
}

impl Default for SlotLattice {
    /// Four slots, three values, target `[2, 1, 3, 2]`.
    fn default() -> Self {
        Self {
            values: 3,
            target: vec![2, 1, 3, 2],
        }
    }
}

impl SearchSpace for SlotLattice {
    type Node = SlotState;
    type Key = ContentHash;
    type Algebra = Numeric<u32>;

    fn key(&self, node: &SlotState) -> ContentHash {
        fingerprint(&node.slots)
    }

    fn successors(&self, node: &SlotState) -> Vec<(SlotState, u32)> {
        let mut out = Vec::new();
        for (index, &current) in node.slots.iter().enumerate() {
            if current != UNSET {
                continue;
            }
            let Ok(index_byte) = u8::try_from(index) else {
                continue;
            };
            for value in 1..=self.values {
                let mut slots = node.slots.clone();
                slots[index] = value;
                let mut trail = node.trail.clone();
                trail.push(index_byte);
                out.push((SlotState { slots, trail }, 1));
            }
        }
        out
    }

    fn is_success(&self, node: &SlotState) -> bool {
        node.slots == self.target
    }
}

impl SearchWorld for SlotLattice {
    fn world_id(&self) -> &str {
        "slot_lattice"
    }

    fn start(&self) -> SlotState {
        SlotState {
            slots: vec![UNSET; self.slot_count()],
            trail: Vec::new(),
        }
    }

    /// Slots that do not yet hold their target value. Slots set to a wrong
    /// value can never be fixed, so the bound stays admissible.
    fn heuristic(&self, node: &SlotState) -> u32 {
        let misses = node
            .slots
            .iter()
            .zip(&self.target)
            .filter(|(have, want)| have != want)
            .count();
        u32::try_from(misses).unwrap_or(u32::MAX)
    }

    fn node_json(&self, node: &SlotState) -> Value {
        json!({ "slots": node.slots, "trail": node.trail })
    }

    fn cost_json(&self, cost: &u32) -> Value {
        json!(cost)
    }
}
