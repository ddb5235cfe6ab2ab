//! Diamond lattice: a small DAG with many equal-cost routes.
//!
//! ```text
//!            ┌─ arm 0 (arm_len) ─┬─ tail 0.0 (tail_len) ─┐
//!   start ───┤                   └─ tail 0.1 (tail_len) ─┤── goal
//!            └─ arm 1 (arm_len) ─┬─ tail 1.0 (tail_len) ─┤
//!                                └─ tail 1.1 (tail_len) ─┘
//! ```
//!
//! Every edge costs 1, so all `arms * splits` routes tie at
//! `arm_len + tail_len`. Used to exercise multi-path enumeration.

use serde_json::{json, Value};
use wayfinder_kernel::cost::Numeric;
use wayfinder_search::contract::SearchSpace;

use crate::contract::{SearchWorld, WorldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatticeNode {
    Start,
    /// `step` in `1..=arm_len`.
    Arm { arm: u32, step: u32 },
    /// `step` in `1..tail_len`.
    Tail { arm: u32, split: u32, step: u32 },
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiamondLattice {
    arms: u32,
    arm_len: u32,
    splits: u32,
    tail_len: u32,
}

impl DiamondLattice {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if any dimension is zero.
    pub fn new(arms: u32, arm_len: u32, splits: u32, tail_len: u32) -> Result<Self, WorldError> {
        if arms == 0 || arm_len == 0 || splits == 0 || tail_len == 0 {
            return Err(WorldError::InvalidLayout {
                detail: format!(
                    "lattice dimensions must be positive: arms={arms} arm_len={arm_len} \
                     splits={splits} tail_len={tail_len}"
                ),
            });
        }
        Ok(Self {
            arms,
            arm_len,
            splits,
            tail_len,
        })
    }

    /// Number of distinct cheapest routes from start to goal.
    ///
    /// A one-edge tail collapses the splits into a single edge.
    #[must_use]
    pub fn route_count(&self) -> u64 {
        if self.tail_len == 1 {
            u64::from(self.arms)
        } else {
            u64::from(self.arms) * u64::from(self.splits)
        }
    }

    /// Cost of every cheapest route.
    #[must_use]
    pub fn route_cost(&self) -> u32 {
        self.arm_len + self.tail_len
    }

    fn after_arm(&self, arm: u32) -> Vec<LatticeNode> {
        if self.tail_len == 1 {
            return vec![LatticeNode::Goal];
        }
        (0..self.splits)
            .map(|split| LatticeNode::Tail {
                arm,
                split,
                step: 1,
            })
            .collect()
    }
}

impl Default for DiamondLattice {
    /// Two length-4 arms, each splitting into two length-2 tails.
    fn default() -> Self {
        Self {
            arms: 2,
            arm_len: 4,
            splits: 2,
            tail_len: 2,
        }
    }
}

impl SearchSpace for DiamondLattice {
    type Node = LatticeNode;
    type Key = LatticeNode;
    type Algebra = Numeric<u32>;

    fn key(&self, node: &LatticeNode) -> LatticeNode {
        *node
    }

    fn successors(&self, node: &LatticeNode) -> Vec<(LatticeNode, u32)> {
        let next = match *node {
            LatticeNode::Start => (0..self.arms)
                .map(|arm| LatticeNode::Arm { arm, step: 1 })
                .collect(),
            LatticeNode::Arm { arm, step } if step < self.arm_len => {
                vec![LatticeNode::Arm {
                    arm,
                    step: step + 1,
                }]
            }
            LatticeNode::Arm { arm, .. } => self.after_arm(arm),
            LatticeNode::Tail { arm, split, step } if step + 1 < self.tail_len => {
                vec![LatticeNode::Tail {
                    arm,
                    split,
                    step: step + 1,
                }]
            }
            LatticeNode::Tail { .. } => vec![LatticeNode::Goal],
            LatticeNode::Goal => Vec::new(),
        };
        next.into_iter().map(|n| (n, 1)).collect()
    }

    fn is_success(&self, node: &LatticeNode) -> bool {
        *node == LatticeNode::Goal
    }
}

impl SearchWorld for DiamondLattice {
    fn world_id(&self) -> &str {
        "diamond_lattice"
    }

    fn start(&self) -> LatticeNode {
        LatticeNode::Start
    }

    /// Exact remaining distance.
    fn heuristic(&self, node: &LatticeNode) -> u32 {
        match *node {
            LatticeNode::Start => self.route_cost(),
            LatticeNode::Arm { step, .. } => self.arm_len - step + self.tail_len,
            LatticeNode::Tail { step, .. } => self.tail_len - step,
            LatticeNode::Goal => 0,
        }
    }

    fn node_json(&self, node: &LatticeNode) -> Value {
        match *node {
            LatticeNode::Start => json!("start"),
            LatticeNode::Arm { arm, step } => json!(format!("arm{arm}.{step}")),
            LatticeNode::Tail { arm, split, step } => {
                json!(format!("tail{arm}.{split}.{step}"))
            }
            LatticeNode::Goal => json!("goal"),
        }
    }

    fn cost_json(&self, cost: &u32) -> Value {
        json!(cost)
    }
}
