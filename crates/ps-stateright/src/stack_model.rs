//! Stateright model of the linked point stack.
//!
//! Nodes live in an explicit map so the model can see allocation and
//! release. A pop frees its node; leaked nodes show up as a mismatch
//! between the node map and the stack size.

use std::collections::BTreeMap;

use ps_core::Point;
use stateright::Model;

/// Unique identifier for a node.
pub type NodeId = u64;

/// A node in the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    pub point: Point,
    pub next: Option<NodeId>,
}

/// Result of the most recent pop, next to what a sequential stack returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopOutcome {
    pub actual: Option<Point>,
    pub expected: Option<Point>,
}

/// State of the stack model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackState {
    /// Pointer to top node
    pub head: Option<NodeId>,
    /// Live (allocated, not yet released) nodes
    pub nodes: BTreeMap<NodeId, Node>,
    /// Counter for allocating new node IDs
    pub node_id_next: NodeId,
    /// Cached element count
    pub size: u64,
    /// Reference sequence of pushed points, bottom to top
    pub reference: Vec<Point>,
    /// Outcome of the last pop, if the last action was a pop
    pub last_pop: Option<PopOutcome>,
    /// Number of actions applied
    pub operations_count: u64,
}

impl StackState {
    /// Create the initial, empty state.
    pub fn new() -> Self {
        Self {
            head: None,
            nodes: BTreeMap::new(),
            node_id_next: 0,
            size: 0,
            reference: Vec::new(),
            last_pop: None,
            operations_count: 0,
        }
    }

    /// Get current stack contents by traversing from head.
    pub fn contents(&self) -> Vec<Point> {
        let mut result = Vec::new();
        let mut current = self.head;

        while let Some(node_id) = current {
            if let Some(node) = self.nodes.get(&node_id) {
                result.push(node.point);
                current = node.next;
            } else {
                break;
            }
        }

        result
    }

    // ========== Invariants ==========

    /// Cached size equals the number of nodes reachable from head.
    pub fn size_matches_chain(&self) -> bool {
        self.contents().len() as u64 == self.size
    }

    /// Size is zero exactly when there is no head.
    pub fn empty_iff_no_head(&self) -> bool {
        (self.size == 0) == self.head.is_none()
    }

    /// Every live node is on the stack; popped nodes were released.
    pub fn no_leaked_nodes(&self) -> bool {
        self.nodes.len() as u64 == self.size
    }

    /// The last pop returned what a sequential stack would have.
    pub fn lifo_order(&self) -> bool {
        self.last_pop.map_or(true, |o| o.actual == o.expected)
    }

    /// Combined invariant check.
    pub fn invariants_hold(&self) -> bool {
        self.size_matches_chain()
            && self.empty_iff_no_head()
            && self.no_leaked_nodes()
            && self.lifo_order()
    }
}

impl Default for StackState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions on the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackAction {
    Push(Point),
    Pop,
}

/// Model for bounded model checking.
pub struct StackModel {
    /// Points that may be pushed
    pub values: Vec<Point>,
    /// Exploration stops after this many actions
    pub operations_max: u64,
}

impl StackModel {
    /// Create a new model with given parameters.
    pub fn new(values: Vec<Point>, operations_max: u64) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(operations_max > 0);

        Self {
            values,
            operations_max,
        }
    }
}

impl Model for StackModel {
    type State = StackState;
    type Action = StackAction;

    fn init_states(&self) -> Vec<Self::State> {
        vec![StackState::new()]
    }

    fn actions(&self, _state: &Self::State, actions: &mut Vec<Self::Action>) {
        for &value in &self.values {
            actions.push(StackAction::Push(value));
        }
        // Pop is always enabled, including on an empty stack.
        actions.push(StackAction::Pop);
    }

    fn next_state(&self, state: &Self::State, action: Self::Action) -> Option<Self::State> {
        let mut next = state.clone();
        next.operations_count += 1;

        match action {
            StackAction::Push(point) => {
                let node_id = next.node_id_next;
                next.node_id_next += 1;

                next.nodes.insert(
                    node_id,
                    Node {
                        point,
                        next: next.head,
                    },
                );
                next.head = Some(node_id);
                next.size += 1;
                next.reference.push(point);
                next.last_pop = None;
            }

            StackAction::Pop => {
                let expected = next.reference.pop();
                let actual = match next.head {
                    None => None,
                    Some(head_id) => {
                        // Detach and release the top node.
                        let node = next.nodes.remove(&head_id)?;
                        next.head = node.next;
                        next.size -= 1;
                        Some(node.point)
                    }
                };
                next.last_pop = Some(PopOutcome { actual, expected });
            }
        }

        Some(next)
    }

    fn properties(&self) -> Vec<stateright::Property<Self>> {
        vec![
            stateright::Property::always("SizeMatchesChain", |_model: &Self, state: &Self::State| {
                state.size_matches_chain()
            }),
            stateright::Property::always("EmptyIffNoHead", |_model: &Self, state: &Self::State| {
                state.empty_iff_no_head()
            }),
            stateright::Property::always("NoLeakedNodes", |_model: &Self, state: &Self::State| {
                state.no_leaked_nodes()
            }),
            stateright::Property::always("LifoOrder", |_model: &Self, state: &Self::State| {
                state.lifo_order()
            }),
            stateright::Property::sometimes(
                "PopEmptyReachable",
                |_model: &Self, state: &Self::State| {
                    matches!(state.last_pop, Some(PopOutcome { actual: None, .. }))
                },
            ),
        ]
    }

    fn within_boundary(&self, state: &Self::State) -> bool {
        state.operations_count <= self.operations_max
    }
}
