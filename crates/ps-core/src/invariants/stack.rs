//! Stack invariants.
//!
//! | Property | Description |
//! |----------|-------------|
//! | SizeMatchesChain | Reported size equals the number of reachable nodes |
//! | EmptyIffZero | Empty iff size is zero iff there is no top node |
//! | LifoOrder | Every pop returns the most recent unpopped push |
//! | ContentsMatchHistory | Current contents equal the replayed history |
//!
//! Histories are assumed to start from an empty stack.

use crate::counterexample::{Counterexample, StateSnapshot};
use crate::point::Point;
use crate::property::{PropertyChecker, PropertyResult};

/// Properties that a point stack implementation must expose.
///
/// Implementations provide access to their internal state for
/// property checking. The checker verifies invariants against
/// this state.
pub trait StackProperties {
    /// Element count as reported by the stack.
    fn size(&self) -> u64;

    /// Number of nodes reachable by walking from the top.
    fn chain_len(&self) -> u64;

    /// Whether the stack reports itself empty.
    fn is_empty(&self) -> bool;

    /// Whether a top node is present.
    fn has_top(&self) -> bool;

    /// Current contents of the stack (top to bottom).
    fn current_contents(&self) -> Vec<Point>;

    /// Operation history since creation.
    fn history(&self) -> &StackHistory;
}

/// History of stack operations in execution order.
#[derive(Debug, Clone, Default)]
pub struct StackHistory {
    /// Sequence of operations
    pub operations: Vec<StackOperation>,
}

/// A single stack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOperation {
    /// Type of operation
    pub op_type: StackOpType,
    /// Point involved (argument for push, result for pop)
    pub element: Option<Point>,
    /// Step number for ordering
    pub step: u64,
}

/// Type of stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOpType {
    Push,
    Pop,
    PopEmpty,
}

impl StackHistory {
    /// Create a new empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Step number the next recorded operation should use.
    #[must_use]
    pub fn step_next(&self) -> u64 {
        self.operations.len() as u64 + 1
    }

    /// Step of the most recent operation, if any was recorded.
    #[must_use]
    pub fn last_step(&self) -> Option<u64> {
        self.operations.last().map(|op| op.step)
    }

    /// Record a push operation.
    pub fn record_push(&mut self, element: Point, step: u64) {
        debug_assert!(step > 0, "Step must be positive");
        self.operations.push(StackOperation {
            op_type: StackOpType::Push,
            element: Some(element),
            step,
        });
    }

    /// Record a pop operation; `None` records a pop on an empty stack.
    pub fn record_pop(&mut self, element: Option<Point>, step: u64) {
        debug_assert!(step > 0, "Step must be positive");
        self.operations.push(StackOperation {
            op_type: if element.is_some() {
                StackOpType::Pop
            } else {
                StackOpType::PopEmpty
            },
            element,
            step,
        });
    }

    /// Replay the history on a model stack, returning contents bottom to top.
    ///
    /// Stops at the first operation the model disagrees with and reports it.
    pub fn replay(&self) -> Result<Vec<Point>, ReplayMismatch> {
        let mut model: Vec<Point> = Vec::new();

        for op in &self.operations {
            match op.op_type {
                StackOpType::Push => {
                    if let Some(p) = op.element {
                        model.push(p);
                    }
                }
                StackOpType::Pop => {
                    let expected = model.pop();
                    if expected != op.element {
                        return Err(ReplayMismatch {
                            step: op.step,
                            expected,
                            actual: op.element,
                            model_size: model.len() as u64,
                        });
                    }
                }
                StackOpType::PopEmpty => {
                    if let Some(&expected) = model.last() {
                        return Err(ReplayMismatch {
                            step: op.step,
                            expected: Some(expected),
                            actual: None,
                            model_size: model.len() as u64,
                        });
                    }
                }
            }
        }

        Ok(model)
    }
}

/// First point where a recorded history diverges from a sequential stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayMismatch {
    pub step: u64,
    pub expected: Option<Point>,
    pub actual: Option<Point>,
    /// Model size after the mismatching operation was applied
    pub model_size: u64,
}

fn describe(element: Option<Point>) -> String {
    match element {
        Some(p) => p.to_string(),
        None => "empty".to_string(),
    }
}

/// Property checker for stack implementations.
pub struct StackPropertyChecker<'a, T: StackProperties> {
    stack: &'a T,
    dst_seed: Option<u64>,
}

impl<'a, T: StackProperties> StackPropertyChecker<'a, T> {
    /// Create a new checker for the given stack.
    #[must_use]
    pub fn new(stack: &'a T) -> Self {
        Self {
            stack,
            dst_seed: None,
        }
    }

    /// Set DST seed for counterexample reproduction.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        debug_assert!(seed != 0, "DST seed should not be zero");
        self.dst_seed = Some(seed);
        self
    }

    /// Pin a state-level violation to the latest recorded step.
    fn at_current_step(&self, result: PropertyResult) -> PropertyResult {
        match self.stack.history().last_step() {
            Some(step) => result.at_step(step),
            None => result,
        }
    }

    fn counterexample(&self) -> Counterexample {
        match self.dst_seed {
            Some(seed) => Counterexample::with_seed(seed),
            None => Counterexample::new(),
        }
    }

    /// SizeMatchesChain
    ///
    /// The element count equals the number of nodes reachable from top.
    fn check_size_matches_chain(&self) -> PropertyResult {
        let size = self.stack.size();
        let chain_len = self.stack.chain_len();

        if size != chain_len {
            return self.at_current_step(PropertyResult::fail(
                "SizeMatchesChain",
                format!("size is {} but {} nodes are reachable", size, chain_len),
                None,
            ));
        }

        PropertyResult::pass("SizeMatchesChain")
    }

    /// EmptyIffZero
    ///
    /// `is_empty()` holds exactly when size is zero, which is exactly
    /// when no top node exists.
    fn check_empty_iff_zero(&self) -> PropertyResult {
        let size = self.stack.size();
        let is_empty = self.stack.is_empty();
        let has_top = self.stack.has_top();

        if is_empty != (size == 0) || has_top == (size == 0) {
            return self.at_current_step(PropertyResult::fail(
                "EmptyIffZero",
                format!(
                    "size={} is_empty={} has_top={}",
                    size, is_empty, has_top
                ),
                None,
            ));
        }

        PropertyResult::pass("EmptyIffZero")
    }

    /// LifoOrder
    ///
    /// Replaying the history on a model stack reproduces every pop result,
    /// including pops that found the stack empty.
    fn check_lifo_order(&self) -> PropertyResult {
        match self.stack.history().replay() {
            Ok(_) => PropertyResult::pass("LifoOrder"),
            Err(mismatch) => {
                let mut ce = self.counterexample();
                ce.add_state(StateSnapshot {
                    step: mismatch.step,
                    description: format!("pop returned {}", describe(mismatch.actual)),
                    variables: vec![
                        ("expected".to_string(), describe(mismatch.expected)),
                        ("model_size".to_string(), mismatch.model_size.to_string()),
                    ],
                });

                PropertyResult::fail(
                    "LifoOrder",
                    format!(
                        "pop returned {} but LIFO expected {}",
                        describe(mismatch.actual),
                        describe(mismatch.expected)
                    ),
                    Some(ce),
                )
            }
        }
    }

    /// ContentsMatchHistory
    ///
    /// Nothing pushed is lost and nothing appears that was not pushed.
    fn check_contents_match_history(&self) -> PropertyResult {
        let Ok(mut expected) = self.stack.history().replay() else {
            // Reported by LifoOrder.
            return PropertyResult::pass("ContentsMatchHistory");
        };
        expected.reverse();
        let contents = self.stack.current_contents();

        if contents != expected {
            let ce = self.stack.history().last_step().map(|step| {
                let mut ce = self.counterexample();
                ce.add_state(StateSnapshot {
                    step,
                    description: "contents diverged from history".to_string(),
                    variables: vec![
                        ("contents".to_string(), format!("{:?}", contents)),
                        ("expected".to_string(), format!("{:?}", expected)),
                    ],
                });
                ce
            });

            return PropertyResult::fail(
                "ContentsMatchHistory",
                format!(
                    "stack holds {} points but history implies {}",
                    contents.len(),
                    expected.len()
                ),
                ce,
            );
        }

        PropertyResult::pass("ContentsMatchHistory")
    }
}

impl<T: StackProperties> PropertyChecker for StackPropertyChecker<'_, T> {
    fn check_all(&self) -> Vec<PropertyResult> {
        vec![
            self.check_size_matches_chain(),
            self.check_empty_iff_zero(),
            self.check_lifo_order(),
            self.check_contents_match_history(),
        ]
    }
}
