//! Stack wrapper that records its operation history.
//!
//! `RecordedStack` forwards to a [`Stack`] and logs each push and pop in a
//! [`StackHistory`], exposing the state the invariant checker needs.

use ps_core::{Point, StackError, StackHistory, StackProperties};

use crate::stack::Stack;

/// A [`Stack`] that remembers every operation applied to it.
#[derive(Debug, Default)]
pub struct RecordedStack {
    stack: Stack,
    history: StackHistory,
}

impl RecordedStack {
    /// Create an empty recorded stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            history: StackHistory::new(),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.stack.push(point);
        let step = self.history.step_next();
        self.history.record_push(point, step);
    }

    pub fn pop(&mut self) -> Option<Point> {
        let result = self.stack.pop();
        let step = self.history.step_next();
        self.history.record_pop(result, step);
        result
    }

    /// Like [`RecordedStack::pop`], but an empty stack is an error.
    ///
    /// Failed pops are recorded too.
    pub fn try_pop(&mut self) -> Result<Point, StackError> {
        self.pop().ok_or(StackError::Empty)
    }

    /// The wrapped stack.
    #[must_use]
    pub fn inner(&self) -> &Stack {
        &self.stack
    }

    /// Number of recorded operations.
    #[must_use]
    pub fn operations_count(&self) -> u64 {
        self.history.operations.len() as u64
    }
}

impl StackProperties for RecordedStack {
    fn size(&self) -> u64 {
        self.stack.size()
    }

    fn chain_len(&self) -> u64 {
        self.stack.chain_len()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn has_top(&self) -> bool {
        self.stack.has_top()
    }

    fn current_contents(&self) -> Vec<Point> {
        self.stack.iter().copied().collect()
    }

    fn history(&self) -> &StackHistory {
        &self.history
    }
}
