//! Error types shared across the workspace.

use crate::point::Point;

/// Errors from point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PointError {
    #[error("cannot divide point {point} by zero")]
    DivisionByZero { point: Point },
}

/// Errors from stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("pop on empty stack")]
    Empty,
}
