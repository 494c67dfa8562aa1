//! Invariant traits for verified data structures.
//!
//! Each module defines the properties that implementations must satisfy.

pub mod stack;

pub use stack::{
    ReplayMismatch, StackHistory, StackOpType, StackOperation, StackProperties,
    StackPropertyChecker,
};
