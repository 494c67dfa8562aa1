//! # ps-stateright
//!
//! Stateright model of the linked point stack.
//!
//! The model tracks the node chain explicitly, including node allocation
//! and release, so exhaustive exploration checks the same invariants the
//! runtime checker in `ps-core` verifies on concrete runs.

pub mod stack_model;

pub use stack_model::{PopOutcome, StackAction, StackModel, StackState};
