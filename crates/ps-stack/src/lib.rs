//! # ps-stack
//!
//! Singly linked stack of [`Point`](ps_core::Point)s.
//!
//! - [`Stack`]: owns a chain of nodes; `push`/`pop` are O(1) and popping
//!   an empty stack returns `None` rather than a placeholder point
//! - [`RecordedStack`]: a `Stack` that records its history and implements
//!   [`StackProperties`](ps_core::StackProperties) for invariant checking
//!
//! The stack is single-threaded and provides no internal locking; wrap it
//! in a mutex to share it between threads.

mod node;
pub mod recorded;
pub mod stack;

pub use recorded::RecordedStack;
pub use stack::{Iter, Stack};
