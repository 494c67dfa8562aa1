//! # ps-core
//!
//! Core types for the point stack workspace.
//!
//! - [`Point`]: 2D integer coordinate value with arithmetic and
//!   lexicographic ordering
//! - [`PointError`], [`StackError`]: explicit failures for division by zero
//!   and pops on an empty stack
//! - [`invariants`]: properties any point stack must satisfy, checked
//!   through [`PropertyChecker`]
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Point`] as
//!   `{"x": .., "y": ..}`. Off by default; the crate's own tests enable it.

pub mod counterexample;
pub mod error;
pub mod invariants;
pub mod point;
pub mod property;

pub use counterexample::{Counterexample, StateSnapshot};
pub use error::{PointError, StackError};
pub use invariants::{StackHistory, StackOpType, StackProperties, StackPropertyChecker};
pub use point::Point;
pub use property::{PropertyChecker, PropertyResult, PropertySummary};
