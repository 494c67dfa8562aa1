//! Singly linked LIFO stack of points.
//!
//! The stack owns its chain through `top`; every node owns the node below
//! it. Popping moves the top node out of the chain and frees it, and
//! dropping the stack frees whatever is left.
//!
//! # Invariants
//!
//! - `size` equals the number of nodes reachable from `top`
//! - `size == 0` iff `top.is_none()`

use std::fmt;
use std::iter::FusedIterator;

use ps_core::{Point, StackError};

use crate::node::{Link, Node};

/// LIFO stack of [`Point`]s backed by an owned linked chain.
#[derive(Default)]
pub struct Stack {
    size: u64,
    top: Link,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { size: 0, top: None }
    }

    /// Push a point; it becomes the new top.
    pub fn push(&mut self, point: Point) {
        let mut node = Node::new(point, None);
        node.set_next(self.top.take());
        self.top = Some(node);
        self.size += 1;

        tracing::trace!(%point, size = self.size, "push");
        debug_assert!(self.top.is_some());
    }

    /// Remove and return the top point, or `None` if the stack is empty.
    ///
    /// An empty stack is left unchanged.
    pub fn pop(&mut self) -> Option<Point> {
        let node = self.top.take()?;
        let (point, next) = node.into_parts();
        self.top = next;

        debug_assert!(self.size > 0, "non-empty chain with zero size");
        self.size -= 1;
        debug_assert_eq!(self.size == 0, self.top.is_none());

        tracing::trace!(%point, size = self.size, "pop");
        Some(point)
    }

    /// Like [`Stack::pop`], but an empty stack is an error.
    pub fn try_pop(&mut self) -> Result<Point, StackError> {
        self.pop().ok_or(StackError::Empty)
    }

    /// The top point, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Point> {
        self.top.as_deref().map(Node::point)
    }

    /// Mutable access to the top point.
    pub fn peek_mut(&mut self) -> Option<&mut Point> {
        self.top.as_deref_mut().map(Node::point_mut)
    }

    /// Overwrite the top point in place, returning the one it replaced.
    ///
    /// Returns `None` and leaves the stack unchanged when it is empty.
    pub fn replace_top(&mut self, point: Point) -> Option<Point> {
        let node = self.top.as_deref_mut()?;
        let old = *node.point();
        node.set_point(point);
        Some(old)
    }

    /// Number of points on the stack.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        release_chain(self.top.take());
        self.size = 0;
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.top.as_deref(),
            remaining: self.size,
        }
    }

    /// Count nodes by walking the chain.
    ///
    /// Unlike [`Stack::size`], this does not trust the cached counter.
    #[must_use]
    pub fn chain_len(&self) -> u64 {
        let mut count = 0;
        let mut current = self.top.as_deref();
        while let Some(node) = current {
            count += 1;
            current = node.next();
        }
        count
    }

    pub(crate) fn has_top(&self) -> bool {
        self.top.is_some()
    }
}

/// Free a chain one node at a time.
///
/// Dropping a `Box<Node>` directly would recurse once per node.
fn release_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.take_next();
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        release_chain(self.top.take());
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Point> for Stack {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.push(point);
        }
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl FromIterator<Point> for Stack {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Top-to-bottom iterator over a [`Stack`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: u64,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<&'a Point> {
        let node = self.next?;
        self.next = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.point())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
