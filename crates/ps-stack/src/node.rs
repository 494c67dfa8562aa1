//! Link node of the stack chain.
//!
//! Each node owns its point and, through `next`, the rest of the chain
//! below it. An absent `next` marks the bottom of the stack.

use ps_core::Point;

/// Owning link to the next node.
pub(crate) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(crate) struct Node {
    point: Point,
    next: Link,
}

impl Node {
    pub(crate) fn new(point: Point, next: Link) -> Box<Self> {
        Box::new(Self { point, next })
    }

    pub(crate) fn point(&self) -> &Point {
        &self.point
    }

    pub(crate) fn point_mut(&mut self) -> &mut Point {
        &mut self.point
    }

    pub(crate) fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    pub(crate) fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Link `next` below this node, dropping any previous successor.
    pub(crate) fn set_next(&mut self, next: Link) {
        self.next = next;
    }

    /// Detach and return the rest of the chain.
    pub(crate) fn take_next(&mut self) -> Link {
        self.next.take()
    }

    /// Consume the node, returning its point and the rest of the chain.
    pub(crate) fn into_parts(self: Box<Self>) -> (Point, Link) {
        let Node { point, next } = *self;
        (point, next)
    }
}
