//! Two-dimensional integer point.
//!
//! `Point` is a plain `Copy` value. Ordering is lexicographic: `x` first,
//! then `y`, which the derived `Ord` provides through field order.
//!
//! Arithmetic follows native `i32` semantics. Overflow is the caller's
//! concern; the only checked operation is division, where a zero divisor
//! yields [`PointError::DivisionByZero`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::PointError;

/// A point in a 2D integer coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    // Field order defines the lexicographic ordering.
    x: i32,
    y: i32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a point with the given coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Copy of `base` shifted by `offset` on both axes.
    #[must_use]
    pub fn with_offset(base: Point, offset: i32) -> Self {
        Self::new(base.x + offset, base.y + offset)
    }

    /// Copy of `base` shifted independently on each axis.
    #[must_use]
    pub fn with_offsets(base: Point, offset_x: i32, offset_y: i32) -> Self {
        Self::new(base.x + offset_x, base.y + offset_y)
    }

    /// Copy of `base` shifted by the coordinates of `offset`.
    #[must_use]
    pub fn with_point_offset(base: Point, offset: Point) -> Self {
        Self::new(base.x + offset.x, base.y + offset.y)
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Overwrite both coordinates.
    pub fn set_coords(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Divide both coordinates in place, truncating toward zero.
    ///
    /// On a zero divisor the point is left unchanged.
    pub fn try_div_assign(&mut self, divisor: i32) -> Result<&mut Self, PointError> {
        if divisor == 0 {
            return Err(PointError::DivisionByZero { point: *self });
        }
        self.x /= divisor;
        self.y /= divisor;
        Ok(self)
    }

    /// Add 1 to both coordinates.
    pub fn increment(&mut self) -> &mut Self {
        self.x += 1;
        self.y += 1;
        self
    }

    /// Subtract 1 from both coordinates.
    pub fn decrement(&mut self) -> &mut Self {
        self.x -= 1;
        self.y -= 1;
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Division by a scalar is fallible; `p / 0` is an error, not a trap.
impl Div<i32> for Point {
    type Output = Result<Point, PointError>;

    fn div(self, divisor: i32) -> Self::Output {
        if divisor == 0 {
            return Err(PointError::DivisionByZero { point: self });
        }
        Ok(Point::new(self.x / divisor, self.y / divisor))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<i32> for Point {
    fn mul_assign(&mut self, factor: i32) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}
