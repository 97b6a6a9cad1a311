// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three tagged point types: world, cell, and screen space.

use kurbo::{Point, Vec2};

use crate::math;

/// A position in world space.
///
/// World space is the authoritative, unbounded space scene geometry lives
/// in. It is cell-granular by construction in this design: positions that
/// enter through [`GridMapping::screen_to_world`](crate::GridMapping::screen_to_world)
/// land on integer cell boundaries, though nothing here enforces
/// integrality for positions produced by geometry math (midpoints,
/// circle samples).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    /// Horizontal position in world units.
    pub x: f64,
    /// Vertical position in world units; y grows downward.
    pub y: f64,
}

impl WorldPoint {
    /// The world origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a world point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }

    /// Converts into an untagged [`kurbo::Point`].
    ///
    /// This is the escape hatch for interoperating with Kurbo geometry
    /// (bounding rects, affines). Going back through [`Self::from_point`]
    /// re-tags the value as world space; callers are responsible for not
    /// laundering screen positions through it.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Tags an untagged [`kurbo::Point`] as a world position.
    #[must_use]
    pub const fn from_point(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }

    /// Reinterprets this point as a vector from the world origin.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl core::ops::Add<Vec2> for WorldPoint {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::AddAssign<Vec2> for WorldPoint {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub<Vec2> for WorldPoint {
    type Output = Self;

    fn sub(self, rhs: Vec2) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Difference of two world points is a displacement vector.
impl core::ops::Sub for WorldPoint {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A grid cell address.
///
/// Cells are integral: a world position maps into exactly one cell (the
/// one whose min corner is at or below it on both axes). Converting world
/// → cell → world is lossy on purpose; it is the snapping primitive.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CellPoint {
    /// Horizontal cell index.
    pub x: i64,
    /// Vertical cell index; y grows downward.
    pub y: i64,
}

impl CellPoint {
    /// The cell containing the world origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a cell address from its indices.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the cell containing `world` for the given cell size.
    ///
    /// Positions exactly on a cell boundary belong to the cell they start:
    /// `containing((10, 0), 10)` is cell `(1, 0)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cell indices are in range for any practical editor surface"
    )]
    pub fn containing(world: WorldPoint, cell_size: f64) -> Self {
        Self::new(
            math::floor(world.x / cell_size) as i64,
            math::floor(world.y / cell_size) as i64,
        )
    }

    /// Returns the world position of this cell's min corner.
    ///
    /// This is the inverse of [`Self::containing`] up to snapping:
    /// `containing(p, s).min_corner(s)` is `p` floored to its cell corner.
    #[must_use]
    pub fn min_corner(self, cell_size: f64) -> WorldPoint {
        WorldPoint::new(self.x as f64 * cell_size, self.y as f64 * cell_size)
    }
}

/// A pixel position inside the viewport.
///
/// Origin is the viewport's top-left corner; y grows downward. Screen
/// points are what input devices report and what renderers consume; they
/// never appear in stored geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position.
    pub y: f64,
}

impl ScreenPoint {
    /// The viewport's top-left corner.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a screen point from its pixel coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts into an untagged [`kurbo::Point`].
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Tags an untagged [`kurbo::Point`] as a screen position.
    #[must_use]
    pub const fn from_point(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}
