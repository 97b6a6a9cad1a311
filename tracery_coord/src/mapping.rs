// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the three spaces, parameterized by cell size and
//! world offset.

use kurbo::Vec2;

use crate::math;
use crate::spaces::{CellPoint, ScreenPoint, WorldPoint};

/// The active grid parameters: cell size in pixels and world offset.
///
/// `GridMapping` is a pure parameter object. The embedding application owns
/// the current cell size and the world offset of the viewport's top-left
/// corner and constructs one of these (cheaply, it is `Copy`) whenever a
/// conversion is needed, typically once per input event. No conversion here
/// mutates anything.
///
/// The mapping is invertible for cell-aligned inputs: for a fixed
/// `(cell_size, offset)` pair, [`Self::world_to_screen`] and
/// [`Self::screen_to_world`] are exact inverses on positions that lie on
/// cell boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
    cell_size: f64,
    offset: Vec2,
}

impl GridMapping {
    /// Creates a mapping from a cell size (in pixels per cell) and the
    /// world offset of the viewport's top-left corner.
    ///
    /// `cell_size` must be strictly positive.
    #[must_use]
    pub fn new(cell_size: f64, offset: Vec2) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be strictly positive");
        Self { cell_size, offset }
    }

    /// Returns the cell size in pixels per cell.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the world offset of the viewport's top-left corner.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Converts a viewport pixel position into world space.
    ///
    /// The pixel is floored to the grid cell containing it before the
    /// offset is applied. The floor is intentional snapping: pointer input
    /// lands on cell boundaries, which is what keeps drawn geometry
    /// pixel-aligned under every cell size.
    #[must_use]
    pub fn screen_to_world(&self, screen: ScreenPoint) -> WorldPoint {
        WorldPoint::new(
            math::floor(screen.x / self.cell_size) + self.offset.x,
            math::floor(screen.y / self.cell_size) + self.offset.y,
        )
    }

    /// Converts a world position into viewport pixel space.
    ///
    /// Exact inverse of [`Self::screen_to_world`] for cell-aligned world
    /// positions; no flooring is applied here.
    #[must_use]
    pub fn world_to_screen(&self, world: WorldPoint) -> ScreenPoint {
        ScreenPoint::new(
            (world.x - self.offset.x) * self.cell_size,
            (world.y - self.offset.y) * self.cell_size,
        )
    }

    /// Converts a world position into its cell address.
    ///
    /// World space is cell-granular by construction (positions enter
    /// through [`Self::screen_to_world`], which floors), so this is a
    /// pass-through cast for such positions. It is kept as a named
    /// operation so that any future sub-cell precision has a single place
    /// to land.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "cell indices are in range for any practical editor surface"
    )]
    pub fn world_to_cell(&self, world: WorldPoint) -> CellPoint {
        CellPoint::new(math::floor(world.x) as i64, math::floor(world.y) as i64)
    }

    /// Converts a cell address back into world space.
    ///
    /// Inverse of [`Self::world_to_cell`] for cell-granular world
    /// positions.
    #[must_use]
    pub fn cell_to_world(&self, cell: CellPoint) -> WorldPoint {
        WorldPoint::new(cell.x as f64, cell.y as f64)
    }
}
