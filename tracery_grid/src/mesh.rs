// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mesh generation: corner lattices, grid lines, and snapping.

use alloc::vec::Vec;

use kurbo::Rect;
use tracery_coord::{CellPoint, WorldPoint};

/// A single background grid line in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Line start, on a cell corner.
    pub start: WorldPoint,
    /// Line end, on a cell corner.
    pub end: WorldPoint,
}

/// Generates cell-aligned mesh data for a given cell size.
///
/// Purely a function of the cell size and the requested bounds; the mesh
/// has no relationship to scene content and can be regenerated for any
/// region on demand (a renderer typically asks for the current sampling
/// window's bounds each frame).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMesh {
    cell_size: f64,
}

impl GridMesh {
    /// Creates a mesh generator for the given cell size (world units per
    /// cell). `cell_size` must be strictly positive.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be strictly positive");
        Self { cell_size }
    }

    /// The cell size in world units.
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Snaps a world position to the corner of the cell containing it.
    ///
    /// Floors on both axes. Used for background pattern alignment and as
    /// the optional input-snapping step before shape creation.
    #[must_use]
    pub fn snap(&self, point: WorldPoint) -> WorldPoint {
        CellPoint::containing(point, self.cell_size).min_corner(self.cell_size)
    }

    /// Returns the cell containing a world position.
    #[must_use]
    pub fn cell_containing(&self, point: WorldPoint) -> CellPoint {
        CellPoint::containing(point, self.cell_size)
    }

    /// Returns the cell-corner lattice covering `bounds`, row-major from
    /// the top-left.
    ///
    /// The lattice starts at the corner at or below the rect's min corner
    /// and extends through the first corner at or past its max corner, so
    /// the requested region is always fully covered.
    #[must_use]
    pub fn vertices_in_bounds(&self, bounds: Rect) -> Vec<WorldPoint> {
        let (x_lo, x_hi) = self.corner_range(bounds.x0, bounds.x1);
        let (y_lo, y_hi) = self.corner_range(bounds.y0, bounds.y1);

        let mut corners = Vec::new();
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                corners.push(CellPoint::new(x, y).min_corner(self.cell_size));
            }
        }
        corners
    }

    /// Returns the horizontal grid lines spanning `bounds`, top to bottom.
    #[must_use]
    pub fn horizontal_lines(&self, bounds: Rect) -> Vec<GridLine> {
        let (x_lo, x_hi) = self.corner_range(bounds.x0, bounds.x1);
        let (y_lo, y_hi) = self.corner_range(bounds.y0, bounds.y1);

        (y_lo..=y_hi)
            .map(|y| GridLine {
                start: CellPoint::new(x_lo, y).min_corner(self.cell_size),
                end: CellPoint::new(x_hi, y).min_corner(self.cell_size),
            })
            .collect()
    }

    /// Returns the vertical grid lines spanning `bounds`, left to right.
    #[must_use]
    pub fn vertical_lines(&self, bounds: Rect) -> Vec<GridLine> {
        let (x_lo, x_hi) = self.corner_range(bounds.x0, bounds.x1);
        let (y_lo, y_hi) = self.corner_range(bounds.y0, bounds.y1);

        (x_lo..=x_hi)
            .map(|x| GridLine {
                start: CellPoint::new(x, y_lo).min_corner(self.cell_size),
                end: CellPoint::new(x, y_hi).min_corner(self.cell_size),
            })
            .collect()
    }

    /// Inclusive corner-index range covering `[lo, hi]` on one axis.
    fn corner_range(&self, lo: f64, hi: f64) -> (i64, i64) {
        let lo_idx = CellPoint::containing(WorldPoint::new(lo, 0.0), self.cell_size).x;
        let mut hi_idx = CellPoint::containing(WorldPoint::new(hi, 0.0), self.cell_size).x;
        if (hi_idx as f64) * self.cell_size < hi {
            hi_idx += 1;
        }
        (lo_idx, hi_idx)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use tracery_coord::{CellPoint, WorldPoint};

    use super::GridMesh;

    #[test]
    fn snap_floors_to_cell_corner() {
        let mesh = GridMesh::new(10.0);
        assert_eq!(mesh.snap(WorldPoint::new(17.3, 4.9)), WorldPoint::new(10.0, 0.0));
        assert_eq!(mesh.snap(WorldPoint::new(-0.1, -0.1)), WorldPoint::new(-10.0, -10.0));
        // Corner positions are fixed points.
        assert_eq!(mesh.snap(WorldPoint::new(20.0, 30.0)), WorldPoint::new(20.0, 30.0));
    }

    #[test]
    fn lattice_covers_the_requested_rect() {
        let mesh = GridMesh::new(10.0);
        let corners = mesh.vertices_in_bounds(Rect::new(0.0, 0.0, 25.0, 10.0));
        // x corners: 0, 10, 20, 30 (first corner past 25); y corners: 0, 10.
        assert_eq!(corners.len(), 4 * 2);
        assert_eq!(corners.first(), Some(&WorldPoint::new(0.0, 0.0)));
        assert_eq!(corners.last(), Some(&WorldPoint::new(30.0, 10.0)));
    }

    #[test]
    fn lattice_is_row_major() {
        let mesh = GridMesh::new(10.0);
        let corners = mesh.vertices_in_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            corners,
            [
                WorldPoint::new(0.0, 0.0),
                WorldPoint::new(10.0, 0.0),
                WorldPoint::new(0.0, 10.0),
                WorldPoint::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn negative_regions_produce_aligned_corners() {
        let mesh = GridMesh::new(8.0);
        let corners = mesh.vertices_in_bounds(Rect::new(-12.0, -4.0, -2.0, 4.0));
        assert_eq!(corners.first(), Some(&WorldPoint::new(-16.0, -8.0)));
        assert_eq!(corners.last(), Some(&WorldPoint::new(0.0, 8.0)));
    }

    #[test]
    fn grid_lines_span_the_lattice() {
        let mesh = GridMesh::new(10.0);
        let bounds = Rect::new(0.0, 0.0, 20.0, 10.0);

        let horizontal = mesh.horizontal_lines(bounds);
        assert_eq!(horizontal.len(), 2);
        assert_eq!(horizontal[0].start, WorldPoint::new(0.0, 0.0));
        assert_eq!(horizontal[0].end, WorldPoint::new(20.0, 0.0));

        let vertical = mesh.vertical_lines(bounds);
        assert_eq!(vertical.len(), 3);
        assert_eq!(vertical[2].start, WorldPoint::new(20.0, 0.0));
        assert_eq!(vertical[2].end, WorldPoint::new(20.0, 10.0));
    }

    #[test]
    fn cell_containing_matches_snap() {
        let mesh = GridMesh::new(10.0);
        let p = WorldPoint::new(34.0, -6.0);
        assert_eq!(mesh.cell_containing(p), CellPoint::new(3, -1));
        assert_eq!(mesh.snap(p), WorldPoint::new(30.0, -10.0));
    }
}
