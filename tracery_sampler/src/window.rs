// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sampling window: a positioned, viewport-sized world rectangle.

use kurbo::{Rect, Size, Vec2};
use tracery_coord::WorldPoint;

/// The world-space region currently on screen.
///
/// `position` is the window's top-left corner in world units and `size`
/// the viewport extent. The bounds rectangle is always derived from the
/// two, never stored, so it cannot go stale. A process has a single
/// window, owned by [`ViewportSampler`](crate::ViewportSampler); this
/// type is the plain value it hands out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplingWindow {
    position: WorldPoint,
    size: Size,
}

impl SamplingWindow {
    /// Creates a window at the given top-left position.
    #[must_use]
    pub const fn new(position: WorldPoint, size: Size) -> Self {
        Self { position, size }
    }

    /// Creates a window at the world origin.
    #[must_use]
    pub const fn at_origin(size: Size) -> Self {
        Self::new(WorldPoint::ZERO, size)
    }

    /// Top-left corner of the visible region, in world units.
    #[must_use]
    pub const fn position(&self) -> WorldPoint {
        self.position
    }

    /// Viewport extent in world units.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The visible world rectangle: position + size.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position.to_point(), self.size)
    }

    /// Returns this window translated by `delta`.
    #[must_use]
    pub fn panned_by(self, delta: Vec2) -> Self {
        Self::new(self.position + delta, self.size)
    }

    /// Returns this window moved to `position`.
    #[must_use]
    pub const fn moved_to(self, position: WorldPoint) -> Self {
        Self::new(position, self.size)
    }

    /// Returns this window resized to `size`, keeping its position.
    #[must_use]
    pub const fn resized(self, size: Size) -> Self {
        Self::new(self.position, size)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};
    use tracery_coord::WorldPoint;

    use super::SamplingWindow;

    #[test]
    fn bounds_derive_from_position_and_size() {
        let window = SamplingWindow::new(WorldPoint::new(500.0, 500.0), Size::new(800.0, 600.0));
        assert_eq!(window.bounds(), Rect::new(500.0, 500.0, 1300.0, 1100.0));
    }

    #[test]
    fn panning_accumulates() {
        let window = SamplingWindow::at_origin(Size::new(100.0, 100.0))
            .panned_by(Vec2::new(10.0, 20.0))
            .panned_by(Vec2::new(-4.0, 5.0));
        assert_eq!(window.position(), WorldPoint::new(6.0, 25.0));
    }
}
