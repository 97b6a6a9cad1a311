// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic shape properties: the editable view of canonical vertices.

use tracery_coord::WorldPoint;

use crate::kind::ShapeKind;

/// Semantic properties of a shape, one variant per [`ShapeKind`].
///
/// This is the representation numeric edit fields and property panels work
/// with. It is always *derived* from canonical vertices via
/// [`properties_from_vertices`](crate::properties_from_vertices) and turned
/// back into vertices via
/// [`vertices_from_properties`](crate::vertices_from_properties); nothing
/// stores properties alongside vertices where the two could drift apart.
///
/// Sizes are center-anchored on purpose: resizing a rectangle or diamond
/// through its properties never translates it. A UI that displays a
/// circle's diameter must compute `2.0 * radius` at the presentation
/// boundary and feed edits back as a radius; the diameter is never a
/// second independently stored field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeProperties {
    /// A single position.
    Point {
        /// The point's position.
        position: WorldPoint,
    },
    /// A segment between two anchors.
    ///
    /// The editing anchor is `start`, not the midpoint: dragging a line's
    /// position field moves its start and carries the end along.
    Line {
        /// Start anchor.
        start: WorldPoint,
        /// End anchor.
        end: WorldPoint,
    },
    /// A circle.
    Circle {
        /// Center of the circle.
        center: WorldPoint,
        /// Radius in world units.
        radius: f64,
    },
    /// An axis-aligned rectangle.
    Rectangle {
        /// Center of the rectangle.
        center: WorldPoint,
        /// Full width in world units.
        width: f64,
        /// Full height in world units.
        height: f64,
    },
    /// An axis-aligned diamond.
    Diamond {
        /// Center of the diamond.
        center: WorldPoint,
        /// Full west-to-east extent in world units.
        width: f64,
        /// Full north-to-south extent in world units.
        height: f64,
    },
}

impl ShapeProperties {
    /// Returns the kind these properties describe.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Point { .. } => ShapeKind::Point,
            Self::Line { .. } => ShapeKind::Line,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Diamond { .. } => ShapeKind::Diamond,
        }
    }

    /// Returns `true` if the shape has committable (non-degenerate) extent.
    ///
    /// Zero or negative radius/width/height, or a line whose anchors
    /// coincide, are degenerate. Degenerate properties are fine as
    /// transient preview state; the scene store rejects them at commit.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Point { .. } => true,
            Self::Line { start, end } => start != end,
            Self::Circle { radius, .. } => radius > 0.0,
            Self::Rectangle { width, height, .. } | Self::Diamond { width, height, .. } => {
                width > 0.0 && height > 0.0
            }
        }
    }

    /// Returns the editing anchor position for this shape.
    ///
    /// The anchor is what a "position" field in a property panel edits:
    /// the point itself, a line's start, or the center for the closed
    /// kinds.
    #[must_use]
    pub const fn anchor(&self) -> WorldPoint {
        match *self {
            Self::Point { position } => position,
            Self::Line { start, .. } => start,
            Self::Circle { center, .. }
            | Self::Rectangle { center, .. }
            | Self::Diamond { center, .. } => center,
        }
    }
}

#[cfg(test)]
mod tests {
    use tracery_coord::WorldPoint;

    use super::{ShapeKind, ShapeProperties};

    #[test]
    fn kind_matches_variant() {
        let props = ShapeProperties::Circle {
            center: WorldPoint::ZERO,
            radius: 1.0,
        };
        assert_eq!(props.kind(), ShapeKind::Circle);
    }

    #[test]
    fn degenerate_extents_are_invalid() {
        assert!(
            !ShapeProperties::Circle {
                center: WorldPoint::ZERO,
                radius: 0.0,
            }
            .is_valid()
        );
        assert!(
            !ShapeProperties::Rectangle {
                center: WorldPoint::ZERO,
                width: 10.0,
                height: 0.0,
            }
            .is_valid()
        );
        assert!(
            !ShapeProperties::Line {
                start: WorldPoint::new(3.0, 3.0),
                end: WorldPoint::new(3.0, 3.0),
            }
            .is_valid()
        );
        // A bare point is always committable.
        assert!(
            ShapeProperties::Point {
                position: WorldPoint::ZERO,
            }
            .is_valid()
        );
    }

    #[test]
    fn anchor_is_start_for_lines_and_center_for_closed_kinds() {
        let line = ShapeProperties::Line {
            start: WorldPoint::new(1.0, 2.0),
            end: WorldPoint::new(9.0, 9.0),
        };
        assert_eq!(line.anchor(), WorldPoint::new(1.0, 2.0));

        let diamond = ShapeProperties::Diamond {
            center: WorldPoint::new(5.0, 6.0),
            width: 4.0,
            height: 2.0,
        };
        assert_eq!(diamond.anchor(), WorldPoint::new(5.0, 6.0));
    }
}
