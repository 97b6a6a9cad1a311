// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of shape kinds.

/// Discriminant for the closed set of editable shape kinds.
///
/// All per-kind behavior in the workspace dispatches on this enum. There is
/// deliberately no structural detection ("does the object have a radius
/// field?") anywhere; adding a kind means the compiler walks you through
/// every match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShapeKind {
    /// A single position.
    Point,
    /// A segment from a start anchor to an end anchor.
    Line,
    /// A circle stored as 8 regular circumference samples.
    Circle,
    /// An axis-aligned rectangle stored as its 4 corners.
    Rectangle,
    /// An axis-aligned diamond (rhombus) stored as its 4 apexes.
    Diamond,
}

impl ShapeKind {
    /// Every kind, in declaration order. Handy for exhaustive tests.
    pub const ALL: [Self; 5] = [
        Self::Point,
        Self::Line,
        Self::Circle,
        Self::Rectangle,
        Self::Diamond,
    ];

    /// The canonical vertex count for this kind.
    ///
    /// Fixed for the object's whole lifetime: creation, editing, and
    /// rendering all see exactly this many vertices.
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Point => 1,
            Self::Line => 2,
            Self::Circle => 8,
            Self::Rectangle | Self::Diamond => 4,
        }
    }

    /// Returns `true` for kinds completed by a single anchor point.
    ///
    /// A `Point` commits on pointer-down alone; every other kind needs the
    /// drag to a second anchor.
    #[must_use]
    pub const fn is_single_anchor(self) -> bool {
        matches!(self, Self::Point)
    }
}
