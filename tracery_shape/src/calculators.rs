// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-kind calculators: vertices ↔ properties, anchors → vertices,
//! and bounding boxes.

use kurbo::{Rect, Vec2};
use smallvec::{SmallVec, smallvec};
use tracery_coord::WorldPoint;

use crate::kind::ShapeKind;
use crate::properties::ShapeProperties;

/// A canonical vertex list.
///
/// Inline capacity is 8, the largest canonical count (the circle), so
/// vertex storage never touches the heap.
pub type Vertices = SmallVec<[WorldPoint; 8]>;

/// Unit directions of the 8 circle samples, at 45° steps starting east.
///
/// Expressed as exact constants rather than `cos`/`sin` calls: opposite
/// samples cancel exactly when the centroid is taken, so a circle's center
/// and radius survive vertex round trips to the last bit, and `no_std`
/// builds need no trigonometry. The order winds clockwise in the y-down
/// coordinate convention.
const CIRCLE_DIRECTIONS: [Vec2; 8] = {
    const D: f64 = core::f64::consts::FRAC_1_SQRT_2;
    [
        Vec2::new(1.0, 0.0),
        Vec2::new(D, D),
        Vec2::new(0.0, 1.0),
        Vec2::new(-D, D),
        Vec2::new(-1.0, 0.0),
        Vec2::new(-D, -D),
        Vec2::new(0.0, -1.0),
        Vec2::new(D, -D),
    ]
};

/// Builds the canonical vertex list from a drawing gesture's raw anchors.
///
/// `a` is the first pointer-down position and `b` the current (or final)
/// drag position. For [`ShapeKind::Point`], `b` is ignored.
///
/// - `Line`: `a` is the start, `b` the end.
/// - `Circle`: `a` is the center, `|b - a|` the radius.
/// - `Rectangle` / `Diamond`: `a` and `b` span the bounding box, in either
///   order.
///
/// The result always has the kind's canonical count and order, identical
/// to what [`vertices_from_properties`] would produce, so previews drawn
/// from in-progress gestures agree exactly with the committed shape.
#[must_use]
pub fn from_anchor_points(kind: ShapeKind, a: WorldPoint, b: WorldPoint) -> Vertices {
    match kind {
        ShapeKind::Point => smallvec![a],
        ShapeKind::Line => smallvec![a, b],
        ShapeKind::Circle => vertices_from_properties(&ShapeProperties::Circle {
            center: a,
            radius: a.distance(b),
        }),
        ShapeKind::Rectangle => vertices_from_properties(&ShapeProperties::Rectangle {
            center: a.midpoint(b),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }),
        ShapeKind::Diamond => vertices_from_properties(&ShapeProperties::Diamond {
            center: a.midpoint(b),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }),
    }
}

/// Derives semantic properties from a canonical vertex list.
///
/// This is the *only* sanctioned way to recover a center, radius, width,
/// or height from stored geometry. The circle case takes the centroid of
/// its 8 samples, which is the exact center *only because* the samples are
/// regular by construction; it is not a general centroid-of-points
/// approximation.
///
/// # Panics
///
/// Panics if `vertices.len()` differs from the kind's canonical count.
/// That means the single-canonical-layout invariant has already been
/// broken somewhere upstream, which is not a recoverable condition.
#[must_use]
pub fn properties_from_vertices(kind: ShapeKind, vertices: &[WorldPoint]) -> ShapeProperties {
    assert_eq!(
        vertices.len(),
        kind.vertex_count(),
        "canonical vertex count violated for {kind:?}"
    );
    match kind {
        ShapeKind::Point => ShapeProperties::Point {
            position: vertices[0],
        },
        ShapeKind::Line => ShapeProperties::Line {
            start: vertices[0],
            end: vertices[1],
        },
        ShapeKind::Circle => {
            let mut sum = Vec2::ZERO;
            for v in vertices {
                sum += v.to_vec2();
            }
            let center = WorldPoint::new(sum.x / 8.0, sum.y / 8.0);
            ShapeProperties::Circle {
                center,
                radius: center.distance(vertices[0]),
            }
        }
        ShapeKind::Rectangle => {
            // Opposite corners give the center; adjacent corners the sides.
            let center = vertices[0].midpoint(vertices[2]);
            ShapeProperties::Rectangle {
                center,
                width: (vertices[1].x - vertices[0].x).abs(),
                height: (vertices[2].y - vertices[1].y).abs(),
            }
        }
        ShapeKind::Diamond => {
            let [west, north, east, south] = [vertices[0], vertices[1], vertices[2], vertices[3]];
            ShapeProperties::Diamond {
                center: WorldPoint::new((west.x + east.x) / 2.0, (north.y + south.y) / 2.0),
                width: (east.x - west.x).abs(),
                height: (south.y - north.y).abs(),
            }
        }
    }
}

/// Regenerates the full canonical vertex list from semantic properties.
///
/// Always produces a complete, fresh list; callers replace stored vertices
/// wholesale rather than patching individual entries, so repeated edits
/// cannot accumulate drift.
#[must_use]
pub fn vertices_from_properties(props: &ShapeProperties) -> Vertices {
    match *props {
        ShapeProperties::Point { position } => smallvec![position],
        ShapeProperties::Line { start, end } => smallvec![start, end],
        ShapeProperties::Circle { center, radius } => CIRCLE_DIRECTIONS
            .iter()
            .map(|dir| center + *dir * radius)
            .collect(),
        ShapeProperties::Rectangle {
            center,
            width,
            height,
        } => {
            let half = Vec2::new(width / 2.0, height / 2.0);
            smallvec![
                WorldPoint::new(center.x - half.x, center.y - half.y),
                WorldPoint::new(center.x + half.x, center.y - half.y),
                WorldPoint::new(center.x + half.x, center.y + half.y),
                WorldPoint::new(center.x - half.x, center.y + half.y),
            ]
        }
        ShapeProperties::Diamond {
            center,
            width,
            height,
        } => {
            let half = Vec2::new(width / 2.0, height / 2.0);
            smallvec![
                WorldPoint::new(center.x - half.x, center.y),
                WorldPoint::new(center.x, center.y - half.y),
                WorldPoint::new(center.x + half.x, center.y),
                WorldPoint::new(center.x, center.y + half.y),
            ]
        }
    }
}

/// Axis-aligned bounding box of a vertex list.
///
/// Zero-extent inputs (a point, a degenerate preview) yield a zero-area
/// rect at their position. An empty list yields [`Rect::ZERO`].
#[must_use]
pub fn bounds(vertices: &[WorldPoint]) -> Rect {
    let Some((first, rest)) = vertices.split_first() else {
        return Rect::ZERO;
    };
    let mut rect = Rect::new(first.x, first.y, first.x, first.y);
    for v in rest {
        rect.x0 = rect.x0.min(v.x);
        rect.y0 = rect.y0.min(v.y);
        rect.x1 = rect.x1.max(v.x);
        rect.y1 = rect.y1.max(v.y);
    }
    rect
}
