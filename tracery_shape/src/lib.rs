// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Shape: canonical vertex layouts and property calculators.
//!
//! Every editable shape is stored as an ordered list of world-space
//! vertices with a **fixed, canonical count and order per kind**:
//!
//! | kind        | vertices | order |
//! |-------------|----------|-------|
//! | `Point`     | 1        | the position |
//! | `Line`      | 2        | start, end |
//! | `Circle`    | 8        | evenly spaced circumference samples, starting east |
//! | `Rectangle` | 4        | corners, clockwise from top-left |
//! | `Diamond`   | 4        | west, north, east, south |
//!
//! The canonical layout is the load-bearing invariant of the whole editor:
//! creation, editing, and rendering all read and write the *same* layout
//! through the *same* calculators. The moment one code path recovers a
//! circle's center with its own ad-hoc formula, previews drift from
//! committed geometry and numeric edit fields corrupt shapes on every
//! round trip.
//!
//! The calculators are two inverse pure functions per kind, dispatched on
//! the closed [`ShapeKind`] enum:
//!
//! - [`properties_from_vertices`]: canonical vertices → semantic
//!   properties (center, radius, width, height, ...).
//! - [`vertices_from_properties`]: semantic properties → a freshly
//!   regenerated canonical vertex list. Never blends with previous
//!   vertices.
//!
//! They round-trip within floating-point tolerance for every kind.
//!
//! ```rust
//! use tracery_coord::WorldPoint;
//! use tracery_shape::{from_anchor_points, properties_from_vertices, ShapeKind, ShapeProperties};
//!
//! // A circle drawn from center (0, 0) to edge (100, 0).
//! let vertices = from_anchor_points(
//!     ShapeKind::Circle,
//!     WorldPoint::new(0.0, 0.0),
//!     WorldPoint::new(100.0, 0.0),
//! );
//! let ShapeProperties::Circle { center, radius } =
//!     properties_from_vertices(ShapeKind::Circle, &vertices)
//! else {
//!     unreachable!()
//! };
//! assert!((radius - 100.0).abs() < 1e-9);
//! assert!(center.distance(WorldPoint::ZERO) < 1e-9);
//! ```
//!
//! ## Degenerate shapes
//!
//! Zero-extent properties (radius 0, width or height 0, a line whose ends
//! coincide) are representable: they occur naturally while the user drags
//! out a shape's second anchor. [`ShapeProperties::is_valid`] reports
//! whether the shape is committable; the scene store rejects invalid
//! shapes at commit while previews render them as zero-extent.
//!
//! This crate is `no_std`.

#![no_std]

mod calculators;
mod kind;
mod properties;

pub use calculators::{
    Vertices, bounds, from_anchor_points, properties_from_vertices, vertices_from_properties,
};
pub use kind::ShapeKind;
pub use properties::ShapeProperties;
