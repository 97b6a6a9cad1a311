// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Scene: the authoritative store of editable shapes.
//!
//! [`SceneStore`] owns the id → object collection that everything else in
//! the editor reads. All geometry mutation funnels through its methods;
//! no caller ever holds a mutable reference into a vertex list. The store
//! delegates every piece of vertex math to `tracery_shape`'s calculators,
//! so creation, editing, and rendering all agree on one canonical layout
//! per shape kind.
//!
//! ## Mutation paths
//!
//! - [`SceneStore::create`]: raw gesture anchors → canonical vertices →
//!   validity check → insert. Degenerate gestures are rejected with
//!   [`DegenerateShape`] and leave the store untouched.
//! - [`SceneStore::update_properties`]: semantic edit (center, radius,
//!   width, ...) → full canonical regeneration. Old and new vertices are
//!   never blended.
//! - [`SceneStore::translate`]: uniform per-vertex offset, the one
//!   mutation that works on vertices directly. Safe because a uniform
//!   translation preserves every kind exactly.
//! - [`SceneStore::set_style`] / [`SceneStore::set_visible`]: appearance
//!   only; vertices and bounds are untouched.
//!
//! ## Invalidation without observers
//!
//! There are no subscription callbacks. The store keeps a [revision
//! counter](SceneStore::revision) that bumps on every mutation which can
//! change the set of visible objects; pollers (the viewport sampler, a
//! per-frame renderer) compare revisions and recompute when they differ.
//!
//! ```rust
//! use tracery_coord::WorldPoint;
//! use tracery_scene::{SceneStore, ShapeStyle};
//! use tracery_shape::{ShapeKind, ShapeProperties};
//!
//! let mut store = SceneStore::new();
//! let id = store
//!     .create(
//!         ShapeKind::Circle,
//!         WorldPoint::new(0.0, 0.0),
//!         WorldPoint::new(100.0, 0.0),
//!         ShapeStyle::default(),
//!     )
//!     .expect("non-degenerate circle");
//!
//! // Recenter through the same calculator the panel UI uses.
//! let Some(ShapeProperties::Circle { radius, .. }) = store.properties(id) else {
//!     unreachable!()
//! };
//! store.update_properties(
//!     id,
//!     ShapeProperties::Circle {
//!         center: WorldPoint::new(1.0, 0.0),
//!         radius,
//!     },
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod object;
mod store;
mod style;

pub use object::{SceneObject, ShapeId};
pub use store::{DegenerateShape, SceneStore};
pub use style::{ShapeStyle, StyleUpdate};
