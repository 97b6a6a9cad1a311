// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Sampler: the scrollable sampling window and visible-set culling.
//!
//! The editor surface views an effectively infinite world through a
//! [`SamplingWindow`]: a world-space rectangle defined by a top-left
//! position and the viewport size. [`ViewportSampler`] owns that window
//! and computes, on demand, which scene objects intersect it.
//!
//! ## Poll, don't push
//!
//! The sampler never subscribes to the store. It remembers the store
//! [revision](tracery_scene::SceneStore::revision) it last sampled and its
//! own dirty flag (set by any window movement); [`ViewportSampler::resample`]
//! recomputes only when one of the two moved and otherwise returns the
//! cached visible list. Idempotence of repeated `resample` calls is a
//! performance guarantee, not a behavioral one: the result is identical
//! either way, the cache just makes the second call free. A renderer
//! calls it once per frame.
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use tracery_coord::WorldPoint;
//! use tracery_sampler::ViewportSampler;
//! use tracery_scene::{SceneStore, ShapeStyle};
//! use tracery_shape::ShapeKind;
//!
//! let mut store = SceneStore::new();
//! store
//!     .create(
//!         ShapeKind::Rectangle,
//!         WorldPoint::new(10.0, 10.0),
//!         WorldPoint::new(30.0, 30.0),
//!         ShapeStyle::default(),
//!     )
//!     .unwrap();
//!
//! let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
//! assert_eq!(sampler.resample(&store).len(), 1);
//!
//! // Pan far away: the rectangle is culled.
//! sampler.pan(Vec2::new(500.0, 500.0));
//! assert!(sampler.resample(&store).is_empty());
//! ```
//!
//! Culling is an axis-aligned bounding-box overlap test, inclusive of
//! edges: an object whose bounds merely touch the window edge counts as
//! visible. Objects hidden at the object level
//! ([`SceneObject::visible`](tracery_scene::SceneObject::visible) false)
//! are excluded regardless of position.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod sampler;
mod window;

pub use sampler::{SamplerDebugInfo, ViewportSampler};
pub use window::SamplingWindow;
