// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Grid: the cell-aligned background mesh and snapping helper.
//!
//! [`GridMesh`] is a pure data provider: given a world-space rectangle it
//! produces the grid-cell corner lattice covering it, and it snaps
//! arbitrary world positions onto cell corners. It knows nothing about the
//! scene's objects; the background pattern and the shapes merely share a
//! cell size, which is what keeps drawn geometry visually locked to the
//! mesh.
//!
//! ```rust
//! use kurbo::Rect;
//! use tracery_coord::WorldPoint;
//! use tracery_grid::GridMesh;
//!
//! let mesh = GridMesh::new(10.0);
//!
//! // Corners covering a small viewport region, row-major.
//! let corners = mesh.vertices_in_bounds(Rect::new(0.0, 0.0, 20.0, 10.0));
//! assert_eq!(corners.len(), 3 * 2);
//! assert_eq!(corners[0], WorldPoint::new(0.0, 0.0));
//! assert_eq!(corners[5], WorldPoint::new(20.0, 10.0));
//!
//! // Optional input snapping before shape creation.
//! assert_eq!(mesh.snap(WorldPoint::new(17.3, 4.9)), WorldPoint::new(10.0, 0.0));
//! ```
//!
//! The lattice for a rect spans from the cell corner at or below the
//! rect's min corner through the first corner at or past its max corner,
//! so the mesh always covers the requested region completely.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod mesh;

pub use mesh::{GridLine, GridMesh};
