// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene objects and their identifiers.

use kurbo::{Rect, Vec2};
use tracery_coord::WorldPoint;
use tracery_shape::{ShapeKind, ShapeProperties, Vertices, bounds, properties_from_vertices};

use crate::style::ShapeStyle;

/// Identifier for a shape in a [`SceneStore`](crate::SceneStore).
///
/// Ids are monotonic and never reused within a store's lifetime, so a
/// stale id held by a panel or selection after deletion can never alias a
/// newer shape; lookups with it simply miss.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShapeId(pub(crate) u64);

impl ShapeId {
    /// Returns the raw id value, for logging or external bookkeeping.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// One editable shape: canonical vertices plus appearance.
///
/// Objects are created and mutated exclusively through
/// [`SceneStore`](crate::SceneStore); this type exposes read access only.
/// `bounds` is derived from the vertices and recomputed on every vertex
/// change, so it can never go stale relative to its source geometry.
#[derive(Clone, Debug)]
pub struct SceneObject {
    id: ShapeId,
    kind: ShapeKind,
    vertices: Vertices,
    style: ShapeStyle,
    bounds: Rect,
    visible: bool,
    created_at: u64,
}

impl SceneObject {
    pub(crate) fn new(
        id: ShapeId,
        kind: ShapeKind,
        vertices: Vertices,
        style: ShapeStyle,
        created_at: u64,
    ) -> Self {
        debug_assert_eq!(
            vertices.len(),
            kind.vertex_count(),
            "scene object built with a non-canonical vertex list"
        );
        let bounds = bounds(&vertices);
        Self {
            id,
            kind,
            vertices,
            style,
            bounds,
            visible: true,
            created_at,
        }
    }

    /// This object's id.
    #[must_use]
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// This object's shape kind.
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The canonical vertex list, in the kind's fixed order.
    #[must_use]
    pub fn vertices(&self) -> &[WorldPoint] {
        &self.vertices
    }

    /// The object's style.
    #[must_use]
    pub const fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Axis-aligned bounding box of the vertices.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Object-level visibility (show/hide).
    ///
    /// Distinct from viewport culling: a hidden object stays hidden no
    /// matter where the sampling window is, and a visible one can still be
    /// culled when outside it.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Creation sequence number: monotonic per store, immutable.
    ///
    /// Also serves as the deterministic draw order for sampling output.
    #[must_use]
    pub const fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Semantic properties derived through the kind's calculator.
    #[must_use]
    pub fn properties(&self) -> ShapeProperties {
        properties_from_vertices(self.kind, &self.vertices)
    }

    /// Replaces the vertex list wholesale and rederives bounds.
    pub(crate) fn set_vertices(&mut self, vertices: Vertices) {
        debug_assert_eq!(
            vertices.len(),
            self.kind.vertex_count(),
            "canonical vertex count violated on update"
        );
        self.bounds = bounds(&vertices);
        self.vertices = vertices;
    }

    /// Moves every vertex (and the bounds) by the same offset.
    pub(crate) fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.bounds = self.bounds + delta;
    }

    pub(crate) fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
