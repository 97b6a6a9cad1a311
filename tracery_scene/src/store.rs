// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The store itself: creation, editing, and removal of scene objects.

use hashbrown::HashMap;
use kurbo::Vec2;
use tracery_coord::WorldPoint;
use tracery_shape::{
    ShapeKind, ShapeProperties, from_anchor_points, properties_from_vertices,
    vertices_from_properties,
};

use crate::object::{SceneObject, ShapeId};
use crate::style::{ShapeStyle, StyleUpdate};

/// Error returned when a commit would produce a zero-extent shape.
///
/// Degenerate geometry is legal while a gesture is in flight (the preview
/// simply renders as zero-extent); only committing it into the store is
/// refused. The rejected gesture leaves the store untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DegenerateShape;

impl core::fmt::Display for DegenerateShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("shape has zero extent and cannot be committed")
    }
}

impl core::error::Error for DegenerateShape {}

/// The authoritative collection of scene objects.
///
/// Single-threaded and event-driven: each mutation is applied fully before
/// the next input event is processed, so a freshly created object is
/// always present in the next sampling pass. See the crate docs for the
/// mutation paths and the revision-based invalidation contract.
#[derive(Debug, Default)]
pub struct SceneStore {
    objects: HashMap<ShapeId, SceneObject>,
    next_id: u64,
    next_seq: u64,
    revision: u64,
}

impl SceneStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape from a drawing gesture's raw anchor points.
    ///
    /// `a` and `b` are the gesture's two anchors (`b` is ignored for
    /// single-anchor kinds; pass the same point). The canonical vertices
    /// are generated by the kind's calculator, validated, and inserted
    /// with a fresh id and creation sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateShape`] if the gesture spans zero extent; the
    /// store is left unchanged.
    pub fn create(
        &mut self,
        kind: ShapeKind,
        a: WorldPoint,
        b: WorldPoint,
        style: ShapeStyle,
    ) -> Result<ShapeId, DegenerateShape> {
        let vertices = from_anchor_points(kind, a, b);
        if !properties_from_vertices(kind, &vertices).is_valid() {
            return Err(DegenerateShape);
        }

        self.next_id += 1;
        let id = ShapeId(self.next_id);
        let seq = self.next_seq;
        self.next_seq += 1;

        self.objects
            .insert(id, SceneObject::new(id, kind, vertices, style, seq));
        self.revision += 1;
        Ok(id)
    }

    /// Returns the object with the given id, if it still exists.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Returns the semantic properties of the object, if it exists.
    ///
    /// This is the getter panel UIs round-trip through: edit the returned
    /// properties and hand them back to [`Self::update_properties`]. The
    /// UI never derives radius/width/height with its own formulas.
    #[must_use]
    pub fn properties(&self, id: ShapeId) -> Option<ShapeProperties> {
        self.objects.get(&id).map(SceneObject::properties)
    }

    /// Replaces an object's geometry from edited semantic properties.
    ///
    /// The vertex list is regenerated wholesale by the kind's calculator;
    /// old vertices are never blended in, so repeated edits cannot drift.
    /// Returns `false` (and changes nothing) if the id is gone, the
    /// property kind does not match the object's kind, or the properties
    /// are degenerate.
    pub fn update_properties(&mut self, id: ShapeId, props: ShapeProperties) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        if props.kind() != object.kind() || !props.is_valid() {
            return false;
        }
        object.set_vertices(vertices_from_properties(&props));
        self.revision += 1;
        true
    }

    /// Moves an object by a uniform offset (drag-move).
    ///
    /// The only mutation path that touches vertices directly; a uniform
    /// translation preserves every shape kind exactly, circles and
    /// diamonds included. Returns `false` if the id is gone.
    pub fn translate(&mut self, id: ShapeId, delta: Vec2) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        object.translate(delta);
        self.revision += 1;
        true
    }

    /// Applies a partial style edit. Vertices and bounds are untouched.
    ///
    /// Style edits do not bump the revision: they cannot change which
    /// objects are visible, and samplers hand out references, so the new
    /// style is observed without a resample.
    pub fn set_style(&mut self, id: ShapeId, update: StyleUpdate) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        update.apply_to(object.style_mut());
        true
    }

    /// Shows or hides an object. Returns `false` if the id is gone.
    pub fn set_visible(&mut self, id: ShapeId, visible: bool) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        if object.visible() != visible {
            object.set_visible(visible);
            self.revision += 1;
        }
        true
    }

    /// Removes an object. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let removed = self.objects.remove(&id).is_some();
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Removes every object.
    pub fn clear(&mut self) {
        if !self.objects.is_empty() {
            self.objects.clear();
            self.revision += 1;
        }
    }

    /// Number of objects in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over all objects, in unspecified order.
    ///
    /// Consumers needing a stable order sort by
    /// [`SceneObject::created_at`], as the viewport sampler does.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Monotonic counter of set-changing mutations.
    ///
    /// Bumped by creation, geometry edits, translation, visibility
    /// toggles, removal, and clearing; *not* by style edits or reads.
    /// Pollers cache the last revision they saw and recompute when it
    /// moves.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}
