// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sampler: dirty tracking and visible-set recomputation.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use tracery_coord::WorldPoint;
use tracery_scene::{SceneObject, SceneStore, ShapeId};

use crate::window::SamplingWindow;

/// Owns the sampling window and the cached visible set.
///
/// Two logical states: *idle* (the cached list matches the current window
/// and store) and *dirty* (window moved or the store's revision advanced;
/// the next [`Self::resample`] recomputes). Window mutations flip to
/// dirty; store changes are detected by polling the revision counter, so
/// the sampler needs no callback wiring into the store.
#[derive(Debug)]
pub struct ViewportSampler {
    window: SamplingWindow,
    dirty: bool,
    seen_revision: u64,
    visible: Vec<ShapeId>,
}

impl ViewportSampler {
    /// Creates a sampler with its window at the world origin.
    #[must_use]
    pub fn new(viewport_size: Size) -> Self {
        Self {
            window: SamplingWindow::at_origin(viewport_size),
            dirty: true,
            seen_revision: 0,
            visible: Vec::new(),
        }
    }

    /// The current sampling window.
    #[must_use]
    pub const fn window(&self) -> SamplingWindow {
        self.window
    }

    /// The visible world rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.window.bounds()
    }

    /// Pans the window by a world-space delta (navigation input).
    pub fn pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.window = self.window.panned_by(delta);
        self.dirty = true;
    }

    /// Moves the window's top-left corner to an absolute position.
    pub fn set_position(&mut self, position: WorldPoint) {
        if self.window.position() == position {
            return;
        }
        self.window = self.window.moved_to(position);
        self.dirty = true;
    }

    /// Resizes the window (viewport resize).
    pub fn set_size(&mut self, size: Size) {
        if self.window.size() == size {
            return;
        }
        self.window = self.window.resized(size);
        self.dirty = true;
    }

    /// Recenters the window on the world origin.
    pub fn reset(&mut self) {
        self.set_position(WorldPoint::ZERO);
    }

    /// Returns the ids of objects intersecting the window, recomputing
    /// only if the window or the store changed since the last call.
    ///
    /// The list is ordered by creation sequence (stable draw order).
    /// Objects hidden at the object level are excluded; bounds that merely
    /// touch the window edge are included.
    pub fn resample(&mut self, store: &SceneStore) -> &[ShapeId] {
        if self.dirty || self.seen_revision != store.revision() {
            let window_bounds = self.window.bounds();
            let mut hits: Vec<(u64, ShapeId)> = store
                .iter()
                .filter(|obj| obj.visible() && overlaps(obj.bounds(), window_bounds))
                .map(|obj| (obj.created_at(), obj.id()))
                .collect();
            hits.sort_unstable();

            self.visible.clear();
            self.visible.extend(hits.into_iter().map(|(_, id)| id));
            self.seen_revision = store.revision();
            self.dirty = false;
        }
        &self.visible
    }

    /// Resamples and resolves the visible ids to object references.
    ///
    /// Convenience for renderers; the returned objects live in `store`.
    pub fn visible_objects<'s>(&mut self, store: &'s SceneStore) -> Vec<&'s SceneObject> {
        self.resample(store);
        self.visible
            .iter()
            .filter_map(|id| store.get(*id))
            .collect()
    }

    /// Snapshot of the sampler state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SamplerDebugInfo {
        SamplerDebugInfo {
            window: self.window,
            dirty: self.dirty,
            seen_revision: self.seen_revision,
            cached_visible: self.visible.len(),
        }
    }
}

/// Axis-aligned overlap, inclusive of shared edges.
///
/// Written out instead of `Rect::intersect(..).is_empty()` because the
/// empty check treats edge-touching rects as disjoint, and the visibility
/// contract counts them as visible.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Debug snapshot of a [`ViewportSampler`] state.
#[derive(Clone, Copy, Debug)]
pub struct SamplerDebugInfo {
    /// The current sampling window.
    pub window: SamplingWindow,
    /// Whether the next resample must recompute due to window movement.
    pub dirty: bool,
    /// The store revision the cached list was computed against.
    pub seen_revision: u64,
    /// Length of the cached visible list.
    pub cached_visible: usize,
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};
    use tracery_coord::WorldPoint;
    use tracery_scene::{SceneStore, ShapeStyle};
    use tracery_shape::ShapeKind;

    use super::{ViewportSampler, overlaps};

    fn store_with_rect(a: (f64, f64), b: (f64, f64)) -> SceneStore {
        let mut store = SceneStore::new();
        store
            .create(
                ShapeKind::Rectangle,
                WorldPoint::new(a.0, a.1),
                WorldPoint::new(b.0, b.1),
                ShapeStyle::default(),
            )
            .expect("non-degenerate rectangle");
        store
    }

    #[test]
    fn overlap_is_edge_inclusive() {
        let window = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(overlaps(Rect::new(100.0, 40.0, 120.0, 60.0), window));
        assert!(overlaps(Rect::new(-20.0, -20.0, 0.0, 0.0), window));
        assert!(!overlaps(Rect::new(100.1, 40.0, 120.0, 60.0), window));
    }

    #[test]
    fn fully_inside_is_visible_and_fully_outside_is_not() {
        let store = store_with_rect((10.0, 10.0), (30.0, 30.0));
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
        assert_eq!(sampler.resample(&store).len(), 1);

        sampler.set_position(WorldPoint::new(1000.0, 1000.0));
        assert!(sampler.resample(&store).is_empty());
    }

    #[test]
    fn panning_away_culls_the_object() {
        // An object at (10, 10) with an 800x600 window panned by (500, 500).
        let store = store_with_rect((10.0, 10.0), (20.0, 20.0));
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
        assert_eq!(sampler.resample(&store).len(), 1);

        sampler.pan(Vec2::new(500.0, 500.0));
        assert!(sampler.resample(&store).is_empty());
    }

    #[test]
    fn resample_is_idempotent_and_cached() {
        let store = store_with_rect((10.0, 10.0), (30.0, 30.0));
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));

        let first = sampler.resample(&store).to_vec();
        assert!(!sampler.debug_info().dirty);
        let second = sampler.resample(&store).to_vec();
        assert_eq!(first, second);
        assert_eq!(sampler.debug_info().seen_revision, store.revision());
    }

    #[test]
    fn store_mutations_are_picked_up_without_callbacks() {
        let mut store = store_with_rect((10.0, 10.0), (30.0, 30.0));
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
        assert_eq!(sampler.resample(&store).len(), 1);

        store.clear();
        assert!(sampler.resample(&store).is_empty());
    }

    #[test]
    fn hidden_objects_are_excluded() {
        let mut store = SceneStore::new();
        let id = store
            .create(
                ShapeKind::Rectangle,
                WorldPoint::new(10.0, 10.0),
                WorldPoint::new(30.0, 30.0),
                ShapeStyle::default(),
            )
            .expect("non-degenerate rectangle");
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
        assert_eq!(sampler.resample(&store).len(), 1);

        store.set_visible(id, false);
        assert!(sampler.resample(&store).is_empty());
    }

    #[test]
    fn reset_recenters_on_origin() {
        let store = store_with_rect((10.0, 10.0), (30.0, 30.0));
        let mut sampler = ViewportSampler::new(Size::new(800.0, 600.0));
        sampler.pan(Vec2::new(900.0, 900.0));
        assert!(sampler.resample(&store).is_empty());

        sampler.reset();
        assert_eq!(sampler.window().position(), WorldPoint::ZERO);
        assert_eq!(sampler.resample(&store).len(), 1);
    }
}
