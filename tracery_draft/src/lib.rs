// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Draft: the in-progress drawing gesture.
//!
//! A multi-point drawing gesture lives between pointer-down and
//! pointer-up: the first anchor is fixed, the second follows the pointer,
//! and nothing exists in the scene store until the gesture commits.
//! [`Draft`] is that pending state, and nothing but that state.
//!
//! The input collaborator converts pointer positions to world space (via
//! `tracery_coord::GridMapping`, tagged with the event's cell size and
//! offset) before calling in here; the draft itself never sees screen
//! coordinates or device state.
//!
//! ## Lifecycle
//!
//! 1. [`Draft::begin`] on pointer-down fixes the first anchor.
//! 2. [`Draft::update`] on pointer-move drags the second anchor;
//!    [`Draft::preview`] yields canonical vertices for rendering the
//!    rubber-band shape. Previews go through the *same* calculators as
//!    commit, so what the user sees while dragging is bit-for-bit the
//!    shape that will be created.
//! 3. [`Draft::commit`] on pointer-up creates the object through
//!    [`SceneStore::create`], or [`Draft::cancel`] (Escape, focus loss)
//!    discards the gesture. Cancel never touches the store: the draft
//!    holds no store reference, so an abandoned gesture is a structural
//!    no-op rather than a create-then-delete.
//!
//! ```rust
//! use tracery_coord::WorldPoint;
//! use tracery_draft::Draft;
//! use tracery_scene::{SceneStore, ShapeStyle};
//! use tracery_shape::ShapeKind;
//!
//! let mut store = SceneStore::new();
//! let mut draft = Draft::new();
//!
//! draft.begin(ShapeKind::Line, WorldPoint::new(0.0, 0.0));
//! draft.update(WorldPoint::new(30.0, 40.0));
//!
//! let id = draft.commit(&mut store, ShapeStyle::default()).unwrap();
//! assert_eq!(store.get(id).unwrap().kind(), ShapeKind::Line);
//! assert!(!draft.is_active());
//! ```
//!
//! Degenerate gestures (pointer-up on the first anchor) are rejected by
//! the store at commit; the draft resets to idle either way, so a failed
//! commit leaves no partial object behind.
//!
//! This crate is `no_std`.

#![no_std]

use tracery_coord::WorldPoint;
use tracery_scene::{DegenerateShape, SceneStore, ShapeId, ShapeStyle};
use tracery_shape::{ShapeKind, Vertices, from_anchor_points};

/// Why a [`Draft::commit`] produced no object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommitError {
    /// `commit` was called with no gesture in flight.
    NothingPending,
    /// The gesture spans zero extent and was rejected by the store.
    Degenerate(DegenerateShape),
}

impl core::fmt::Display for CommitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NothingPending => f.write_str("no drawing gesture is pending"),
            Self::Degenerate(e) => e.fmt(f),
        }
    }
}

impl core::error::Error for CommitError {}

impl From<DegenerateShape> for CommitError {
    fn from(e: DegenerateShape) -> Self {
        Self::Degenerate(e)
    }
}

/// A pending drawing gesture, or idle.
///
/// At most one gesture is pending at a time; beginning a new one replaces
/// any gesture already in flight (the editor's tools are modal).
#[derive(Clone, Copy, Debug, Default)]
pub struct Draft {
    pending: Option<Pending>,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    kind: ShapeKind,
    anchor: WorldPoint,
    current: WorldPoint,
}

impl Draft {
    /// Creates an idle draft.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Returns `true` while a gesture is pending.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a gesture of the given kind at the pointer-down position.
    ///
    /// The second anchor starts at the same position until the first
    /// [`Self::update`]. Any gesture already pending is replaced.
    pub fn begin(&mut self, kind: ShapeKind, anchor: WorldPoint) {
        self.pending = Some(Pending {
            kind,
            anchor,
            current: anchor,
        });
    }

    /// Moves the gesture's second anchor to the current pointer position.
    ///
    /// Returns `false` (and does nothing) when idle, so stray pointer
    /// moves outside a gesture are harmless.
    pub fn update(&mut self, current: WorldPoint) -> bool {
        match &mut self.pending {
            Some(pending) => {
                pending.current = current;
                true
            }
            None => false,
        }
    }

    /// The canonical vertices of the rubber-band shape, if a gesture is
    /// pending.
    ///
    /// Built by the same calculator the commit path uses. Zero-extent
    /// gestures (no movement yet) are representable here and simply render
    /// as zero-extent.
    #[must_use]
    pub fn preview(&self) -> Option<(ShapeKind, Vertices)> {
        self.pending.map(|p| {
            (p.kind, from_anchor_points(p.kind, p.anchor, p.current))
        })
    }

    /// Commits the pending gesture into the store and resets to idle.
    ///
    /// Single-anchor kinds (points) commit from their pointer-down
    /// position alone.
    ///
    /// # Errors
    ///
    /// [`CommitError::Degenerate`] if the gesture spans zero extent,
    /// [`CommitError::NothingPending`] if no gesture was in flight. The
    /// store is untouched in both cases and the draft is idle afterwards,
    /// so the interaction resets cleanly with no partial object.
    pub fn commit(
        &mut self,
        store: &mut SceneStore,
        style: ShapeStyle,
    ) -> Result<ShapeId, CommitError> {
        let Some(pending) = self.pending.take() else {
            return Err(CommitError::NothingPending);
        };
        store
            .create(pending.kind, pending.anchor, pending.current, style)
            .map_err(CommitError::from)
    }

    /// Discards the pending gesture, if any.
    ///
    /// Purely local state reset; the store never learns the gesture
    /// existed.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use tracery_coord::WorldPoint;
    use tracery_scene::{SceneStore, ShapeStyle};
    use tracery_shape::{ShapeKind, ShapeProperties, properties_from_vertices};

    use super::Draft;

    #[test]
    fn cancel_before_second_point_leaves_store_untouched() {
        let mut store = SceneStore::new();
        let mut draft = Draft::new();

        draft.begin(ShapeKind::Line, WorldPoint::new(5.0, 5.0));
        draft.cancel();

        assert!(!draft.is_active());
        assert_eq!(store.len(), 0);
        assert_eq!(store.revision(), 0);
        // A commit after cancel has nothing to commit.
        assert!(draft.commit(&mut store, ShapeStyle::default()).is_err());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn preview_matches_committed_geometry() {
        let mut store = SceneStore::new();
        let mut draft = Draft::new();

        draft.begin(ShapeKind::Circle, WorldPoint::new(0.0, 0.0));
        draft.update(WorldPoint::new(100.0, 0.0));

        let (kind, preview) = draft.preview().expect("gesture is pending");
        let id = draft
            .commit(&mut store, ShapeStyle::default())
            .expect("non-degenerate circle");

        let committed = store.get(id).expect("object was just created");
        assert_eq!(kind, committed.kind());
        assert_eq!(preview.as_slice(), committed.vertices());
    }

    #[test]
    fn zero_extent_preview_is_allowed_but_commit_is_rejected() {
        let mut store = SceneStore::new();
        let mut draft = Draft::new();

        draft.begin(ShapeKind::Rectangle, WorldPoint::new(5.0, 5.0));
        // No movement: the preview is a zero-extent rectangle.
        let (_, preview) = draft.preview().expect("gesture is pending");
        let props = properties_from_vertices(ShapeKind::Rectangle, &preview);
        assert!(!props.is_valid());

        assert!(draft.commit(&mut store, ShapeStyle::default()).is_err());
        assert!(store.is_empty());
        assert!(!draft.is_active());
    }

    #[test]
    fn point_commits_from_its_single_anchor() {
        let mut store = SceneStore::new();
        let mut draft = Draft::new();

        draft.begin(ShapeKind::Point, WorldPoint::new(7.0, 9.0));
        let id = draft
            .commit(&mut store, ShapeStyle::default())
            .expect("points are always valid");

        let Some(ShapeProperties::Point { position }) = store.properties(id) else {
            panic!("expected point properties");
        };
        assert_eq!(position, WorldPoint::new(7.0, 9.0));
    }

    #[test]
    fn begin_replaces_a_pending_gesture() {
        let mut draft = Draft::new();
        draft.begin(ShapeKind::Line, WorldPoint::ZERO);
        draft.begin(ShapeKind::Diamond, WorldPoint::new(10.0, 10.0));

        let (kind, _) = draft.preview().expect("gesture is pending");
        assert_eq!(kind, ShapeKind::Diamond);
    }
}
