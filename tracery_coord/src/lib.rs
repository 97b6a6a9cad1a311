// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Coord: tagged coordinate spaces and grid-aligned conversions.
//!
//! An editor surface deals with three distinct coordinate spaces:
//!
//! - **World**: the authoritative position of geometry. Unbounded and
//!   continuous; everything a scene stores is expressed here.
//! - **Cell**: a world position bucketed into the integer grid cell that
//!   contains it. Used for snapping and for the background mesh.
//! - **Screen**: a pixel position inside the viewport, origin at the
//!   viewport's top-left corner, y growing downward.
//!
//! The spaces are deliberately *not* interchangeable. Each has its own
//! point type ([`WorldPoint`], [`CellPoint`], [`ScreenPoint`]) so that a
//! screen position can never be handed to scene code without passing
//! through an explicit conversion.
//!
//! Conversions are pure functions on [`GridMapping`], a small `Copy` value
//! holding the current cell size and world offset. Callers own that pair
//! (it changes when the user pans or the grid is reconfigured) and supply
//! it at every conversion; nothing in this crate holds viewport state.
//!
//! ```rust
//! use tracery_coord::{GridMapping, ScreenPoint, WorldPoint};
//!
//! let mapping = GridMapping::new(10.0, kurbo::Vec2::new(5.0, 5.0));
//!
//! // A pointer event lands at pixel (127, 43).
//! let world = mapping.screen_to_world(ScreenPoint::new(127.0, 43.0));
//! assert_eq!(world, WorldPoint::new(17.0, 9.0));
//!
//! // Round-tripping a cell-aligned screen point is exact.
//! let screen = mapping.world_to_screen(world);
//! assert_eq!(screen, ScreenPoint::new(120.0, 40.0));
//! ```
//!
//! ## Lossiness
//!
//! `screen_to_world` floors to the containing grid cell. That is the
//! intended snapping behavior, not truncation error: the editor places
//! geometry on cell boundaries. As a consequence world→screen→world is the
//! identity, while screen→world→screen lands on the cell corner at or
//! below the input pixel.
//!
//! This crate is `no_std`. Either the `std` (default) or `libm` feature
//! must be enabled for floating-point rounding.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tracery_coord requires either the `std` or `libm` feature");

mod mapping;
mod math;
mod spaces;

pub use mapping::GridMapping;
pub use spaces::{CellPoint, ScreenPoint, WorldPoint};
