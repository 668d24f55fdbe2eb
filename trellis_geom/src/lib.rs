// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Geom: geometry primitives shared across the Trellis stack.
//!
//! This crate provides the small, stateless pieces the scene graph, shape
//! adapters, and view controller agree on:
//! - [`Matrix`]: the renderer-facing 3x3 affine matrix as a flat array of
//!   nine numbers, with [`decompose`]/[`compose`] and conversions to and
//!   from [`kurbo::Affine`].
//! - [`Bbox`]: an axis-aligned bounding box with merge and empty-set
//!   detection. A box with zero width or height is a valid "nothing here"
//!   sentinel that fit operations treat as a no-op.
//! - [`Padding`]: flexible 1/2/4-component padding input resolved to a
//!   fixed `[top, right, bottom, left]` quadruple.
//!
//! Everything here is a pure function of its inputs; no state is held.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_geom::{decompose, Matrix, UNIT_MATRIX};
//!
//! let translated: Matrix = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 30.0, -4.0, 1.0];
//! let d = decompose(&translated);
//! assert_eq!((d.translate_x, d.translate_y), (30.0, -4.0));
//! assert_eq!((d.scale_x, d.scale_y), (1.0, 1.0));
//! assert_eq!(d.rotation, 0.0);
//! # let _ = UNIT_MATRIX;
//! ```

mod bbox;
mod matrix;
mod padding;

pub use bbox::Bbox;
pub use matrix::{compose, decompose, from_affine, to_affine, transform_point, Decomposed, Matrix, UNIT_MATRIX};
pub use padding::Padding;
