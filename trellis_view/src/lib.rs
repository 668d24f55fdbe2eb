// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport control for a trellis canvas.
//!
//! The [`View`] controller drives the scene camera: fitting content to
//! the padded viewport, focusing points and items, bounded zooming,
//! and conversion between canvas, model, and client coordinates. An
//! [`ItemRegistry`] maps stable string ids onto scene groups so focus
//! operations can resolve nodes, edges, and combos by id.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod grid;
mod item;
mod view;

pub use grid::Grid;
pub use item::{Item, ItemKind, ItemRegistry};
pub use view::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, FitDirection, FitViewRules, RatioRule, View, ViewAnimate,
    ViewCfg, ViewError,
};
