// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless retained scene graph for node-link diagrams.
//!
//! The scene owns a flat arena of primitives (circles, rects, paths,
//! text and friends) addressed by generational [`NodeId`] handles, a
//! single [`Camera`], and an animation scheduler driven by explicit
//! [`Scene::tick`] calls. It is renderer-agnostic: geometry is measured
//! with [`kurbo`], nothing here rasterizes.
//!
//! Coordinate spaces, from innermost out:
//!
//! - **local**: a node's own attribute coordinates.
//! - **model** (a.k.a. world): after the full ancestor transform chain.
//!   Node bounds live here and are never affected by the camera.
//! - **canvas**: model projected through the camera onto the drawing
//!   surface, in CSS pixels.
//! - **client**: canvas offset by the surface's on-page origin.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod animate;
mod attrs;
mod bounds;
mod camera;
mod node;
mod scene;

pub use animate::{AnimateCfg, AnimationCallback, AnimationId, Easing};
pub use attrs::{number_or, AttrKey, AttrMap, AttrValue};
pub use camera::Camera;
pub use node::{NodeFlags, NodeId, PrimitiveKind};
pub use scene::Scene;
