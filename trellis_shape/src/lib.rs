// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform drawable adapters for node-link diagrams.
//!
//! One capability contract over heterogeneous primitives: [`Shape`]
//! wraps any single primitive kind, [`Combined`] wraps a line body plus
//! optional arrowhead decorations behind the same attribute surface.
//! The [`arrow`] and [`symbol`] modules hold the path templates both
//! adapters resolve descriptors against.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod arrow;
pub mod symbol;

mod combined;
mod shape;

pub use arrow::ArrowSpec;
pub use combined::{is_shared_attr, ArrowEnd, BodyKind, Combined, SHARED_ATTRS};
pub use shape::{ClipCfg, Shape, ShapeType, CLEAR_TO_EMPTY_KEYS};
