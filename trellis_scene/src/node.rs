// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers, primitive kinds, and per-node state.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::attrs::AttrMap;

/// Identifier for a node in the scene.
///
/// A small, copyable handle consisting of a slot index and a generation
/// counter. On removal the slot is freed and any existing `NodeId`
/// pointing at it becomes stale; reuse of a freed slot increments the
/// generation, so stale handles never alias a different live node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and event capture.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (participates in rendering and bounds queries).
        const VISIBLE     = 0b0000_0001;
        /// Node captures pointer events (hit-test flag).
        const INTERACTIVE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::INTERACTIVE
    }
}

/// The kind of drawable a node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// A container with no geometry of its own.
    Group,
    /// A circle around `cx`/`cy` with radius `r`.
    Circle,
    /// An axis-aligned rectangle at `x`/`y` with `width`/`height`.
    Rect,
    /// An ellipse around `cx`/`cy` with radii `rx`/`ry`.
    Ellipse,
    /// A closed vertex list.
    Polygon,
    /// A bitmap at `x`/`y` with `width`/`height`.
    Image,
    /// A text run anchored at `x`/`y`.
    Text,
    /// SVG path data.
    Path,
    /// A straight segment from `x1`/`y1` to `x2`/`y2`.
    Line,
    /// An open vertex list.
    Polyline,
    /// An HTML overlay occupying `x`/`y`/`width`/`height`.
    Html,
}

/// Per-node retained state.
///
/// The local transform is stored decomposed (position, rotation in
/// degrees, scale, rotation origin) because that is how the primitive's
/// transform API is expressed; the adapter layer converts radians and
/// full matrices at its own boundary.
#[derive(Debug)]
pub(crate) struct Node {
    pub kind: PrimitiveKind,
    pub attrs: AttrMap,
    pub id: Option<String>,
    pub position: Vec2,
    pub rotation_deg: f64,
    pub scale: Vec2,
    pub pivot: Point,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub flags: NodeFlags,
    pub z_index: i32,
    pub clip: Option<NodeId>,
    pub animations: SmallVec<[u32; 2]>,
    pub animations_paused: bool,
}

impl Node {
    pub(crate) fn new(kind: PrimitiveKind, attrs: AttrMap) -> Self {
        Self {
            kind,
            attrs,
            id: None,
            position: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
            pivot: Point::ZERO,
            parent: None,
            children: SmallVec::new(),
            flags: NodeFlags::default(),
            z_index: 0,
            clip: None,
            animations: SmallVec::new(),
            animations_paused: false,
        }
    }
}
