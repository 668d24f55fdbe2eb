// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene: node storage, transforms, bounds, camera, and the
//! animation scheduler.

use hashbrown::HashMap;
use kurbo::{Affine, Point, Vec2};
use trellis_geom::{from_affine, Bbox, Matrix};

use crate::animate::{lerp, AnimTarget, AnimateCfg, Animation, AnimationCallback, AnimationId};
use crate::attrs::{AttrKey, AttrMap, AttrValue};
use crate::bounds::geometry_extent;
use crate::camera::Camera;
use crate::node::{Node, NodeFlags, NodeId, PrimitiveKind};

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A headless retained scene graph with a camera.
///
/// Nodes are addressed by generational [`NodeId`] handles; operations on
/// stale handles are silent no-ops (queries return `None`). The camera is
/// a single mutable resource owned by the scene: readers always observe
/// the current state, there is no caching layer in front of it.
#[derive(Debug)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
    width: f64,
    height: f64,
    pixel_ratio: f64,
    client_origin: Point,
    camera: Camera,
    animations: HashMap<u32, Animation>,
    next_animation: u32,
    camera_position_channel: Option<u32>,
    camera_zoom_channel: Option<u32>,
}

impl Scene {
    /// Creates a scene with the given canvas dimensions.
    ///
    /// The camera starts at identity: canvas and model coordinates
    /// coincide, so the initial camera position is the canvas center.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut scene = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId::new(0, 0),
            width,
            height,
            pixel_ratio: 1.0,
            client_origin: Point::ZERO,
            camera: Camera::new(Point::new(width / 2.0, height / 2.0)),
            animations: HashMap::new(),
            next_animation: 0,
            camera_position_channel: None,
            camera_zoom_channel: None,
        };
        scene.root = scene.alloc(Node::new(PrimitiveKind::Group, AttrMap::new()));
        scene
    }

    /// The root group every attached node descends from.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Canvas width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Device pixel ratio of the drawing surface.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Sets the device pixel ratio.
    pub fn set_pixel_ratio(&mut self, ratio: f64) {
        if ratio > 0.0 {
            self.pixel_ratio = ratio;
        }
    }

    /// On-page origin of the canvas element, for client-space conversion.
    #[must_use]
    pub fn client_origin(&self) -> Point {
        self.client_origin
    }

    /// Sets the on-page origin of the canvas element.
    pub fn set_client_origin(&mut self, origin: Point) {
        self.client_origin = origin;
    }

    /// Resizes the drawing surface. Camera state is left untouched.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // ---------------------------------------------------------------
    // Node management
    // ---------------------------------------------------------------

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }

    /// Whether `id` still refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Inserts a new node under `parent`.
    ///
    /// Falls back to the root when the parent handle is stale.
    pub fn insert(&mut self, parent: NodeId, kind: PrimitiveKind, attrs: AttrMap) -> NodeId {
        let id = self.alloc(Node::new(kind, attrs));
        let parent = if self.is_alive(parent) { parent } else { self.root };
        self.attach(parent, id);
        id
    }

    /// Inserts a detached node (no parent), e.g. a clip shape.
    pub fn insert_detached(&mut self, kind: PrimitiveKind, attrs: AttrMap) -> NodeId {
        self.alloc(Node::new(kind, attrs))
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Reparents `child` under `parent`, detaching it from any previous
    /// parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        self.detach(child);
        self.attach(parent, child);
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
    }

    /// Removes a node and its whole subtree, cancelling their animations.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        self.detach(id);
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = core::mem::take(&mut node.children);
        let animations = core::mem::take(&mut node.animations);
        for anim in animations {
            self.animations.remove(&anim);
        }
        for child in children {
            self.remove_subtree(child);
        }
        if let Some(slot) = self.slots.get_mut(id.idx()) {
            slot.node = None;
            self.free.push(id.0);
        }
    }

    /// The parent of a node, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// The children of a node, in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| &n.children)
    }

    /// The primitive kind of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<PrimitiveKind> {
        self.node(id).map(|n| n.kind)
    }

    /// The string identifier of a node, if set.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.id.as_deref())
    }

    /// Sets the string identifier of a node.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.id = Some(name.into());
        }
    }

    // ---------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------

    /// The attribute map of a node.
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> Option<&AttrMap> {
        self.node(id).map(|n| &n.attrs)
    }

    /// A single attribute value.
    #[must_use]
    pub fn attr(&self, id: NodeId, key: AttrKey) -> Option<&AttrValue> {
        self.node(id).and_then(|n| n.attrs.get(&key))
    }

    /// Writes a single attribute. Takes effect immediately; there is no
    /// batching or transactional grouping.
    pub fn set_attr(&mut self, id: NodeId, key: AttrKey, value: AttrValue) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(key, value);
        }
    }

    /// Removes a single attribute.
    pub fn remove_attr(&mut self, id: NodeId, key: AttrKey) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.remove(&key);
        }
    }

    // ---------------------------------------------------------------
    // Flags, z-order, clip
    // ---------------------------------------------------------------

    /// Whether a node is visible.
    #[must_use]
    pub fn visible(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|n| n.flags.contains(NodeFlags::VISIBLE))
    }

    /// Shows or hides a node (and thereby its subtree).
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.node_mut(id) {
            node.flags.set(NodeFlags::VISIBLE, visible);
        }
    }

    /// Whether a node captures pointer events.
    #[must_use]
    pub fn interactive(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|n| n.flags.contains(NodeFlags::INTERACTIVE))
    }

    /// Sets the hit-test capture flag.
    pub fn set_interactive(&mut self, id: NodeId, interactive: bool) {
        if let Some(node) = self.node_mut(id) {
            node.flags.set(NodeFlags::INTERACTIVE, interactive);
        }
    }

    /// Stacking order of a node among its siblings.
    #[must_use]
    pub fn z_index(&self, id: NodeId) -> i32 {
        self.node(id).map_or(0, |n| n.z_index)
    }

    /// Sets the stacking order.
    pub fn set_z_index(&mut self, id: NodeId, z_index: i32) {
        if let Some(node) = self.node_mut(id) {
            node.z_index = z_index;
        }
    }

    /// Installs a clip node. The clip is owned by the clipped node and is
    /// expected to be detached.
    pub fn set_clip(&mut self, id: NodeId, clip: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.clip = Some(clip);
        }
    }

    /// The installed clip node, if any.
    #[must_use]
    pub fn clip(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.clip)
    }

    // ---------------------------------------------------------------
    // Transforms
    // ---------------------------------------------------------------

    /// Sets the local translation of a node.
    pub fn set_local_position(&mut self, id: NodeId, x: f64, y: f64) {
        if let Some(node) = self.node_mut(id) {
            node.position = Vec2::new(x, y);
        }
    }

    /// The local translation of a node.
    #[must_use]
    pub fn local_position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position.to_point())
    }

    /// Sets the local scale of a node.
    pub fn set_local_scale(&mut self, id: NodeId, sx: f64, sy: f64) {
        if let Some(node) = self.node_mut(id) {
            node.scale = Vec2::new(sx, sy);
        }
    }

    /// Sets the local rotation. The primitive operates in degrees.
    pub fn set_local_euler_deg(&mut self, id: NodeId, degrees: f64) {
        if let Some(node) = self.node_mut(id) {
            node.rotation_deg = degrees;
        }
    }

    /// Adds to the local rotation, in degrees.
    pub fn rotate_local_deg(&mut self, id: NodeId, degrees: f64) {
        if let Some(node) = self.node_mut(id) {
            node.rotation_deg += degrees;
        }
    }

    /// Sets the rotation origin, in the node's local coordinates.
    pub fn set_rotation_origin(&mut self, id: NodeId, x: f64, y: f64) {
        if let Some(node) = self.node_mut(id) {
            node.pivot = Point::new(x, y);
        }
    }

    /// Resets the local transform to identity.
    pub fn reset_transform(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.position = Vec2::ZERO;
            node.rotation_deg = 0.0;
            node.scale = Vec2::new(1.0, 1.0);
            node.pivot = Point::ZERO;
        }
    }

    /// The local transform of a node as a [`kurbo::Affine`].
    #[must_use]
    pub fn local_affine(&self, id: NodeId) -> Affine {
        self.node(id).map_or(Affine::IDENTITY, |node| {
            let rotation = node.rotation_deg.to_radians();
            Affine::translate(node.position)
                * Affine::translate(node.pivot.to_vec2())
                * Affine::rotate(rotation)
                * Affine::translate(-node.pivot.to_vec2())
                * Affine::scale_non_uniform(node.scale.x, node.scale.y)
        })
    }

    /// The local transform as the renderer-facing flat matrix.
    ///
    /// The result is a snapshot copy; mutating it does not affect the
    /// node.
    #[must_use]
    pub fn local_matrix(&self, id: NodeId) -> Matrix {
        from_affine(self.local_affine(id))
    }

    /// The full transform chain of a node, ancestors included. The
    /// camera never participates.
    #[must_use]
    pub fn world_affine(&self, id: NodeId) -> Affine {
        let mut affine = self.local_affine(id);
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            affine = self.local_affine(ancestor) * affine;
            current = self.parent(ancestor);
        }
        affine
    }

    // ---------------------------------------------------------------
    // Bounds
    // ---------------------------------------------------------------

    /// The bounds of a node and its visible descendants, in model space,
    /// after the full ancestor transform chain.
    ///
    /// Invisible subtrees contribute nothing. Returns [`Bbox::NOTHING`]
    /// for empty content; check [`Bbox::is_empty`] before fitting.
    #[must_use]
    pub fn world_bounds(&self, id: NodeId) -> Bbox {
        let mut parent_affine = Affine::IDENTITY;
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            parent_affine = self.local_affine(ancestor) * parent_affine;
            current = self.parent(ancestor);
        }
        self.bounds_under(id, parent_affine)
    }

    fn bounds_under(&self, id: NodeId, parent_affine: Affine) -> Bbox {
        let Some(node) = self.node(id) else {
            return Bbox::NOTHING;
        };
        if !node.flags.contains(NodeFlags::VISIBLE) {
            return Bbox::NOTHING;
        }
        let affine = parent_affine * self.local_affine(id);
        let mut bounds = geometry_extent(node.kind, &node.attrs)
            .map_or(Bbox::NOTHING, |extent| extent.transform(affine));
        for &child in &node.children {
            bounds = bounds.union(self.bounds_under(child, affine));
        }
        bounds
    }

    // ---------------------------------------------------------------
    // Cloning
    // ---------------------------------------------------------------

    /// Deep-clones a subtree into a detached copy.
    ///
    /// Cloned nodes carry a `cloned-` prefixed string identifier so they
    /// are distinguishable from their originals.
    pub fn clone_node(&mut self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        Some(self.clone_subtree(id))
    }

    fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let (mut clone, children) = {
            // Liveness checked by the caller.
            let node = self.node(id).map(|n| {
                let mut copy = Node::new(n.kind, n.attrs.clone());
                copy.id = n.id.as_ref().map(|name| format!("cloned-{name}"));
                copy.position = n.position;
                copy.rotation_deg = n.rotation_deg;
                copy.scale = n.scale;
                copy.pivot = n.pivot;
                copy.flags = n.flags;
                copy.z_index = n.z_index;
                (copy, n.children.clone())
            });
            match node {
                Some((copy, children)) => (copy, children),
                None => (Node::new(PrimitiveKind::Group, AttrMap::new()), Default::default()),
            }
        };
        clone.children.clear();
        let clone_id = self.alloc(clone);
        for child in children {
            let cloned_child = self.clone_subtree(child);
            self.attach(clone_id, cloned_child);
        }
        clone_id
    }

    // ---------------------------------------------------------------
    // Camera and coordinate conversion
    // ---------------------------------------------------------------

    /// Read access to the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera, for explicit resets.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn half_extent(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts a canvas pixel coordinate into model space.
    #[must_use]
    pub fn point_by_canvas(&self, canvas: Point) -> Point {
        let offset = (canvas.to_vec2() - self.half_extent()) / self.camera.zoom();
        (self.camera.position().to_vec2() + offset).to_point()
    }

    /// Converts a model-space point into canvas pixels.
    #[must_use]
    pub fn canvas_by_point(&self, point: Point) -> Point {
        let offset = (point - self.camera.position()) * self.camera.zoom();
        (self.half_extent() + offset).to_point()
    }

    /// Converts a page/client coordinate into model space.
    #[must_use]
    pub fn point_by_client(&self, client: Point) -> Point {
        self.point_by_canvas(client - self.client_origin.to_vec2())
    }

    /// Converts a model-space point into page/client space.
    #[must_use]
    pub fn client_by_point(&self, point: Point) -> Point {
        (self.canvas_by_point(point).to_vec2() + self.client_origin.to_vec2()).to_point()
    }

    /// Moves the rendered content by a model-space delta.
    ///
    /// Camera movement, not content movement: node bounds are unchanged.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let position = self.camera.position() - Vec2::new(dx, dy);
        self.camera.set_position(position);
    }

    /// Sets the zoom so that `anchor` (a model-space point) stays fixed
    /// on screen.
    pub fn set_zoom_about(&mut self, zoom: f64, anchor: Point) {
        if zoom <= 0.0 {
            return;
        }
        let anchor_canvas = self.canvas_by_point(anchor);
        self.camera.set_zoom(zoom);
        let position = anchor - (anchor_canvas.to_vec2() - self.half_extent()) / zoom;
        self.camera.set_position(position);
    }

    // ---------------------------------------------------------------
    // Animation
    // ---------------------------------------------------------------

    fn schedule(&mut self, animation: Animation) -> AnimationId {
        let id = self.next_animation;
        self.next_animation += 1;
        self.animations.insert(id, animation);
        AnimationId(id)
    }

    /// Animates the camera position to `to`.
    ///
    /// The camera position channel is cancel-and-replace: an in-flight
    /// position animation is dropped, without running its completion
    /// chain, before the new one is scheduled.
    pub fn animate_camera_position(
        &mut self,
        to: Point,
        cfg: AnimateCfg,
        on_finish: Option<AnimationCallback>,
    ) -> AnimationId {
        if let Some(prior) = self.camera_position_channel.take() {
            self.animations.remove(&prior);
        }
        let from = self.camera.position();
        let id = self.schedule(Animation::new(
            AnimTarget::CameraPosition { from, to },
            cfg,
            on_finish,
        ));
        self.camera_position_channel = Some(id.0);
        id
    }

    /// Animates the camera zoom to `to`, keeping `anchor` fixed on
    /// screen. Same cancel-and-replace policy as the position channel.
    pub fn animate_camera_zoom(
        &mut self,
        to: f64,
        anchor: Point,
        cfg: AnimateCfg,
        on_finish: Option<AnimationCallback>,
    ) -> AnimationId {
        if let Some(prior) = self.camera_zoom_channel.take() {
            self.animations.remove(&prior);
        }
        let from = self.camera.zoom();
        let id = self.schedule(Animation::new(
            AnimTarget::CameraZoom { from, to, anchor },
            cfg,
            on_finish,
        ));
        self.camera_zoom_channel = Some(id.0);
        id
    }

    /// Animates numeric attributes of a node toward target values.
    ///
    /// Missing or non-numeric current values start from `0`.
    pub fn animate_node_attrs(
        &mut self,
        node: NodeId,
        targets: Vec<(AttrKey, f64)>,
        cfg: AnimateCfg,
        on_finish: Option<AnimationCallback>,
    ) -> Option<AnimationId> {
        if !self.is_alive(node) || targets.is_empty() {
            return None;
        }
        let tracks = targets
            .into_iter()
            .map(|(key, to)| {
                let from = self
                    .attr(node, key)
                    .and_then(AttrValue::as_number)
                    .unwrap_or(0.0);
                (key, from, to)
            })
            .collect();
        let id = self.schedule(Animation::new(
            AnimTarget::NodeAttrs { node, tracks },
            cfg,
            on_finish,
        ));
        if let Some(n) = self.node_mut(node) {
            n.animations.push(id.0);
        }
        Some(id)
    }

    fn apply_animation(&mut self, target: &AnimTarget, t: f64) {
        match target {
            AnimTarget::CameraPosition { from, to } => {
                let position = Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t));
                self.camera.set_position(position);
            }
            AnimTarget::CameraZoom { from, to, anchor } => {
                self.set_zoom_about(lerp(*from, *to, t), *anchor);
            }
            AnimTarget::NodeAttrs { node, tracks } => {
                for &(key, from, to) in tracks {
                    self.set_attr(*node, key, AttrValue::Number(lerp(from, to, t)));
                }
            }
        }
    }

    fn finish_animation(&mut self, id: u32, animation: &Animation) {
        if self.camera_position_channel == Some(id) {
            self.camera_position_channel = None;
        }
        if self.camera_zoom_channel == Some(id) {
            self.camera_zoom_channel = None;
        }
        if let AnimTarget::NodeAttrs { node, .. } = animation.target
            && let Some(n) = self.node_mut(node)
        {
            n.animations.retain(|a| *a != id);
        }
    }

    /// Advances all running animations by `dt_ms` milliseconds.
    ///
    /// Finished animations land exactly on their end state; completion
    /// callbacks run after every animation has been advanced, in
    /// scheduling order, and may schedule further animations.
    pub fn tick(&mut self, dt_ms: f64) {
        let mut ids: Vec<u32> = self.animations.keys().copied().collect();
        ids.sort_unstable();
        let mut callbacks: Vec<AnimationCallback> = Vec::new();
        for id in ids {
            let Some(mut animation) = self.animations.remove(&id) else {
                continue;
            };
            if animation.paused {
                self.animations.insert(id, animation);
                continue;
            }
            animation.elapsed += dt_ms;
            if animation.finished() {
                self.apply_animation(&animation.target, 1.0);
                self.finish_animation(id, &animation);
                if let Some(callback) = animation.on_finish.take() {
                    callbacks.push(callback);
                }
            } else {
                self.apply_animation(&animation.target, animation.progress());
                self.animations.insert(id, animation);
            }
        }
        for callback in callbacks {
            callback(self);
        }
    }

    /// Suspends the node's active animations and flags the paused state.
    pub fn pause_node_animations(&mut self, node: NodeId) {
        let ids = self.node(node).map(|n| n.animations.clone()).unwrap_or_default();
        for id in &ids {
            if let Some(animation) = self.animations.get_mut(id) {
                animation.paused = true;
            }
        }
        if let Some(n) = self.node_mut(node) {
            n.animations_paused = true;
        }
    }

    /// Resumes the node's animations and clears the paused flag.
    pub fn resume_node_animations(&mut self, node: NodeId) {
        let ids = self.node(node).map(|n| n.animations.clone()).unwrap_or_default();
        for id in &ids {
            if let Some(animation) = self.animations.get_mut(id) {
                animation.paused = false;
            }
        }
        if let Some(n) = self.node_mut(node) {
            n.animations_paused = false;
        }
    }

    /// Forces the node's animations to their final frame, then cancels
    /// them.
    ///
    /// After this returns, no animation is left attached to the node and
    /// the visual state sits exactly on each animation's end state.
    /// Completion callbacks run before returning.
    pub fn stop_node_animations(&mut self, node: NodeId) {
        let ids = self.node(node).map(|n| n.animations.clone()).unwrap_or_default();
        let mut callbacks: Vec<AnimationCallback> = Vec::new();
        for id in ids {
            if let Some(mut animation) = self.animations.remove(&id) {
                self.apply_animation(&animation.target, 1.0);
                if let Some(callback) = animation.on_finish.take() {
                    callbacks.push(callback);
                }
            }
        }
        if let Some(n) = self.node_mut(node) {
            n.animations.clear();
            n.animations_paused = false;
        }
        for callback in callbacks {
            callback(self);
        }
    }

    /// Whether the node currently has paused animations.
    #[must_use]
    pub fn node_animations_paused(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.animations_paused)
    }

    /// Number of active animations attached to the node.
    #[must_use]
    pub fn node_animation_count(&self, node: NodeId) -> usize {
        self.node(node).map_or(0, |n| n.animations.len())
    }

    /// Number of scheduled animations across the whole scene.
    #[must_use]
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}
