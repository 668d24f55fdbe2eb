// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One capability contract over every primitive kind.
//!
//! [`Shape`] is a thin handle pairing a scene node with a
//! [`ShapeType`] tag. All primitive kinds share one implementation of
//! the transform, bbox, clip, attribute, and animation logic; per-kind
//! differences are confined to construction-time normalization and the
//! `x`/`y` attribute rerouting.

use kurbo::Point;
use tracing::warn;
use trellis_geom::{decompose, Bbox, Matrix};
use trellis_scene::{
    number_or, AnimateCfg, AnimationCallback, AnimationId, AttrKey, AttrMap, AttrValue, NodeId,
    PrimitiveKind, Scene,
};

use crate::symbol::symbol_path;

/// Attribute keys that clear to an empty value instead of being
/// removed. The renderer does not treat a missing key as "unset" for
/// these, so leaving the old value in place would render stale state.
pub const CLEAR_TO_EMPTY_KEYS: &[AttrKey] = &[AttrKey::ShadowColor];

/// The primitive kind a [`Shape`] wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Circle centered on `cx`/`cy`.
    Circle,
    /// Axis-aligned rectangle.
    Rect,
    /// Ellipse centered on `cx`/`cy`.
    Ellipse,
    /// Closed polygon from `points`.
    Polygon,
    /// Bitmap image.
    Image,
    /// Text run.
    Text,
    /// SVG path.
    Path,
    /// Straight segment from `x1`/`y1` to `x2`/`y2`.
    Line,
    /// Open polyline from `points`.
    Polyline,
    /// Symbol marker; resolved to a path at construction.
    Marker,
    /// HTML overlay; participates in layout and bounds only.
    Html,
}

impl ShapeType {
    fn primitive(self) -> PrimitiveKind {
        match self {
            Self::Circle => PrimitiveKind::Circle,
            Self::Rect => PrimitiveKind::Rect,
            Self::Ellipse => PrimitiveKind::Ellipse,
            Self::Polygon => PrimitiveKind::Polygon,
            Self::Image => PrimitiveKind::Image,
            Self::Text => PrimitiveKind::Text,
            Self::Path | Self::Marker => PrimitiveKind::Path,
            Self::Line => PrimitiveKind::Line,
            Self::Polyline => PrimitiveKind::Polyline,
            Self::Html => PrimitiveKind::Html,
        }
    }

    fn centered(self) -> bool {
        matches!(self, Self::Circle | Self::Ellipse)
    }
}

/// A clip descriptor: the clip drawable's kind and attributes, in the
/// clipped shape's coordinate system.
#[derive(Clone, Debug)]
pub struct ClipCfg {
    /// Primitive kind of the clip drawable.
    pub shape_type: ShapeType,
    /// Attributes of the clip drawable.
    pub attrs: AttrMap,
}

/// Handle to one wrapped primitive drawable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    node: NodeId,
    shape_type: ShapeType,
}

fn text_defaults() -> [(AttrKey, AttrValue); 8] {
    [
        (AttrKey::FontSize, AttrValue::Number(16.0)),
        (AttrKey::FontFamily, AttrValue::Text("sans-serif".into())),
        (AttrKey::FontWeight, AttrValue::Text("normal".into())),
        (AttrKey::FontVariant, AttrValue::Text("normal".into())),
        (AttrKey::FontStyle, AttrValue::Text("normal".into())),
        (AttrKey::TextAlign, AttrValue::Text("start".into())),
        (AttrKey::TextBaseline, AttrValue::Text("alphabetic".into())),
        (AttrKey::LineWidth, AttrValue::Number(0.0)),
    ]
}

fn coerce_text(value: AttrValue) -> AttrValue {
    match value {
        AttrValue::Text(_) => value,
        AttrValue::Number(n) => AttrValue::Text(format!("{n}")),
        AttrValue::Bool(b) => AttrValue::Text(format!("{b}")),
        AttrValue::Points(_) => AttrValue::Text(String::new()),
    }
}

/// Normalizes construction attributes in place. Returns `false` when
/// the shape cannot be built (invalid marker symbol).
fn normalize(shape_type: ShapeType, attrs: &mut AttrMap) -> bool {
    attrs.entry(AttrKey::X).or_insert(AttrValue::Number(0.0));
    attrs.entry(AttrKey::Y).or_insert(AttrValue::Number(0.0));
    match shape_type {
        ShapeType::Circle | ShapeType::Ellipse => {
            let x = number_or(attrs, AttrKey::X, 0.0);
            let y = number_or(attrs, AttrKey::Y, 0.0);
            attrs.insert(AttrKey::Cx, AttrValue::Number(x));
            attrs.insert(AttrKey::Cy, AttrValue::Number(y));
        }
        ShapeType::Text => {
            // Metric-bearing defaults so bbox queries work before any
            // style has been applied.
            for (key, value) in text_defaults() {
                attrs.entry(key).or_insert(value);
            }
            if let Some(text) = attrs.remove(&AttrKey::Text) {
                attrs.insert(AttrKey::Text, coerce_text(text));
            }
        }
        ShapeType::Marker => {
            let x = number_or(attrs, AttrKey::X, 0.0);
            let y = number_or(attrs, AttrKey::Y, 0.0);
            let r = number_or(attrs, AttrKey::R, 5.0);
            let symbol = attrs
                .get(&AttrKey::Symbol)
                .and_then(AttrValue::as_text)
                .map(str::to_owned);
            let Some(path) = symbol.as_deref().and_then(|s| symbol_path(s, x, y, r)) else {
                warn!(symbol = symbol.as_deref(), "invalid marker symbol");
                return false;
            };
            attrs.insert(AttrKey::Path, AttrValue::Text(path));
            attrs.remove(&AttrKey::X);
            attrs.remove(&AttrKey::Y);
        }
        _ => {}
    }
    true
}

impl Shape {
    /// Builds a shape under `parent`.
    ///
    /// Returns `None` when construction is refused (a marker with an
    /// unknown symbol), after logging a warning.
    pub fn create(
        scene: &mut Scene,
        parent: NodeId,
        shape_type: ShapeType,
        attrs: AttrMap,
    ) -> Option<Self> {
        let shape = Self::create_detached(scene, shape_type, attrs)?;
        scene.append_child(parent, shape.node);
        Some(shape)
    }

    /// Builds a shape with no parent, e.g. for use as a clip drawable.
    pub fn create_detached(
        scene: &mut Scene,
        shape_type: ShapeType,
        mut attrs: AttrMap,
    ) -> Option<Self> {
        if !normalize(shape_type, &mut attrs) {
            return None;
        }
        let rotate = attrs.get(&AttrKey::Rotate).and_then(AttrValue::as_number);
        let draggable = attrs
            .get(&AttrKey::Draggable)
            .and_then(AttrValue::as_bool)
            .unwrap_or(true);
        let droppable = attrs
            .get(&AttrKey::Droppable)
            .and_then(AttrValue::as_bool)
            .unwrap_or(true);
        attrs.insert(AttrKey::Draggable, AttrValue::Bool(draggable));
        attrs.insert(AttrKey::Droppable, AttrValue::Bool(droppable));
        let node = scene.insert_detached(shape_type.primitive(), attrs);
        let shape = Self { node, shape_type };
        if let Some(radians) = rotate {
            shape.rotate_at_start(scene, radians);
        }
        Some(shape)
    }

    /// Wraps an existing node. The caller asserts the tag matches.
    #[must_use]
    pub fn from_parts(node: NodeId, shape_type: ShapeType) -> Self {
        Self { node, shape_type }
    }

    /// The underlying scene node.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The primitive kind tag.
    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    // -----------------------------------------------------------
    // Transform
    // -----------------------------------------------------------

    /// The local transform as a flat matrix.
    ///
    /// Always a snapshot copy, never a live view of scene state.
    #[must_use]
    pub fn matrix(&self, scene: &Scene) -> Matrix {
        scene.local_matrix(self.node)
    }

    /// Replaces the local transform by decomposing `matrix`.
    ///
    /// Orientation and scale are applied before position so the result
    /// reproduces pure decomposition semantics rather than rotating
    /// around an already-translated origin.
    pub fn set_matrix(&self, scene: &mut Scene, matrix: &Matrix) {
        let d = decompose(matrix);
        scene.set_rotation_origin(self.node, 0.0, 0.0);
        scene.set_local_euler_deg(self.node, d.rotation.to_degrees());
        scene.set_local_scale(self.node, d.scale_x, d.scale_y);
        scene.set_local_position(self.node, d.translate_x, d.translate_y);
    }

    /// Resets the local transform to identity.
    pub fn reset_matrix(&self, scene: &mut Scene) {
        scene.reset_transform(self.node);
    }

    /// Rotates about the shape's local origin.
    ///
    /// Takes radians; the underlying primitive operates in degrees and
    /// this is the single conversion point.
    pub fn rotate_at_start(&self, scene: &mut Scene, radians: f64) {
        scene.set_rotation_origin(self.node, 0.0, 0.0);
        scene.rotate_local_deg(self.node, radians.to_degrees());
    }

    /// Rotates about a local-space point. Radians, as above.
    pub fn rotate_at_point(&self, scene: &mut Scene, x: f64, y: f64, radians: f64) {
        scene.set_rotation_origin(self.node, x, y);
        scene.rotate_local_deg(self.node, radians.to_degrees());
    }

    // -----------------------------------------------------------
    // Bounds
    // -----------------------------------------------------------

    /// The shape's own bounding box, independent of any transform
    /// applied to it or its ancestors.
    ///
    /// Measured by cloning the shape and resetting the clone's
    /// transform to identity; only the positional anchor survives,
    /// because it lives in the attributes rather than the transform.
    /// Degenerate shapes yield an empty box.
    pub fn bbox(&self, scene: &mut Scene) -> Bbox {
        let Some(clone) = scene.clone_node(self.node) else {
            return Bbox::NOTHING;
        };
        scene.reset_transform(clone);
        let bounds = scene.world_bounds(clone);
        scene.remove(clone);
        bounds
    }

    /// The bounding box in the full ancestor-transformed space. The
    /// camera never participates.
    #[must_use]
    pub fn canvas_bbox(&self, scene: &Scene) -> Bbox {
        scene.world_bounds(self.node)
    }

    // -----------------------------------------------------------
    // Clip
    // -----------------------------------------------------------

    /// Builds a clip drawable from `cfg` and installs it.
    ///
    /// The clip shape is detached; its `x`/`y` are relative to the
    /// clipped shape's coordinate system. Returns the clip handle, or
    /// `None` when the descriptor cannot be built.
    pub fn set_clip(&self, scene: &mut Scene, cfg: ClipCfg) -> Option<Self> {
        let clip = Self::create_detached(scene, cfg.shape_type, cfg.attrs)?;
        scene.set_clip(self.node, clip.node);
        Some(clip)
    }

    /// The installed clip drawable, if any.
    #[must_use]
    pub fn clip(&self, scene: &Scene) -> Option<NodeId> {
        scene.clip(self.node)
    }

    // -----------------------------------------------------------
    // Clone
    // -----------------------------------------------------------

    /// Deep-clones the shape into a detached copy with a `cloned-`
    /// prefixed identifier.
    pub fn clone_shape(&self, scene: &mut Scene) -> Option<Self> {
        let node = scene.clone_node(self.node)?;
        Some(Self {
            node,
            shape_type: self.shape_type,
        })
    }

    // -----------------------------------------------------------
    // Attributes
    // -----------------------------------------------------------

    /// The full attribute map.
    #[must_use]
    pub fn attrs(&self, scene: &Scene) -> AttrMap {
        scene.attrs(self.node).cloned().unwrap_or_default()
    }

    /// Reads one attribute.
    ///
    /// `x`/`y` reroute to `cx`/`cy` for centered kinds; the transform
    /// pseudo-key is answered by [`Shape::matrix`], not here.
    #[must_use]
    pub fn attr(&self, scene: &Scene, key: AttrKey) -> Option<AttrValue> {
        let key = match key {
            AttrKey::X if self.shape_type.centered() => AttrKey::Cx,
            AttrKey::Y if self.shape_type.centered() => AttrKey::Cy,
            AttrKey::Matrix => return None,
            other => other,
        };
        scene.attr(self.node, key).cloned()
    }

    /// Writes one attribute.
    pub fn set_attr(&self, scene: &mut Scene, key: AttrKey, value: AttrValue) {
        let mut batch = AttrMap::new();
        batch.insert(key, value);
        self.set_attrs(scene, batch);
    }

    /// Writes a batch of attributes.
    ///
    /// `text` values are coerced to strings; centered kinds re-derive
    /// `cx`/`cy` from `x`/`y` after the batch lands. Writes take effect
    /// immediately, there is no transactional grouping.
    pub fn set_attrs(&self, scene: &mut Scene, updates: AttrMap) {
        for (key, value) in updates {
            let value = if key == AttrKey::Text {
                coerce_text(value)
            } else {
                value
            };
            scene.set_attr(self.node, key, value);
        }
        if self.shape_type.centered() {
            let x = scene.attr(self.node, AttrKey::X).and_then(AttrValue::as_number);
            let y = scene.attr(self.node, AttrKey::Y).and_then(AttrValue::as_number);
            if let Some(x) = x {
                scene.set_attr(self.node, AttrKey::Cx, AttrValue::Number(x));
            }
            if let Some(y) = y {
                scene.set_attr(self.node, AttrKey::Cy, AttrValue::Number(y));
            }
        }
    }

    /// Unsets an attribute.
    ///
    /// Keys in [`CLEAR_TO_EMPTY_KEYS`] are written as an empty value
    /// instead of removed, so the renderer never shows stale state.
    pub fn clear_attr(&self, scene: &mut Scene, key: AttrKey) {
        if CLEAR_TO_EMPTY_KEYS.contains(&key) {
            scene.set_attr(self.node, key, AttrValue::Text(String::new()));
        } else {
            scene.remove_attr(self.node, key);
        }
    }

    // -----------------------------------------------------------
    // Visibility, stacking, hit testing
    // -----------------------------------------------------------

    /// Shows the shape.
    pub fn show(&self, scene: &mut Scene) {
        scene.set_visible(self.node, true);
    }

    /// Hides the shape and its subtree.
    pub fn hide(&self, scene: &mut Scene) {
        scene.set_visible(self.node, false);
    }

    /// Whether the shape is visible.
    #[must_use]
    pub fn visible(&self, scene: &Scene) -> bool {
        scene.visible(self.node)
    }

    /// Sets the stacking order.
    pub fn set_z_index(&self, scene: &mut Scene, z_index: i32) {
        scene.set_z_index(self.node, z_index);
    }

    /// The stacking order.
    #[must_use]
    pub fn z_index(&self, scene: &Scene) -> i32 {
        scene.z_index(self.node)
    }

    /// Sets whether the shape captures pointer events.
    pub fn set_capture(&self, scene: &mut Scene, capture: bool) {
        scene.set_interactive(self.node, capture);
    }

    /// Whether the shape captures pointer events.
    #[must_use]
    pub fn capture(&self, scene: &Scene) -> bool {
        scene.interactive(self.node)
    }

    // -----------------------------------------------------------
    // Animation
    // -----------------------------------------------------------

    /// Animates numeric attributes toward target values.
    pub fn animate(
        &self,
        scene: &mut Scene,
        targets: Vec<(AttrKey, f64)>,
        cfg: AnimateCfg,
        on_finish: Option<AnimationCallback>,
    ) -> Option<AnimationId> {
        scene.animate_node_attrs(self.node, targets, cfg, on_finish)
    }

    /// Suspends the shape's active animations.
    pub fn pause_animate(&self, scene: &mut Scene) {
        scene.pause_node_animations(self.node);
    }

    /// Resumes the shape's animations.
    pub fn resume_animate(&self, scene: &mut Scene) {
        scene.resume_node_animations(self.node);
    }

    /// Forces every active animation to its final frame, then cancels
    /// them all. Nothing is left running when this returns.
    pub fn stop_animate(&self, scene: &mut Scene) {
        scene.stop_node_animations(self.node);
    }

    /// Convenience: the shape's anchor position from its current
    /// transform.
    #[must_use]
    pub fn translation(&self, scene: &Scene) -> Option<Point> {
        scene.local_position(self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_geom::{compose, Decomposed, UNIT_MATRIX};

    fn scene() -> Scene {
        Scene::new(500.0, 500.0)
    }

    fn circle_attrs(x: f64, y: f64, r: f64) -> AttrMap {
        let mut attrs = AttrMap::new();
        attrs.insert(AttrKey::X, AttrValue::Number(x));
        attrs.insert(AttrKey::Y, AttrValue::Number(y));
        attrs.insert(AttrKey::R, AttrValue::Number(r));
        attrs
    }

    #[test]
    fn circle_reroutes_x_to_cx() {
        let mut scene = scene();
        let root = scene.root();
        let shape =
            Shape::create(&mut scene, root, ShapeType::Circle, circle_attrs(30.0, 40.0, 5.0))
                .unwrap();
        assert_eq!(shape.attr(&scene, AttrKey::X), Some(AttrValue::Number(30.0)));
        shape.set_attr(&mut scene, AttrKey::X, AttrValue::Number(99.0));
        assert_eq!(shape.attr(&scene, AttrKey::Cx), Some(AttrValue::Number(99.0)));
    }

    #[test]
    fn matrix_is_a_snapshot_and_round_trips() {
        let mut scene = scene();
        let root = scene.root();
        let shape = Shape::create(&mut scene, root, ShapeType::Rect, AttrMap::new()).unwrap();
        assert_eq!(shape.matrix(&scene), UNIT_MATRIX);
        let target = compose(&Decomposed {
            translate_x: 10.0,
            translate_y: 20.0,
            scale_x: 2.0,
            scale_y: 0.5,
            rotation: core::f64::consts::FRAC_PI_4,
        });
        shape.set_matrix(&mut scene, &target);
        let read = shape.matrix(&scene);
        for (a, b) in read.iter().zip(target.iter()) {
            assert!((a - b).abs() < 1e-9, "{read:?} != {target:?}");
        }
    }

    #[test]
    fn local_bbox_discounts_applied_transforms() {
        let mut scene = scene();
        let root = scene.root();
        let mut attrs = AttrMap::new();
        attrs.insert(AttrKey::X, AttrValue::Number(10.0));
        attrs.insert(AttrKey::Y, AttrValue::Number(20.0));
        attrs.insert(AttrKey::Width, AttrValue::Number(30.0));
        attrs.insert(AttrKey::Height, AttrValue::Number(40.0));
        let shape = Shape::create(&mut scene, root, ShapeType::Rect, attrs).unwrap();
        scene.set_local_position(shape.node(), 100.0, 100.0);
        scene.set_local_scale(shape.node(), 3.0, 3.0);
        let local = shape.bbox(&mut scene);
        assert_eq!((local.min_x, local.min_y), (10.0, 20.0));
        assert_eq!((local.width(), local.height()), (30.0, 40.0));
        let canvas = shape.canvas_bbox(&scene);
        assert_eq!((canvas.width(), canvas.height()), (90.0, 120.0));
    }

    #[test]
    fn invalid_marker_symbol_refuses_construction() {
        let mut scene = scene();
        let root = scene.root();
        let mut attrs = circle_attrs(0.0, 0.0, 5.0);
        attrs.insert(AttrKey::Symbol, AttrValue::Text("nonagon".into()));
        assert!(Shape::create(&mut scene, root, ShapeType::Marker, attrs).is_none());
    }

    #[test]
    fn marker_symbol_becomes_a_path() {
        let mut scene = scene();
        let root = scene.root();
        let mut attrs = circle_attrs(10.0, 10.0, 5.0);
        attrs.insert(AttrKey::Symbol, AttrValue::Text("diamond".into()));
        let marker = Shape::create(&mut scene, root, ShapeType::Marker, attrs).unwrap();
        assert!(marker.attr(&scene, AttrKey::Path).is_some());
        assert_eq!(marker.attr(&scene, AttrKey::X), None);
        let bounds = marker.bbox(&mut scene);
        assert_eq!(bounds.center(), kurbo::Point::new(10.0, 10.0));
    }

    #[test]
    fn text_values_coerce_to_strings() {
        let mut scene = scene();
        let root = scene.root();
        let mut attrs = AttrMap::new();
        attrs.insert(AttrKey::Text, AttrValue::Number(42.0));
        let shape = Shape::create(&mut scene, root, ShapeType::Text, attrs).unwrap();
        assert_eq!(
            shape.attr(&scene, AttrKey::Text),
            Some(AttrValue::Text("42".into()))
        );
        assert_eq!(
            shape.attr(&scene, AttrKey::TextBaseline),
            Some(AttrValue::Text("alphabetic".into()))
        );
    }

    #[test]
    fn shadow_color_clears_to_empty_not_stale() {
        let mut scene = scene();
        let root = scene.root();
        let shape = Shape::create(&mut scene, root, ShapeType::Rect, AttrMap::new()).unwrap();
        shape.set_attr(&mut scene, AttrKey::ShadowColor, AttrValue::Text("#f00".into()));
        shape.clear_attr(&mut scene, AttrKey::ShadowColor);
        assert_eq!(
            shape.attr(&scene, AttrKey::ShadowColor),
            Some(AttrValue::Text(String::new()))
        );
        shape.set_attr(&mut scene, AttrKey::Fill, AttrValue::Text("#0f0".into()));
        shape.clear_attr(&mut scene, AttrKey::Fill);
        assert_eq!(shape.attr(&scene, AttrKey::Fill), None);
    }

    #[test]
    fn rotate_attr_applies_at_creation() {
        let mut scene = scene();
        let root = scene.root();
        let mut attrs = AttrMap::new();
        attrs.insert(AttrKey::Rotate, AttrValue::Number(core::f64::consts::FRAC_PI_2));
        let shape = Shape::create(&mut scene, root, ShapeType::Rect, attrs).unwrap();
        let d = decompose(&shape.matrix(&scene));
        assert!((d.rotation - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn clip_is_detached_and_retrievable() {
        let mut scene = scene();
        let root = scene.root();
        let shape = Shape::create(&mut scene, root, ShapeType::Image, AttrMap::new()).unwrap();
        let clip = shape
            .set_clip(
                &mut scene,
                ClipCfg {
                    shape_type: ShapeType::Circle,
                    attrs: circle_attrs(0.0, 0.0, 8.0),
                },
            )
            .unwrap();
        assert_eq!(shape.clip(&scene), Some(clip.node()));
        assert_eq!(scene.parent(clip.node()), None);
    }
}
