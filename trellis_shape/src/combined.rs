// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combined-line adapter: a body drawable plus up to two arrowhead
//! drawables behind a single attribute surface.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point, Shape as _};
use trellis_geom::Bbox;
use trellis_scene::{
    number_or, AnimateCfg, AnimationCallback, AnimationId, AttrKey, AttrMap, AttrValue, NodeId,
    PrimitiveKind, Scene,
};

use crate::arrow::{default_head_path, ArrowSpec};
use crate::shape::{ClipCfg, Shape, ShapeType};

/// Attributes kept synchronized between the body and both heads.
///
/// The single source of truth consulted by construction and update
/// paths alike; geometry-only attributes target the body, arrow
/// attributes target their head.
pub const SHARED_ATTRS: &[AttrKey] = &[
    AttrKey::LineWidth,
    AttrKey::Stroke,
    AttrKey::Cursor,
    AttrKey::Opacity,
    AttrKey::StrokeOpacity,
    AttrKey::ShadowColor,
    AttrKey::ShadowBlur,
];

/// Whether `key` is synchronized across the body and both heads.
#[must_use]
pub fn is_shared_attr(key: AttrKey) -> bool {
    SHARED_ATTRS.contains(&key)
}

/// Geometry kind of a combined line's body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Straight segment.
    Line,
    /// Open polyline.
    Polyline,
    /// Arbitrary SVG path.
    Path,
}

impl BodyKind {
    fn shape_type(self) -> ShapeType {
        match self {
            Self::Line => ShapeType::Line,
            Self::Polyline => ShapeType::Polyline,
            Self::Path => ShapeType::Path,
        }
    }
}

/// An arrow end, for head replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowEnd {
    /// The `x1`/`y1` end.
    Start,
    /// The `x2`/`y2` end.
    End,
}

/// One drawable whose rendered geometry is a body plus zero, one, or
/// two arrowhead decorations.
///
/// The group node anchors at the origin; the body carries the real
/// coordinates. Position attributes are therefore meaningless at the
/// combined level and stripped from full reads.
#[derive(Debug)]
pub struct Combined {
    group: NodeId,
    body: Shape,
    start_head: Option<Shape>,
    end_head: Option<Shape>,
    start_arrow: ArrowSpec,
    end_arrow: ArrowSpec,
    start_head_offset: f64,
    end_head_offset: f64,
}

fn scrub_nan(attrs: &mut AttrMap) {
    for value in attrs.values_mut() {
        match value {
            AttrValue::Number(n) if n.is_nan() => *n = 0.0,
            AttrValue::Points(points) => {
                for (x, y) in points.iter_mut() {
                    if x.is_nan() {
                        *x = 0.0;
                    }
                    if y.is_nan() {
                        *y = 0.0;
                    }
                }
            }
            _ => {}
        }
    }
}

impl Combined {
    /// Builds a combined line under `parent`.
    ///
    /// Incoming style is split into body-only and shared attributes;
    /// the body gets an inflated hit-test width; heads are built from
    /// the arrow descriptors. NaN coordinates are scrubbed to zero.
    pub fn new(
        scene: &mut Scene,
        parent: NodeId,
        body_kind: BodyKind,
        mut attrs: AttrMap,
        start_arrow: ArrowSpec,
        end_arrow: ArrowSpec,
    ) -> Self {
        scrub_nan(&mut attrs);
        let hit_width = attrs
            .get(&AttrKey::LineAppendWidth)
            .and_then(AttrValue::as_number)
            .unwrap_or_else(|| number_or(&attrs, AttrKey::LineWidth, 1.0));

        let mut shared = AttrMap::new();
        let mut body_attrs = AttrMap::new();
        for (key, value) in attrs {
            if is_shared_attr(key) {
                shared.insert(key, value);
            } else if key != AttrKey::LineAppendWidth {
                body_attrs.insert(key, value);
            }
        }

        let mut group_attrs = shared.clone();
        group_attrs.insert(AttrKey::X, AttrValue::Number(0.0));
        group_attrs.insert(AttrKey::Y, AttrValue::Number(0.0));
        let group = scene.insert(parent, PrimitiveKind::Group, group_attrs);

        body_attrs.extend(shared.clone());
        body_attrs.insert(AttrKey::LineAppendWidth, AttrValue::Number(hit_width));
        body_attrs.insert(AttrKey::X, AttrValue::Number(0.0));
        body_attrs.insert(AttrKey::Y, AttrValue::Number(0.0));
        // Body kinds never refuse construction; no symbol resolution.
        let body = Shape::create(scene, group, body_kind.shape_type(), body_attrs)
            .unwrap_or(Shape::from_parts(group, body_kind.shape_type()));

        let mut combined = Self {
            group,
            body,
            start_head: None,
            end_head: None,
            start_arrow: ArrowSpec::None,
            end_arrow: ArrowSpec::None,
            start_head_offset: 0.0,
            end_head_offset: 0.0,
        };
        combined.replace_head(scene, ArrowEnd::Start, start_arrow);
        combined.replace_head(scene, ArrowEnd::End, end_arrow);
        combined
    }

    /// The group node behind the combined drawable.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.group
    }

    /// The body drawable.
    #[must_use]
    pub fn body(&self) -> Shape {
        self.body
    }

    /// The start head drawable, when present.
    #[must_use]
    pub fn start_head(&self) -> Option<Shape> {
        self.start_head
    }

    /// The end head drawable, when present.
    #[must_use]
    pub fn end_head(&self) -> Option<Shape> {
        self.end_head
    }

    /// The persisted start arrow descriptor.
    #[must_use]
    pub fn start_arrow(&self) -> &ArrowSpec {
        &self.start_arrow
    }

    /// The persisted end arrow descriptor.
    #[must_use]
    pub fn end_arrow(&self) -> &ArrowSpec {
        &self.end_arrow
    }

    /// The inset offset of the given head.
    #[must_use]
    pub fn head_offset(&self, end: ArrowEnd) -> f64 {
        match end {
            ArrowEnd::Start => self.start_head_offset,
            ArrowEnd::End => self.end_head_offset,
        }
    }

    fn build_head(&self, scene: &mut Scene, spec: &ArrowSpec) -> Option<Shape> {
        let path = match spec {
            ArrowSpec::None => return None,
            ArrowSpec::Drawable(shape) => {
                // Adopted unchanged; only reparented under the group.
                scene.append_child(self.group, shape.node());
                return Some(*shape);
            }
            ArrowSpec::Default => default_head_path(),
            ArrowSpec::Custom { path, .. } => path.clone(),
        };
        let mut attrs = AttrMap::new();
        attrs.insert(AttrKey::Path, AttrValue::Text(path));
        for &key in SHARED_ATTRS {
            if let Some(value) = scene.attr(self.group, key) {
                attrs.insert(key, value.clone());
            }
        }
        if let ArrowSpec::Custom { style, .. } = spec {
            attrs.extend(style.clone());
        }
        Shape::create(scene, self.group, ShapeType::Path, attrs)
    }

    /// Replaces one head from a new descriptor, updating the inset
    /// offset and persisting the descriptor.
    pub fn replace_head(&mut self, scene: &mut Scene, end: ArrowEnd, spec: ArrowSpec) {
        let head = self.build_head(scene, &spec);
        let new_node = head.map(|h| h.node());
        let offset = spec.head_offset();
        let old = match end {
            ArrowEnd::Start => {
                let old = self.start_head.take();
                self.start_head = head;
                self.start_arrow = spec;
                self.start_head_offset = offset;
                old
            }
            ArrowEnd::End => {
                let old = self.end_head.take();
                self.end_head = head;
                self.end_arrow = spec;
                self.end_head_offset = offset;
                old
            }
        };
        if let Some(old) = old
            && Some(old.node()) != new_node
        {
            scene.remove(old.node());
        }
        self.layout_heads(scene);
    }

    /// Places each head at its endpoint, rotated to the edge direction
    /// and pulled inward by its offset.
    fn layout_heads(&self, scene: &mut Scene) {
        let placements = [
            (self.start_head, self.start_tangent(scene), self.start_head_offset),
            (self.end_head, self.end_tangent(scene), self.end_head_offset),
        ];
        for (head, tangent, offset) in placements {
            let (Some(head), Some([toward, reference])) = (head, tangent) else {
                continue;
            };
            let dir = reference - toward;
            if dir.hypot() == 0.0 {
                continue;
            }
            let unit = dir / dir.hypot();
            let position = reference + unit * offset;
            scene.set_local_position(head.node(), position.x, position.y);
            scene.set_rotation_origin(head.node(), 0.0, 0.0);
            scene.set_local_euler_deg(head.node(), unit.y.atan2(unit.x).to_degrees());
        }
    }

    // -----------------------------------------------------------
    // Attribute surface
    // -----------------------------------------------------------

    /// Full attribute read: body attributes merged over the combined
    /// drawable's own, with positional `x`/`y`/`z` stripped. Arrow
    /// descriptors are read via [`Combined::start_arrow`] and
    /// [`Combined::end_arrow`].
    #[must_use]
    pub fn attrs(&self, scene: &Scene) -> AttrMap {
        let mut merged = scene.attrs(self.group).cloned().unwrap_or_default();
        merged.extend(self.body.attrs(scene));
        merged.remove(&AttrKey::X);
        merged.remove(&AttrKey::Y);
        merged.remove(&AttrKey::Z);
        merged
    }

    /// Reads one attribute, body first.
    #[must_use]
    pub fn attr(&self, scene: &Scene, key: AttrKey) -> Option<AttrValue> {
        self.body
            .attr(scene, key)
            .or_else(|| scene.attr(self.group, key).cloned())
    }

    /// Writes one attribute through the fan-out rules.
    pub fn set_attr(&self, scene: &mut Scene, key: AttrKey, value: AttrValue) {
        let mut batch = AttrMap::new();
        batch.insert(key, value);
        self.set_attrs(scene, batch);
    }

    /// Writes a batch of attributes.
    ///
    /// Every key lands on the combined drawable and the body; shared
    /// keys additionally propagate to both heads, so one `stroke`
    /// change repaints body and arrowheads uniformly.
    pub fn set_attrs(&self, scene: &mut Scene, updates: AttrMap) {
        for (key, value) in updates {
            scene.set_attr(self.group, key, value.clone());
            self.body.set_attr(scene, key, value.clone());
            if is_shared_attr(key) {
                if let Some(head) = self.start_head {
                    head.set_attr(scene, key, value.clone());
                }
                if let Some(head) = self.end_head {
                    head.set_attr(scene, key, value);
                }
            }
        }
        self.layout_heads(scene);
    }

    /// Unsets an attribute with the same fan-out as writes.
    pub fn clear_attr(&self, scene: &mut Scene, key: AttrKey) {
        self.body.clear_attr(scene, key);
        scene.remove_attr(self.group, key);
        if is_shared_attr(key) {
            if let Some(head) = self.start_head {
                head.clear_attr(scene, key);
            }
            if let Some(head) = self.end_head {
                head.clear_attr(scene, key);
            }
        }
    }

    // -----------------------------------------------------------
    // Geometry queries
    // -----------------------------------------------------------

    fn body_path(&self, scene: &Scene) -> Option<BezPath> {
        match self.body.shape_type() {
            ShapeType::Line => {
                let attrs = scene.attrs(self.body.node())?;
                let mut path = BezPath::new();
                path.move_to(Point::new(
                    number_or(attrs, AttrKey::X1, 0.0),
                    number_or(attrs, AttrKey::Y1, 0.0),
                ));
                path.line_to(Point::new(
                    number_or(attrs, AttrKey::X2, 0.0),
                    number_or(attrs, AttrKey::Y2, 0.0),
                ));
                Some(path)
            }
            ShapeType::Polyline => {
                let points = self
                    .body
                    .attr(scene, AttrKey::Points)
                    .and_then(|v| v.as_points().map(<[(f64, f64)]>::to_vec))?;
                let mut iter = points.iter().map(|&(x, y)| Point::new(x, y));
                let first = iter.next()?;
                let mut path = BezPath::new();
                path.move_to(first);
                for pt in iter {
                    path.line_to(pt);
                }
                Some(path)
            }
            _ => {
                let data = self.body.attr(scene, AttrKey::Path)?;
                BezPath::from_svg(data.as_text()?).ok()
            }
        }
    }

    /// Total arc length of the body. Arrowheads never contribute.
    #[must_use]
    pub fn total_length(&self, scene: &Scene) -> f64 {
        self.body_path(scene).map_or(0.0, |path| path.perimeter(1e-6))
    }

    /// The point at `ratio` of the body's arc length, `ratio` clamped
    /// to `[0, 1]`. Delegates to the body exclusively.
    #[must_use]
    pub fn point_at(&self, scene: &Scene, ratio: f64) -> Option<Point> {
        let path = self.body_path(scene)?;
        let segments: Vec<PathSeg> = path.segments().collect();
        if segments.is_empty() {
            return None;
        }
        let total: f64 = segments.iter().map(|seg| seg.arclen(1e-6)).sum();
        if total == 0.0 {
            return Some(segments[0].eval(0.0));
        }
        let mut remaining = ratio.clamp(0.0, 1.0) * total;
        for (i, seg) in segments.iter().enumerate() {
            let len = seg.arclen(1e-6);
            if remaining <= len || i == segments.len() - 1 {
                let t = seg.inv_arclen(remaining.min(len), 1e-6);
                return Some(seg.eval(t));
            }
            remaining -= len;
        }
        None
    }

    /// The tangent at the start end, as `[toward, reference]`: the
    /// second point is the start itself, the first points away from it
    /// along the body. Downstream rotation logic depends on this
    /// ordering.
    #[must_use]
    pub fn start_tangent(&self, scene: &Scene) -> Option<[Point; 2]> {
        let path = self.body_path(scene)?;
        let first = path.segments().next()?;
        Some(match first {
            PathSeg::Line(line) => [line.p1, line.p0],
            PathSeg::Quad(quad) => [quad.p1, quad.p0],
            PathSeg::Cubic(cubic) => [cubic.p1, cubic.p0],
        })
    }

    /// The tangent at the end, as `[toward, reference]` with the end
    /// point second.
    #[must_use]
    pub fn end_tangent(&self, scene: &Scene) -> Option<[Point; 2]> {
        let path = self.body_path(scene)?;
        let last = path.segments().last()?;
        Some(match last {
            PathSeg::Line(line) => [line.p0, line.p1],
            PathSeg::Quad(quad) => [quad.p1, quad.p2],
            PathSeg::Cubic(cubic) => [cubic.p2, cubic.p3],
        })
    }

    /// Bounds of body and heads together, in ancestor space.
    #[must_use]
    pub fn canvas_bbox(&self, scene: &Scene) -> Bbox {
        scene.world_bounds(self.group)
    }

    // -----------------------------------------------------------
    // Clip, visibility, animation
    // -----------------------------------------------------------

    /// Installs a clip drawable.
    ///
    /// The clip is always a plain shape; a path-type descriptor builds
    /// the simple path variant, never another combined line.
    pub fn set_clip(&self, scene: &mut Scene, cfg: ClipCfg) -> Option<Shape> {
        let clip = Shape::create_detached(scene, cfg.shape_type, cfg.attrs)?;
        scene.set_clip(self.group, clip.node());
        Some(clip)
    }

    /// The installed clip drawable, if any.
    #[must_use]
    pub fn clip(&self, scene: &Scene) -> Option<NodeId> {
        scene.clip(self.group)
    }

    /// Shows the combined drawable.
    pub fn show(&self, scene: &mut Scene) {
        scene.set_visible(self.group, true);
    }

    /// Hides body and heads together.
    pub fn hide(&self, scene: &mut Scene) {
        scene.set_visible(self.group, false);
    }

    /// Whether the combined drawable is visible.
    #[must_use]
    pub fn visible(&self, scene: &Scene) -> bool {
        scene.visible(self.group)
    }

    /// Sets the stacking order.
    pub fn set_z_index(&self, scene: &mut Scene, z_index: i32) {
        scene.set_z_index(self.group, z_index);
    }

    /// Sets whether the drawable captures pointer events.
    pub fn set_capture(&self, scene: &mut Scene, capture: bool) {
        scene.set_interactive(self.group, capture);
    }

    /// Animates numeric attributes; the interpolation runs on the body.
    pub fn animate(
        &self,
        scene: &mut Scene,
        targets: Vec<(AttrKey, f64)>,
        cfg: AnimateCfg,
        on_finish: Option<AnimationCallback>,
    ) -> Option<AnimationId> {
        self.body.animate(scene, targets, cfg, on_finish)
    }

    /// Suspends animations on body and heads.
    pub fn pause_animate(&self, scene: &mut Scene) {
        self.body.pause_animate(scene);
        if let Some(head) = self.start_head {
            head.pause_animate(scene);
        }
        if let Some(head) = self.end_head {
            head.pause_animate(scene);
        }
    }

    /// Resumes animations on body and heads.
    pub fn resume_animate(&self, scene: &mut Scene) {
        self.body.resume_animate(scene);
        if let Some(head) = self.start_head {
            head.resume_animate(scene);
        }
        if let Some(head) = self.end_head {
            head.resume_animate(scene);
        }
    }

    /// Lands every animation on its end state, then cancels it.
    pub fn stop_animate(&self, scene: &mut Scene) {
        self.body.stop_animate(scene);
        if let Some(head) = self.start_head {
            head.stop_animate(scene);
        }
        if let Some(head) = self.end_head {
            head.stop_animate(scene);
        }
    }
}
