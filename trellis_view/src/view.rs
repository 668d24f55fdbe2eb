// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view controller: fit, focus, zoom, and coordinate conversion.
//!
//! A stateless façade over the scene camera. The controller never
//! caches camera state; every read re-queries the camera and every
//! write mutates it in place, so cached and actual state cannot
//! diverge.

use core::fmt;

use kurbo::{Point, Vec2};
use thiserror::Error;
use tracing::warn;
use trellis_geom::{Bbox, Padding};
use trellis_scene::{AnimateCfg, AnimationCallback, Scene};

use crate::grid::Grid;
use crate::item::{Item, ItemKind, ItemRegistry};

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.02;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Fatal configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    /// Resize called with a non-finite dimension.
    #[error("invalid canvas size {width}x{height}: width and height must be finite numbers")]
    InvalidSize {
        /// The requested width.
        width: f64,
        /// The requested height.
        height: f64,
    },
}

/// Which axis a rule-based fit considers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FitDirection {
    /// Fit the width only.
    X,
    /// Fit the height only.
    Y,
    /// Combine both axes through the ratio rule.
    #[default]
    Both,
}

/// Tie-break when combining both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RatioRule {
    /// Full content visibility, never clipping.
    #[default]
    Min,
    /// Fill the smaller dimension, possibly overflowing the other.
    Max,
}

/// Options for [`View::fit_view_by_rules`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FitViewRules {
    /// Skip scaling when the content already fits; the ratio never
    /// grows past 1 with this set.
    pub only_out_of_viewport: bool,
    /// Axis restriction.
    pub direction: FitDirection,
    /// Tie-break for the `Both` direction.
    pub ratio_rule: RatioRule,
}

/// Animation options for a view operation.
///
/// The completion callback fires only after every scheduled step of
/// the operation has finished, never after just the first.
pub struct ViewAnimate {
    /// Duration and easing.
    pub cfg: AnimateCfg,
    /// Runs when the whole operation completes.
    pub on_done: Option<AnimationCallback>,
}

impl ViewAnimate {
    /// Animation options with no completion callback.
    #[must_use]
    pub fn new(cfg: AnimateCfg) -> Self {
        Self { cfg, on_done: None }
    }

    /// Attaches a completion callback.
    #[must_use]
    pub fn with_callback(mut self, on_done: AnimationCallback) -> Self {
        self.on_done = Some(on_done);
        self
    }
}

impl Default for ViewAnimate {
    fn default() -> Self {
        Self::new(AnimateCfg::default())
    }
}

impl fmt::Debug for ViewAnimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewAnimate")
            .field("cfg", &self.cfg)
            .field("has_callback", &self.on_done.is_some())
            .finish()
    }
}

/// View controller configuration.
#[derive(Clone, Copy, Debug)]
pub struct ViewCfg {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    /// Padding reserved around fitted content.
    pub padding: Padding,
    /// Lower zoom bound; `0` means unbounded.
    pub min_zoom: f64,
    /// Upper zoom bound; `0` means unbounded.
    pub max_zoom: f64,
    /// Whether to maintain a background grid overlay.
    pub grid: bool,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: Padding::Uniform(0.0),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            grid: false,
        }
    }
}

/// The view controller.
#[derive(Debug)]
pub struct View {
    width: f64,
    height: f64,
    padding: [f64; 4],
    min_zoom: f64,
    max_zoom: f64,
    grid: Option<Grid>,
}

impl View {
    /// Creates a controller from its configuration.
    #[must_use]
    pub fn new(cfg: ViewCfg) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            padding: cfg.padding.resolve(),
            min_zoom: cfg.min_zoom,
            max_zoom: cfg.max_zoom,
            grid: cfg.grid.then(|| Grid::new(cfg.width, cfg.height)),
        }
    }

    /// Viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Resolved fit padding as `[top, right, bottom, left]`.
    #[must_use]
    pub fn padding(&self) -> [f64; 4] {
        self.padding
    }

    /// Replaces the fit padding.
    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.padding = padding.into().resolve();
    }

    /// The grid overlay tiling, when enabled.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// The center of the padded viewport, a pure function of the
    /// configured size and padding.
    #[must_use]
    pub fn view_center(&self) -> Point {
        let [top, right, bottom, left] = self.padding;
        Point::new(
            (self.width - right - left) / 2.0 + left,
            (self.height - top - bottom) / 2.0 + top,
        )
    }

    // -----------------------------------------------------------
    // Zoom
    // -----------------------------------------------------------

    /// Clamps a requested zoom to the configured bounds.
    ///
    /// In-range requests pass through exactly. Out-of-range requests
    /// substitute the nearest bound and log a warning; they never fail
    /// and never apply the out-of-range value. A bound of `0` is
    /// unbounded on that side.
    fn clamp_zoom(&self, requested: f64) -> f64 {
        if self.min_zoom > 0.0 && requested < self.min_zoom {
            warn!(
                requested,
                bound = self.min_zoom,
                "zoom ratio out of range, min zoom substituted"
            );
            self.min_zoom
        } else if self.max_zoom > 0.0 && requested > self.max_zoom {
            warn!(
                requested,
                bound = self.max_zoom,
                "zoom ratio out of range, max zoom substituted"
            );
            self.max_zoom
        } else {
            requested
        }
    }

    /// Zooms by `ratio` relative to the current zoom, about `center`
    /// (a model point; defaults to the camera position). Returns the
    /// zoom that was applied.
    pub fn zoom(
        &self,
        scene: &mut Scene,
        ratio: f64,
        center: Option<Point>,
        animate: Option<ViewAnimate>,
    ) -> f64 {
        let target = scene.camera().zoom() * ratio;
        self.zoom_to(scene, target, center, animate)
    }

    /// Zooms to an absolute ratio, clamped to the configured bounds.
    pub fn zoom_to(
        &self,
        scene: &mut Scene,
        ratio: f64,
        center: Option<Point>,
        animate: Option<ViewAnimate>,
    ) -> f64 {
        let end = self.clamp_zoom(ratio);
        let anchor = center.unwrap_or_else(|| scene.camera().position());
        match animate {
            None => scene.set_zoom_about(end, anchor),
            Some(ViewAnimate { cfg, on_done }) => {
                scene.animate_camera_zoom(end, anchor, cfg, on_done);
            }
        }
        end
    }

    // -----------------------------------------------------------
    // Fit and focus
    // -----------------------------------------------------------

    /// Translates so `content_center` lands at the view center, then
    /// optionally zooms about the resulting camera position.
    ///
    /// The animated path chains the zoom onto the translate's
    /// completion callback: the zoom never starts before the translate
    /// finishes, and the caller's callback fires only after both.
    fn fit_transform(
        &self,
        scene: &mut Scene,
        content_center: Point,
        end_zoom: Option<f64>,
        animate: Option<ViewAnimate>,
    ) {
        let model_center = scene.point_by_canvas(self.view_center());
        let dx = model_center.x - content_center.x;
        let dy = model_center.y - content_center.y;
        if dx.is_nan() || dy.is_nan() {
            return;
        }
        match animate {
            None => {
                scene.translate(dx, dy);
                if let Some(zoom) = end_zoom {
                    let anchor = scene.camera().position();
                    scene.set_zoom_about(zoom, anchor);
                }
            }
            Some(ViewAnimate { cfg, on_done }) => {
                let target = scene.camera().position() - Vec2::new(dx, dy);
                match end_zoom {
                    None => {
                        scene.animate_camera_position(target, cfg, on_done);
                    }
                    Some(zoom) => {
                        let chain: AnimationCallback = Box::new(move |scene: &mut Scene| {
                            let anchor = scene.camera().position();
                            scene.animate_camera_zoom(zoom, anchor, cfg, on_done);
                        });
                        scene.animate_camera_position(target, cfg, Some(chain));
                    }
                }
            }
        }
    }

    /// Translates so the given model point lands exactly at the view
    /// center.
    pub fn focus_point(&self, scene: &mut Scene, point: Point, animate: Option<ViewAnimate>) {
        self.fit_transform(scene, point, None, animate);
    }

    /// Centers the rendered content without changing the zoom.
    ///
    /// No-op when the scene has no renderable content.
    pub fn fit_center(&self, scene: &mut Scene, animate: Option<ViewAnimate>) {
        let bbox = scene.world_bounds(scene.root());
        if bbox.is_empty() {
            return;
        }
        self.focus_point(scene, bbox.center(), animate);
    }

    /// Centers the content and zooms so it fills the padded viewport.
    ///
    /// The scale is uniform, `min(target_w / w, target_h / h)`; aspect
    /// ratio is preserved, content is never stretched. An out-of-range
    /// result clamps to the nearest bound with a warning. No-op on
    /// empty content.
    pub fn fit_view(&self, scene: &mut Scene, animate: Option<ViewAnimate>) {
        let bbox = scene.world_bounds(scene.root());
        if bbox.is_empty() {
            return;
        }
        // Convert the padded target rect to model space through the
        // current camera, making the ratio independent of the current
        // zoom.
        let [top, right, bottom, left] = self.padding;
        let top_left = scene.point_by_canvas(Point::new(left, top));
        let bottom_right =
            scene.point_by_canvas(Point::new(self.width - right, self.height - bottom));
        let ratio = ((bottom_right.x - top_left.x) / bbox.width())
            .min((bottom_right.y - top_left.y) / bbox.height());
        let end = self.clamp_zoom(scene.camera().zoom() * ratio);
        self.fit_transform(scene, bbox.center(), Some(end), animate);
    }

    /// Rule-based fit: centers first, then scales relative to the
    /// current zoom per the rules.
    ///
    /// The resulting zoom clamps to the lower bound only. The
    /// asymmetry is intentional: this operation protects against
    /// over-shrinking, not over-growing.
    pub fn fit_view_by_rules(
        &self,
        scene: &mut Scene,
        rules: FitViewRules,
        animate: Option<ViewAnimate>,
    ) {
        let bbox = scene.world_bounds(scene.root());
        if bbox.is_empty() {
            return;
        }
        // The zoom anchor is the model point at the view center as it
        // stands before centering.
        let center_point = scene.point_by_canvas(self.view_center());
        let (cfg, on_done) = match animate {
            Some(ViewAnimate { cfg, on_done }) => (Some(cfg), on_done),
            None => (None, None),
        };
        self.fit_center(scene, cfg.map(ViewAnimate::new));

        let [top, right, bottom, left] = self.padding;
        let zoom = scene.camera().zoom();
        let w_ratio = (self.width - right - left) / (bbox.width() * zoom);
        let h_ratio = (self.height - top - bottom) / (bbox.height() * zoom);
        let mut ratio = match rules.direction {
            FitDirection::X => w_ratio,
            FitDirection::Y => h_ratio,
            FitDirection::Both => match rules.ratio_rule {
                RatioRule::Min => w_ratio.min(h_ratio),
                RatioRule::Max => w_ratio.max(h_ratio),
            },
        };
        if rules.only_out_of_viewport {
            ratio = ratio.min(1.0);
        }
        let mut end = zoom * ratio;
        if self.min_zoom > 0.0 && end < self.min_zoom {
            warn!(
                requested = end,
                bound = self.min_zoom,
                "rule-based fit out of range, min zoom substituted"
            );
            end = self.min_zoom;
        }
        match cfg {
            None => scene.set_zoom_about(end, center_point),
            Some(cfg) => {
                scene.animate_camera_zoom(end, center_point, cfg, on_done);
            }
        }
    }

    /// Focuses an item by id. Unresolvable ids are silent no-ops.
    pub fn focus(
        &self,
        scene: &mut Scene,
        registry: &ItemRegistry,
        id: &str,
        animate: Option<ViewAnimate>,
    ) {
        let Some(item) = registry.get(id) else {
            return;
        };
        self.focus_item(scene, registry, item, animate);
    }

    /// Moves an item to the view center.
    ///
    /// Edges focus the midpoint of their endpoint anchors, falling
    /// back to whichever single endpoint resolves; other items focus
    /// their own transform anchor rather than possibly stale model
    /// coordinates.
    pub fn focus_item(
        &self,
        scene: &mut Scene,
        registry: &ItemRegistry,
        item: &Item,
        animate: Option<ViewAnimate>,
    ) {
        let point = match item.kind() {
            ItemKind::Edge { source, target } => {
                let source = registry.get(source).and_then(|i| i.anchor(scene));
                let target = registry.get(target).and_then(|i| i.anchor(scene));
                match (source, target) {
                    (Some(s), Some(t)) => Point::new((s.x + t.x) / 2.0, (s.y + t.y) / 2.0),
                    (Some(p), None) | (None, Some(p)) => p,
                    (None, None) => return,
                }
            }
            ItemKind::Node | ItemKind::Combo => {
                let Some(anchor) = item.anchor(scene) else {
                    return;
                };
                anchor
            }
        };
        self.focus_point(scene, point, animate);
    }

    /// Centers the merged intrinsic bounds of `items`, scaling to fit
    /// when `zoom_to_fit` is set (always the `min` rule).
    ///
    /// No-op on an empty list or degenerate merged bounds.
    pub fn focus_items(
        &self,
        scene: &mut Scene,
        items: &[&Item],
        zoom_to_fit: bool,
        animate: Option<ViewAnimate>,
    ) {
        if items.is_empty() {
            return;
        }
        let bbox = items
            .iter()
            .fold(Bbox::NOTHING, |acc, item| acc.union(item.bbox(scene)));
        if bbox.is_empty() {
            return;
        }
        let end = zoom_to_fit.then(|| {
            let [top, right, bottom, left] = self.padding;
            let ratio = ((self.width - right - left) / bbox.width())
                .min((self.height - top - bottom) / bbox.height());
            self.clamp_zoom(ratio)
        });
        self.fit_transform(scene, bbox.center(), end, animate);
    }

    // -----------------------------------------------------------
    // Conversions
    // -----------------------------------------------------------

    /// Canvas pixels to model space, through the camera.
    #[must_use]
    pub fn point_by_canvas(&self, scene: &Scene, canvas: Point) -> Point {
        scene.point_by_canvas(canvas)
    }

    /// Model space to canvas pixels, through the camera.
    #[must_use]
    pub fn canvas_by_point(&self, scene: &Scene, point: Point) -> Point {
        scene.canvas_by_point(point)
    }

    /// Page/client pixels to model space.
    #[must_use]
    pub fn point_by_client(&self, scene: &Scene, client: Point) -> Point {
        scene.point_by_client(client)
    }

    /// Model space to page/client pixels.
    #[must_use]
    pub fn client_by_point(&self, scene: &Scene, point: Point) -> Point {
        scene.client_by_point(point)
    }

    // -----------------------------------------------------------
    // Resize
    // -----------------------------------------------------------

    /// Changes the viewport size.
    ///
    /// Non-finite dimensions are a fatal configuration error. On
    /// success the stored size and the scene surface update, and the
    /// grid overlay recomputes its tiling.
    pub fn change_size(
        &mut self,
        scene: &mut Scene,
        width: f64,
        height: f64,
    ) -> Result<(), ViewError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(ViewError::InvalidSize { width, height });
        }
        self.width = width;
        self.height = height;
        scene.resize(width, height);
        if let Some(grid) = &mut self.grid {
            grid.retile(width, height);
        }
        Ok(())
    }
}
