// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based animation primitives.
//!
//! Animations are scheduled on the scene and advanced cooperatively by
//! [`crate::Scene::tick`]; scheduling returns immediately and
//! intermediate states are observable while an animation is in flight.

use core::fmt;

use kurbo::Point;

use crate::attrs::AttrKey;
use crate::node::NodeId;
use crate::Scene;

/// Identifier of a scheduled animation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationId(pub(crate) u32);

/// Easing function applied to normalized animation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// Cubic ease-in-out.
    #[default]
    EaseCubic,
    /// Quadratic ease-in-out.
    EaseQuad,
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` through the easing curve.
    #[must_use]
    pub fn eval(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::EaseQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Timing configuration for an animated operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimateCfg {
    /// Duration in milliseconds.
    pub duration: f64,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for AnimateCfg {
    fn default() -> Self {
        Self {
            duration: 500.0,
            easing: Easing::default(),
        }
    }
}

/// Completion callback run after an animation lands on its end state.
pub type AnimationCallback = Box<dyn FnOnce(&mut Scene)>;

/// What an animation interpolates.
pub(crate) enum AnimTarget {
    /// Moves the camera position (and focal point) between two model points.
    CameraPosition { from: Point, to: Point },
    /// Zooms the camera, keeping a model-space anchor fixed on screen.
    CameraZoom { from: f64, to: f64, anchor: Point },
    /// Interpolates numeric attributes of a node.
    NodeAttrs {
        node: NodeId,
        tracks: Vec<(AttrKey, f64, f64)>,
    },
}

pub(crate) struct Animation {
    pub target: AnimTarget,
    pub cfg: AnimateCfg,
    pub elapsed: f64,
    pub paused: bool,
    pub on_finish: Option<AnimationCallback>,
}

impl Animation {
    pub(crate) fn new(target: AnimTarget, cfg: AnimateCfg, on_finish: Option<AnimationCallback>) -> Self {
        Self {
            target,
            cfg,
            elapsed: 0.0,
            paused: false,
            on_finish,
        }
    }

    /// Normalized eased progress in `[0, 1]`.
    pub(crate) fn progress(&self) -> f64 {
        if self.cfg.duration <= 0.0 {
            return 1.0;
        }
        self.cfg.easing.eval(self.elapsed / self.cfg.duration)
    }

    pub(crate) fn finished(&self) -> bool {
        self.elapsed >= self.cfg.duration
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("cfg", &self.cfg)
            .field("elapsed", &self.elapsed)
            .field("paused", &self.paused)
            .field("has_callback", &self.on_finish.is_some())
            .finish()
    }
}

/// Linear interpolation between two scalars.
pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
