// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrowhead descriptors and path templates.
//!
//! Templates emit absolute-command SVG path strings anchored at the
//! arrow's attachment point and pointing along the positive X axis;
//! rotation to the actual edge direction happens downstream.

use trellis_scene::AttrMap;

use crate::shape::Shape;

/// How one end of a combined line is decorated.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ArrowSpec {
    /// No arrowhead.
    #[default]
    None,
    /// The built-in open-vee head.
    Default,
    /// A custom head path with extra style and an inward displacement
    /// `d` along the line.
    Custom {
        /// Absolute-command SVG path data for the head.
        path: String,
        /// Displacement pulling the head inward, so the body stroke
        /// stops behind the tip instead of protruding past it.
        d: f64,
        /// Style applied to the head on top of the shared attributes.
        style: AttrMap,
    },
    /// An already-built head drawable, adopted as-is with no styling of
    /// its own applied.
    Drawable(Shape),
}

impl ArrowSpec {
    /// The head inset offset this descriptor implies.
    #[must_use]
    pub fn head_offset(&self) -> f64 {
        match self {
            Self::Custom { d, .. } => -2.0 * d,
            Self::None | Self::Default | Self::Drawable(_) => 0.0,
        }
    }

    /// Whether a head drawable should exist for this descriptor.
    #[must_use]
    pub fn wants_head(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The default head: an open vee with 10-unit flanks at 30 degrees.
#[must_use]
pub fn default_head_path() -> String {
    let flank_x = 10.0 * (core::f64::consts::FRAC_PI_6).cos();
    let flank_y = 10.0 * (core::f64::consts::FRAC_PI_6).sin();
    format!("M {flank_x},{flank_y} L 0,0 L {flank_x},-{flank_y}")
}

/// A filled triangle head, `length` long and `width` across the base.
#[must_use]
pub fn triangle(width: f64, length: f64) -> String {
    let half = length / 2.0;
    format!(
        "M {},0 L {},-{} L {},{} Z",
        -half,
        half,
        width / 2.0,
        half,
        width / 2.0,
    )
}

/// A notched vee head.
#[must_use]
pub fn vee(width: f64, length: f64) -> String {
    let half = length / 2.0;
    format!(
        "M {},0 L {},-{} L {},0 L {},{} Z",
        -half,
        half,
        width / 2.0,
        length / 6.0,
        half,
        width / 2.0,
    )
}

/// A circular head of radius `r`.
#[must_use]
pub fn circle(r: f64) -> String {
    format!("M {},0 A {r},{r} 0 1 0 {r},0 A {r},{r} 0 1 0 {},0 Z", -r, -r)
}

/// A rectangular head.
#[must_use]
pub fn rect(width: f64, length: f64) -> String {
    let half = length / 2.0;
    let half_w = width / 2.0;
    format!(
        "M {},{} L {half},{} L {half},{half_w} L {},{half_w} Z",
        -half, -half_w, -half_w, -half,
    )
}

/// A diamond head.
#[must_use]
pub fn diamond(width: f64, length: f64) -> String {
    let half = length / 2.0;
    let half_w = width / 2.0;
    format!("M {},0 L 0,{} L {half},0 L 0,{half_w} Z", -half, -half_w)
}

/// A triangle followed by a detached bar, in one path.
#[must_use]
pub fn triangle_rect(
    t_width: f64,
    t_length: f64,
    r_width: f64,
    r_length: f64,
    gap: f64,
) -> String {
    let begin = -t_length / 2.0;
    let tip = begin + t_length;
    let half_t = t_width / 2.0;
    let rect_begin = begin + t_length + gap;
    let rect_end = rect_begin + r_length;
    let half_r = r_width / 2.0;
    format!(
        "M {begin},0 L {tip},-{half_t} L {tip},{half_t} Z \
         M {rect_begin},-{half_r} L {rect_end},-{half_r} L {rect_end},{half_r} L {rect_begin},{half_r} Z",
    )
}
