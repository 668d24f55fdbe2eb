// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use kurbo::{Affine, Point, Rect};

/// An axis-aligned bounding box in model or canvas space.
///
/// Only the min/max corners are stored; width, height, and the anchor
/// position are derived, so the `width == max_x - min_x` invariant holds
/// by construction. A box with zero width or height is a valid empty-set
/// sentinel: fit and focus operations must treat it as "nothing to fit"
/// and no-op (see [`Bbox::is_empty`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    /// Minimum X.
    pub min_x: f64,
    /// Minimum Y.
    pub min_y: f64,
    /// Maximum X.
    pub max_x: f64,
    /// Maximum Y.
    pub max_y: f64,
}

impl Bbox {
    /// The fold identity for [`Bbox::union`]: contains nothing, and the
    /// union with any box yields that box.
    pub const NOTHING: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Creates a box from min/max corners.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a box from a [`kurbo::Rect`].
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y())
    }

    /// Converts into a [`kurbo::Rect`].
    #[must_use]
    pub const fn to_rect(self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// The smallest box containing every given point.
    ///
    /// Returns [`Bbox::NOTHING`] for an empty iterator.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        points
            .into_iter()
            .fold(Self::NOTHING, |acc, pt| acc.include(pt))
    }

    /// Anchor X, identical to `min_x`.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.min_x
    }

    /// Anchor Y, identical to `min_y`.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.min_y
    }

    /// Width of the box.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Geometric center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether this box contains no fittable content.
    ///
    /// True when either extent is zero or negative, or when a corner is
    /// non-finite (as for [`Bbox::NOTHING`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
            || !(self.min_x.is_finite()
                && self.min_y.is_finite()
                && self.max_x.is_finite()
                && self.max_y.is_finite())
    }

    /// Componentwise merge: min of mins, max of maxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the box to contain `pt`.
    #[must_use]
    pub fn include(self, pt: Point) -> Self {
        Self {
            min_x: self.min_x.min(pt.x),
            min_y: self.min_y.min(pt.y),
            max_x: self.max_x.max(pt.x),
            max_y: self.max_y.max(pt.y),
        }
    }

    /// The axis-aligned bounds of this box under an affine transform.
    ///
    /// Transforms the four corners and takes their bounding box, which is
    /// exact for the axis-aligned transforms used by the camera and
    /// conservative under rotation.
    #[must_use]
    pub fn transform(self, affine: Affine) -> Self {
        Self::from_points([
            affine * Point::new(self.min_x, self.min_y),
            affine * Point::new(self.max_x, self.min_y),
            affine * Point::new(self.min_x, self.max_y),
            affine * Point::new(self.max_x, self.max_y),
        ])
    }
}
