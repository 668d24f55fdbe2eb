// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed attribute keys and values for scene nodes.
//!
//! The underlying primitives store their style and geometry as a single
//! attribute map. Keys are a closed enum rather than strings so the
//! adapter layer's classification tables (shared attributes, arrow keys,
//! clear-on-unset keys) are checked at compile time.

use hashbrown::HashMap;

/// Attribute name on a scene node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrKey {
    /// Anchor or offset X.
    X,
    /// Anchor or offset Y.
    Y,
    /// Depth coordinate; meaningless for 2D shapes but accepted and stored.
    Z,
    /// Circle/ellipse center X.
    Cx,
    /// Circle/ellipse center Y.
    Cy,
    /// Circle radius.
    R,
    /// Ellipse X radius.
    Rx,
    /// Ellipse Y radius.
    Ry,
    /// Rect/image/html width.
    Width,
    /// Rect/image/html height.
    Height,
    /// Rect corner radius.
    Radius,
    /// Line start X.
    X1,
    /// Line start Y.
    Y1,
    /// Line end X.
    X2,
    /// Line end Y.
    Y2,
    /// Polygon/polyline vertices.
    Points,
    /// SVG path data.
    Path,
    /// Image source.
    Img,
    /// Text content.
    Text,
    /// Font size in pixels.
    FontSize,
    /// Font family.
    FontFamily,
    /// Font weight.
    FontWeight,
    /// Font variant.
    FontVariant,
    /// Font style.
    FontStyle,
    /// Horizontal text alignment.
    TextAlign,
    /// Text baseline.
    TextBaseline,
    /// Marker symbol name.
    Symbol,
    /// Fill color.
    Fill,
    /// Stroke color.
    Stroke,
    /// Stroke width.
    LineWidth,
    /// Extra invisible stroke width for hit testing.
    LineAppendWidth,
    /// Dash pattern.
    LineDash,
    /// Pointer cursor.
    Cursor,
    /// Overall opacity.
    Opacity,
    /// Fill opacity.
    FillOpacity,
    /// Stroke opacity.
    StrokeOpacity,
    /// Shadow color.
    ShadowColor,
    /// Shadow blur radius.
    ShadowBlur,
    /// Shadow X offset.
    ShadowOffsetX,
    /// Shadow Y offset.
    ShadowOffsetY,
    /// Whether the shape can act as a drag source.
    Draggable,
    /// Whether the shape can act as a drop target.
    Droppable,
    /// Rotation applied at creation, in radians.
    Rotate,
    /// Pseudo-key rerouted to the local transform by the adapter layer.
    Matrix,
}

/// Attribute value on a scene node.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A numeric value.
    Number(f64),
    /// A string value (text content, colors, cursor names, symbols).
    Text(String),
    /// A boolean value.
    Bool(bool),
    /// A vertex list for polygons and polylines.
    Points(Vec<(f64, f64)>),
}

impl AttrValue {
    /// The numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, if this is a bool.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The vertex list, if this is a point list.
    #[must_use]
    pub fn as_points(&self) -> Option<&[(f64, f64)]> {
        match self {
            Self::Points(pts) => Some(pts),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<(f64, f64)>> for AttrValue {
    fn from(value: Vec<(f64, f64)>) -> Self {
        Self::Points(value)
    }
}

/// Attribute map of a scene node.
pub type AttrMap = HashMap<AttrKey, AttrValue>;

/// Reads a numeric attribute, falling back to `default` when absent or
/// non-numeric.
#[must_use]
pub fn number_or(attrs: &AttrMap, key: AttrKey, default: f64) -> f64 {
    attrs.get(&key).and_then(AttrValue::as_number).unwrap_or(default)
}
