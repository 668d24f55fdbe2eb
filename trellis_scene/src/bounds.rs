// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind geometry extents, before any transform is applied.

use kurbo::{BezPath, Shape as _};
use trellis_geom::Bbox;

use crate::attrs::{number_or, AttrKey, AttrMap, AttrValue};
use crate::node::PrimitiveKind;

/// Reference advance width per character, as a fraction of the font size.
///
/// Headless text metric: deterministic, not typographically accurate.
const TEXT_ADVANCE_EM: f64 = 0.6;

/// Default font size when a text node does not carry one.
const DEFAULT_FONT_SIZE: f64 = 16.0;

/// The raw geometry extent of a primitive, ignoring its own and all
/// ancestor transforms.
///
/// Returns `None` for groups (no geometry of their own) and for path
/// data that fails to parse. A not-yet-configured shape yields a
/// degenerate box, which downstream fit operations treat as "no content".
#[must_use]
pub(crate) fn geometry_extent(kind: PrimitiveKind, attrs: &AttrMap) -> Option<Bbox> {
    match kind {
        PrimitiveKind::Group => None,
        PrimitiveKind::Circle => {
            let cx = number_or(attrs, AttrKey::Cx, 0.0);
            let cy = number_or(attrs, AttrKey::Cy, 0.0);
            let r = number_or(attrs, AttrKey::R, 0.0);
            Some(Bbox::new(cx - r, cy - r, cx + r, cy + r))
        }
        PrimitiveKind::Ellipse => {
            let cx = number_or(attrs, AttrKey::Cx, 0.0);
            let cy = number_or(attrs, AttrKey::Cy, 0.0);
            let rx = number_or(attrs, AttrKey::Rx, 0.0);
            let ry = number_or(attrs, AttrKey::Ry, 0.0);
            Some(Bbox::new(cx - rx, cy - ry, cx + rx, cy + ry))
        }
        PrimitiveKind::Rect | PrimitiveKind::Image | PrimitiveKind::Html => {
            let x = number_or(attrs, AttrKey::X, 0.0);
            let y = number_or(attrs, AttrKey::Y, 0.0);
            let width = number_or(attrs, AttrKey::Width, 0.0);
            let height = number_or(attrs, AttrKey::Height, 0.0);
            Some(Bbox::new(x, y, x + width, y + height))
        }
        PrimitiveKind::Line => {
            let x1 = number_or(attrs, AttrKey::X1, 0.0);
            let y1 = number_or(attrs, AttrKey::Y1, 0.0);
            let x2 = number_or(attrs, AttrKey::X2, 0.0);
            let y2 = number_or(attrs, AttrKey::Y2, 0.0);
            Some(Bbox::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)))
        }
        PrimitiveKind::Polygon | PrimitiveKind::Polyline => {
            let points = attrs.get(&AttrKey::Points).and_then(AttrValue::as_points)?;
            if points.is_empty() {
                return None;
            }
            Some(Bbox::from_points(
                points.iter().map(|&(x, y)| kurbo::Point::new(x, y)),
            ))
        }
        PrimitiveKind::Path => {
            let data = attrs.get(&AttrKey::Path).and_then(AttrValue::as_text)?;
            let path = BezPath::from_svg(data).ok()?;
            if path.elements().is_empty() {
                return None;
            }
            Some(Bbox::from_rect(path.bounding_box()))
        }
        PrimitiveKind::Text => {
            let text = attrs.get(&AttrKey::Text).and_then(AttrValue::as_text)?;
            let x = number_or(attrs, AttrKey::X, 0.0);
            let y = number_or(attrs, AttrKey::Y, 0.0);
            let font_size = number_or(attrs, AttrKey::FontSize, DEFAULT_FONT_SIZE);
            let lines = text.split('\n').count() as f64;
            let longest = text
                .split('\n')
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0) as f64;
            let width = longest * font_size * TEXT_ADVANCE_EM;
            let height = lines * font_size;
            // Alphabetic baseline: the anchor sits on the last baseline.
            Some(Bbox::new(x, y - height, x + width, y))
        }
    }
}
