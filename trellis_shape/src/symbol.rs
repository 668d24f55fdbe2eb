// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker symbol path templates.
//!
//! Each generator emits an absolute-command SVG path string centered on
//! `(x, y)` with radius `r`. Markers are path primitives under the hood;
//! the symbol name is resolved once at construction time.

/// Resolves a symbol name to its path data.
///
/// Returns `None` for unknown names so the caller can warn and refuse
/// to build the marker.
#[must_use]
pub fn symbol_path(symbol: &str, x: f64, y: f64, r: f64) -> Option<String> {
    match symbol {
        "circle" => Some(circle(x, y, r)),
        "square" => Some(square(x, y, r)),
        "diamond" => Some(diamond(x, y, r)),
        "triangle" => Some(triangle(x, y, r)),
        "triangle-down" => Some(triangle_down(x, y, r)),
        _ => None,
    }
}

/// A circle of radius `r`, drawn as two arc halves.
#[must_use]
pub fn circle(x: f64, y: f64, r: f64) -> String {
    format!(
        "M {},{} A {r},{r} 0 1 0 {},{} A {r},{r} 0 1 0 {},{} Z",
        x - r,
        y,
        x + r,
        y,
        x - r,
        y,
    )
}

/// An axis-aligned square with half-extent `r`.
#[must_use]
pub fn square(x: f64, y: f64, r: f64) -> String {
    format!(
        "M {},{} L {},{} L {},{} L {},{} Z",
        x - r,
        y - r,
        x + r,
        y - r,
        x + r,
        y + r,
        x - r,
        y + r,
    )
}

/// A diamond with vertices `r` away along both axes.
#[must_use]
pub fn diamond(x: f64, y: f64, r: f64) -> String {
    format!(
        "M {},{} L {},{} L {},{} L {},{} Z",
        x - r,
        y,
        x,
        y - r,
        x + r,
        y,
        x,
        y + r,
    )
}

/// An upward-pointing equilateral-ish triangle.
#[must_use]
pub fn triangle(x: f64, y: f64, r: f64) -> String {
    let diff = r * (core::f64::consts::FRAC_PI_3).sin();
    format!(
        "M {},{} L {},{} L {},{} Z",
        x - r,
        y + diff,
        x + r,
        y + diff,
        x,
        y - diff,
    )
}

/// A downward-pointing triangle.
#[must_use]
pub fn triangle_down(x: f64, y: f64, r: f64) -> String {
    let diff = r * (core::f64::consts::FRAC_PI_3).sin();
    format!(
        "M {},{} L {},{} L {},{} Z",
        x - r,
        y - diff,
        x + r,
        y - diff,
        x,
        y + diff,
    )
}
