// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat 3x3 affine matrices and their decomposition.
//!
//! The renderer contract stores a local transform as nine numbers in
//! column-basis order: indices 0/1 hold the X basis column, 3/4 the Y
//! basis column, and 6/7 the absolute translation. The last column is
//! the homogeneous `[0, 0, 1]`.

use kurbo::{Affine, Point};

/// Renderer-facing 3x3 affine transform as a flat array.
///
/// Translation lives at indices 6 and 7. Use [`decompose`] to recover
/// translation, scale, and rotation, and [`to_affine`]/[`from_affine`] to
/// interoperate with [`kurbo::Affine`].
pub type Matrix = [f64; 9];

/// The identity matrix.
///
/// Used as a reset target before measuring a shape's local bounding box,
/// which guarantees the result is independent of any applied rotation,
/// scale, or translation of the shape itself.
pub const UNIT_MATRIX: Matrix = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Translation, scale, and rotation recovered from a [`Matrix`].
///
/// The recovery is unique up to the usual sign convention: a negative
/// scale pairs with a rotation of the opposite half-turn. Identity and
/// pure-translation inputs decompose to `rotation = 0`, `scale = (1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Absolute X translation (matrix index 6).
    pub translate_x: f64,
    /// Absolute Y translation (matrix index 7).
    pub translate_y: f64,
    /// Euclidean norm of the X basis column.
    pub scale_x: f64,
    /// Euclidean norm of the Y basis column.
    pub scale_y: f64,
    /// Rotation in radians, from the X basis column.
    pub rotation: f64,
}

/// Decomposes a matrix into translation, per-axis scale, and rotation.
#[must_use]
pub fn decompose(m: &Matrix) -> Decomposed {
    Decomposed {
        translate_x: m[6],
        translate_y: m[7],
        scale_x: m[0].hypot(m[1]),
        scale_y: m[3].hypot(m[4]),
        rotation: m[1].atan2(m[0]),
    }
}

/// Rebuilds a matrix from a [`Decomposed`] transform.
#[must_use]
pub fn compose(d: &Decomposed) -> Matrix {
    let (sin, cos) = d.rotation.sin_cos();
    [
        cos * d.scale_x,
        sin * d.scale_x,
        0.0,
        -sin * d.scale_y,
        cos * d.scale_y,
        0.0,
        d.translate_x,
        d.translate_y,
        1.0,
    ]
}

/// Converts a [`kurbo::Affine`] into the flat matrix layout.
#[must_use]
pub fn from_affine(affine: Affine) -> Matrix {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    [a, b, 0.0, c, d, 0.0, e, f, 1.0]
}

/// Converts the flat matrix layout into a [`kurbo::Affine`].
#[must_use]
pub fn to_affine(m: &Matrix) -> Affine {
    Affine::new([m[0], m[1], m[3], m[4], m[6], m[7]])
}

/// Applies a matrix to a point.
#[must_use]
pub fn transform_point(m: &Matrix, pt: Point) -> Point {
    to_affine(m) * pt
}

#[cfg(test)]
mod tests {
    use super::{compose, decompose, from_affine, to_affine, transform_point, Decomposed, UNIT_MATRIX};
    use kurbo::{Affine, Point};

    #[test]
    fn identity_is_stable() {
        let d = decompose(&UNIT_MATRIX);
        assert_eq!(d.translate_x, 0.0);
        assert_eq!(d.translate_y, 0.0);
        assert_eq!(d.scale_x, 1.0);
        assert_eq!(d.scale_y, 1.0);
        assert_eq!(d.rotation, 0.0);
    }

    #[test]
    fn pure_translation_is_stable() {
        let m = from_affine(Affine::translate((12.5, -7.0)));
        let d = decompose(&m);
        assert_eq!(d.translate_x, 12.5);
        assert_eq!(d.translate_y, -7.0);
        assert_eq!(d.scale_x, 1.0);
        assert_eq!(d.scale_y, 1.0);
        assert_eq!(d.rotation, 0.0);
    }

    #[test]
    fn compose_round_trips_decompose() {
        let original = Decomposed {
            translate_x: 3.0,
            translate_y: 4.0,
            scale_x: 2.0,
            scale_y: 0.5,
            rotation: core::f64::consts::FRAC_PI_6,
        };
        let back = decompose(&compose(&original));
        assert!((back.translate_x - original.translate_x).abs() < 1e-12);
        assert!((back.translate_y - original.translate_y).abs() < 1e-12);
        assert!((back.scale_x - original.scale_x).abs() < 1e-12);
        assert!((back.scale_y - original.scale_y).abs() < 1e-12);
        assert!((back.rotation - original.rotation).abs() < 1e-12);
    }

    #[test]
    fn affine_round_trip() {
        let affine = Affine::rotate(0.3) * Affine::scale(2.0) * Affine::translate((5.0, 6.0));
        let back = to_affine(&from_affine(affine));
        let a = affine.as_coeffs();
        let b = back.as_coeffs();
        for i in 0..6 {
            assert!((a[i] - b[i]).abs() < 1e-12, "coefficient {i} drifted");
        }
    }

    #[test]
    fn transform_point_matches_affine() {
        let affine = Affine::rotate(1.0) * Affine::translate((2.0, 3.0));
        let m = from_affine(affine);
        let pt = Point::new(7.0, -1.0);
        let expected = affine * pt;
        let got = transform_point(&m, pt);
        assert!((got.x - expected.x).abs() < 1e-12);
        assert!((got.y - expected.y).abs() < 1e-12);
    }
}
