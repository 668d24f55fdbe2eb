// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Four-sided padding with flexible input forms.

/// Viewport padding accepted as a scalar, a vertical/horizontal pair, or
/// a full four-sided value.
///
/// [`Padding::resolve`] always yields exactly four non-negative numbers
/// in `[top, right, bottom, left]` order:
/// - scalar `p` resolves to `[p, p, p, p]`,
/// - pair `[a, b]` resolves to `[a, b, a, b]`,
/// - a 4-tuple passes through.
///
/// NaN components are treated as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Padding {
    /// The same padding on all four sides.
    Uniform(f64),
    /// Vertical (top/bottom) and horizontal (right/left) padding.
    Symmetric(f64, f64),
    /// Top, right, bottom, and left padding.
    Each(f64, f64, f64, f64),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<[f64; 2]> for Padding {
    fn from([vertical, horizontal]: [f64; 2]) -> Self {
        Self::Symmetric(vertical, horizontal)
    }
}

impl From<[f64; 4]> for Padding {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::Each(top, right, bottom, left)
    }
}

impl Padding {
    /// Resolves to `[top, right, bottom, left]`.
    #[must_use]
    pub fn resolve(self) -> [f64; 4] {
        let expanded = match self {
            Self::Uniform(p) => [p, p, p, p],
            Self::Symmetric(v, h) => [v, h, v, h],
            Self::Each(top, right, bottom, left) => [top, right, bottom, left],
        };
        expanded.map(sanitize)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

#[cfg(test)]
mod tests {
    use super::Padding;

    #[test]
    fn scalar_expands_to_all_sides() {
        assert_eq!(Padding::from(8.0).resolve(), [8.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn pair_expands_vertical_horizontal() {
        assert_eq!(Padding::from([10.0, 20.0]).resolve(), [10.0, 20.0, 10.0, 20.0]);
    }

    #[test]
    fn quadruple_passes_through() {
        assert_eq!(
            Padding::from([1.0, 2.0, 3.0, 4.0]).resolve(),
            [1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn nan_and_negative_components_become_zero() {
        assert_eq!(
            Padding::Each(f64::NAN, -5.0, 3.0, f64::NAN).resolve(),
            [0.0, 0.0, 3.0, 0.0]
        );
    }
}
