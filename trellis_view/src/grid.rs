// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid overlay tiling, recomputed whenever the viewport is resized.

/// Tiling model of the background grid overlay.
///
/// The grid extent derives from the viewport size, so
/// [`Grid::retile`] runs on every size change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    cell: f64,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Default cell edge in CSS pixels.
    pub const DEFAULT_CELL: f64 = 20.0;

    /// Creates a grid tiled for the given viewport.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let mut grid = Self {
            cell: Self::DEFAULT_CELL,
            cols: 0,
            rows: 0,
        };
        grid.retile(width, height);
        grid
    }

    /// Cell edge length.
    #[must_use]
    pub fn cell(&self) -> f64 {
        self.cell
    }

    /// Number of columns covering the viewport.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows covering the viewport.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Recomputes the tiling for a new viewport size.
    pub fn retile(&mut self, width: f64, height: f64) {
        self.cols = (width.max(0.0) / self.cell).ceil() as usize;
        self.rows = (height.max(0.0) / self.cell).ceil() as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn tiling_covers_the_viewport() {
        let grid = Grid::new(500.0, 310.0);
        assert_eq!(grid.cols(), 25);
        assert_eq!(grid.rows(), 16);
    }

    #[test]
    fn retile_tracks_resizes() {
        let mut grid = Grid::new(100.0, 100.0);
        grid.retile(45.0, 0.0);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.rows(), 0);
    }
}
