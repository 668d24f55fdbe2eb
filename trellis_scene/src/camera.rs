// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene camera: a viewport-relative transform, not a content mutation.

use kurbo::Point;

/// Camera state applied to the whole scene to produce the visible frame.
///
/// `position` is the model-space point shown at the canvas center;
/// `zoom` is the uniform scale factor (always `> 0`); the focal point
/// tracks the position for the orthographic 2D camera. Moving or zooming
/// the camera never changes any node's bounds.
///
/// Camera state is created with the scene, reset only by explicit calls,
/// and destroyed with it. Zoom bounds are a view-controller concern: the
/// camera itself accepts any positive zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    zoom: f64,
    position: Point,
    focal_point: Point,
}

impl Camera {
    pub(crate) fn new(position: Point) -> Self {
        Self {
            zoom: 1.0,
            position,
            focal_point: position,
        }
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor. Non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.0 {
            self.zoom = zoom;
        }
    }

    /// Model-space point currently at the canvas center.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Sets the camera position; the focal point follows.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.focal_point = position;
    }

    /// Current focal point.
    #[must_use]
    pub fn focal_point(&self) -> Point {
        self.focal_point
    }

    /// Sets the focal point independently of the position.
    pub fn set_focal_point(&mut self, focal_point: Point) {
        self.focal_point = focal_point;
    }
}

#[cfg(test)]
mod tests {
    use super::Camera;
    use kurbo::Point;

    #[test]
    fn non_positive_zoom_is_rejected() {
        let mut camera = Camera::new(Point::new(250.0, 250.0));
        camera.set_zoom(2.0);
        camera.set_zoom(0.0);
        camera.set_zoom(-1.0);
        assert_eq!(camera.zoom(), 2.0);
    }

    #[test]
    fn focal_point_follows_position() {
        let mut camera = Camera::new(Point::ZERO);
        camera.set_position(Point::new(10.0, 20.0));
        assert_eq!(camera.focal_point(), Point::new(10.0, 20.0));
    }
}
