use crate::core::constants::{
    DEFAULT_CENTER, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DEFAULT_ZOOM, MAX_ZOOM,
    MIN_ZOOM, TILE_SIZE,
};
use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Meters around the equator; the width of the Web Mercator world.
const EQUATOR_CIRCUMFERENCE: f64 = 40_075_016.685_578_49;

/// The camera: center, zoom, and surface size in pixels.
///
/// The viewport anchors the conversion between projected Web Mercator
/// meters and surface-local pixel coordinates. Its center is fixed at
/// viewer construction and is deliberately not touched by marker
/// refreshes; only the surface size tracks the host layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
}

impl Viewport {
    /// Creates a new viewport, clamping zoom to the supported range.
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            size,
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = center;
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Sets the viewport size in pixels
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Gets the resolution in projected meters per pixel at the current
    /// zoom level (256px world at zoom 0).
    pub fn resolution(&self) -> f64 {
        EQUATOR_CIRCUMFERENCE / (TILE_SIZE as f64 * self.scale())
    }

    /// Converts a projected Web Mercator point to surface-local pixel
    /// coordinates (origin at the top-left corner of the surface).
    pub fn mercator_to_screen(&self, point: &Point) -> Point {
        let center = self.center.to_mercator();
        let res = self.resolution();
        Point::new(
            self.size.x / 2.0 + (point.x - center.x) / res,
            self.size.y / 2.0 - (point.y - center.y) / res,
        )
    }

    /// Converts surface-local pixel coordinates back to a projected Web
    /// Mercator point. Exact inverse of [`Self::mercator_to_screen`].
    pub fn screen_to_mercator(&self, pixel: &Point) -> Point {
        let center = self.center.to_mercator();
        let res = self.resolution();
        Point::new(
            center.x + (pixel.x - self.size.x / 2.0) * res,
            center.y - (pixel.y - self.size.y / 2.0) * res,
        )
    }

    /// Converts a geographical coordinate to surface pixel coordinates
    pub fn lat_lng_to_screen(&self, lat_lng: &LatLng) -> Point {
        self.mercator_to_screen(&lat_lng.to_mercator())
    }

    /// Converts surface pixel coordinates back to a geographical coordinate
    pub fn screen_to_lat_lng(&self, pixel: &Point) -> LatLng {
        LatLng::from_mercator(self.screen_to_mercator(pixel))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            DEFAULT_CENTER,
            DEFAULT_ZOOM,
            Point::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(-8.114324, -79.039148),
            16.0,
            Point::new(800.0, 500.0),
        );

        assert_eq!(viewport.zoom, 16.0);
        assert_eq!(viewport.center.lat, -8.114324);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_default_viewport_is_site_default() {
        let viewport = Viewport::default();
        assert_eq!(viewport.zoom, 16.0);
        assert_relative_eq!(viewport.center.lng, -79.03914887833339);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(-3.0);
        assert_eq!(viewport.zoom, 0.0);
        viewport.set_zoom(50.0);
        assert_eq!(viewport.zoom, 19.0);
    }

    #[test]
    fn test_center_maps_to_surface_midpoint() {
        let viewport = Viewport::default();
        let screen = viewport.lat_lng_to_screen(&viewport.center);
        assert_relative_eq!(screen.x, viewport.size.x / 2.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, viewport.size.y / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_round_trip() {
        let viewport = Viewport::default();
        let pixels = [
            Point::new(0.0, 0.0),
            Point::new(400.0, 250.0),
            Point::new(799.0, 499.0),
            Point::new(123.4, 456.7),
        ];

        for pixel in pixels {
            let projected = viewport.screen_to_mercator(&pixel);
            let back = viewport.mercator_to_screen(&projected);
            assert_relative_eq!(back.x, pixel.x, epsilon = 1e-6);
            assert_relative_eq!(back.y, pixel.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_resolution_halves_per_zoom_level() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(10.0);
        let coarse = viewport.resolution();
        viewport.set_zoom(11.0);
        assert_relative_eq!(viewport.resolution(), coarse / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_resize_keeps_center_anchored() {
        let mut viewport = Viewport::default();
        let before = viewport.lat_lng_to_screen(&viewport.center);
        assert_relative_eq!(before.x, 400.0, epsilon = 1e-6);

        viewport.set_size(Point::new(1000.0, 500.0));
        let after = viewport.lat_lng_to_screen(&viewport.center);
        assert_relative_eq!(after.x, 500.0, epsilon = 1e-6);
    }
}
