//! Engine-wide constants, mostly lifted from common web-map conventions
//! and the facilities-site defaults the viewer ships with.

use crate::core::geo::LatLng;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Default camera center when no initial coordinates are supplied
/// (the campus the dashboards were built around).
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: -8.114324076752652,
    lng: -79.03914887833339,
};

/// Default camera zoom. Street scale, appropriate for picking out a
/// single building.
pub const DEFAULT_ZOOM: f64 = 16.0;

/// Zoom limits for the camera.
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 19.0;

/// Default viewport size in pixels when the host has not sized the
/// surface yet. Width is normally overridden by the host layout; the
/// height matches the fixed-height region the dashboards allot.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 500.0;

/// Marker icon radius in pixels (constant scale, zoom-independent).
pub const MARKER_ICON_RADIUS: f32 = 6.0;

/// Vertical offset of a marker label relative to its icon, in pixels.
/// Negative is up; labels sit above the icon.
pub const LABEL_OFFSET_Y: f32 = -20.0;

/// Marker label font size in pixels.
pub const LABEL_FONT_SIZE: f32 = 12.0;
