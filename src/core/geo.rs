use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// A `[longitude, latitude]` pair in WGS84 degrees.
///
/// This is the ordering used everywhere on the public boundary of the
/// crate: caller-supplied initial coordinates and click selections
/// reported back through the location callback. Internal storage uses
/// projected [`Point`]s instead.
pub type LonLat = [f64; 2];

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a LatLng from a `[longitude, latitude]` pair.
    pub fn from_lon_lat(coords: LonLat) -> Self {
        Self::new(coords[1], coords[0])
    }

    /// Returns the coordinate as a `[longitude, latitude]` pair.
    pub fn to_lon_lat(&self) -> LonLat {
        [self.lng, self.lat]
    }

    /// Validates that the coordinates are within valid ranges.
    /// NaN fails every comparison, so non-finite values are invalid too.
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Calculates the distance in meters to another LatLng using the
    /// Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the range the Mercator projection can represent
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Converts to Web Mercator projection (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + self.lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Creates LatLng from Web Mercator coordinates
    pub fn from_mercator(point: Point) -> Self {
        let lng = Self::wrap_lng((point.x / EARTH_RADIUS).to_degrees());
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor() as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;

        Self::new(x, y, zoom)
    }

    /// Converts tile coordinate to LatLng (northwest corner)
    pub fn to_lat_lng(&self) -> LatLng {
        let n = 2_f64.powi(self.z as i32);
        let lng = self.x as f64 / n * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan();

        LatLng::new(lat_rad.to_degrees(), lng)
    }

    /// Checks if the tile is valid for its zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(-8.114324, -79.039148);
        assert_eq!(coord.lat, -8.114324);
        assert_eq!(coord.lng, -79.039148);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lon_lat_ordering() {
        let coord = LatLng::from_lon_lat([-79.04, -8.12]);
        assert_eq!(coord.lng, -79.04);
        assert_eq!(coord.lat, -8.12);
        assert_eq!(coord.to_lon_lat(), [-79.04, -8.12]);
    }

    #[test]
    fn test_mercator_round_trip() {
        let coords = [
            LatLng::new(0.0, 0.0),
            LatLng::new(-8.114324076752652, -79.03914887833339),
            LatLng::new(40.7128, -74.0060),
            LatLng::new(-33.8688, 151.2093),
            LatLng::new(85.0, 179.9),
            LatLng::new(-85.0, -179.9),
        ];

        for original in coords {
            let projected = original.to_mercator();
            let back = LatLng::from_mercator(projected);
            assert_relative_eq!(back.lat, original.lat, epsilon = 1e-9);
            assert_relative_eq!(back.lng, original.lng, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lat_lng_distance() {
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);
        let distance = nyc.distance_to(&la);

        // Distance should be approximately 3944 km
        assert!((distance - 3944000.0).abs() < 10000.0);

        // Zero distance to itself
        assert_eq!(nyc.distance_to(&nyc), 0.0);
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::NAN).is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_wrap_and_clamp() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::wrap_lng(45.0), 45.0);
        assert_eq!(LatLng::clamp_lat(90.0), 85.0511287798);
        assert_eq!(LatLng::clamp_lat(-90.0), -85.0511287798);
    }

    #[test]
    fn test_point_math() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(0.0, 0.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.add(&b), a);
        assert_eq!(a.subtract(&a), Point::default());
    }

    #[test]
    fn test_tile_coord_conversion() {
        let lat_lng = LatLng::new(-8.114324, -79.039148);
        let tile = TileCoord::from_lat_lng(&lat_lng, 16);
        assert!(tile.is_valid());

        let back = tile.to_lat_lng();
        // Northwest corner of the containing tile, so within one tile span
        assert!((back.lat - lat_lng.lat).abs() < 0.01);
        assert!((back.lng - lat_lng.lng).abs() < 0.01);
    }
}
