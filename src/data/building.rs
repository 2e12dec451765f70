use crate::core::geo::LatLng;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// A building entry as supplied by the caller: a WGS84 position plus a
/// display name rendered as the marker label.
///
/// The serde aliases match the field names the facilities REST API uses
/// for building records, so responses can be deserialized directly into
/// a `Vec<Building>` without an intermediate DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    #[serde(alias = "ubicacion_lat")]
    pub lat: f64,
    #[serde(alias = "ubicacion_lng")]
    pub lng: f64,
    #[serde(alias = "nombre")]
    pub name: String,
}

impl Building {
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// The building's position as a geographic coordinate.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl From<&Building> for geo_types::Point<f64> {
    fn from(building: &Building) -> Self {
        // geo-types convention: x = longitude, y = latitude
        geo_types::Point::new(building.lng, building.lat)
    }
}

/// Parses a building list from a JSON payload.
///
/// Coordinates are checked at this boundary: entries with non-finite or
/// out-of-range positions are rejected rather than silently handed to
/// the viewer (which itself does no validation).
pub fn buildings_from_json(payload: &str) -> Result<Vec<Building>> {
    let buildings: Vec<Building> = serde_json::from_str(payload)?;

    for building in &buildings {
        if !building.position().is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "building '{}' has position ({}, {})",
                building.name, building.lat, building.lng
            )));
        }
    }

    log::debug!("parsed {} buildings from payload", buildings.len());
    Ok(buildings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_position() {
        let building = Building::new(-8.11, -79.03, "Building A");
        let position = building.position();
        assert_eq!(position.lat, -8.11);
        assert_eq!(position.lng, -79.03);
    }

    #[test]
    fn test_parse_api_field_names() {
        let payload = r#"[
            {"nombre": "Pabellón C", "ubicacion_lat": -8.114, "ubicacion_lng": -79.039},
            {"nombre": "Biblioteca", "ubicacion_lat": -8.116, "ubicacion_lng": -79.041}
        ]"#;

        let buildings = buildings_from_json(payload).unwrap();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].name, "Pabellón C");
        assert_eq!(buildings[1].lat, -8.116);
    }

    #[test]
    fn test_parse_short_field_names() {
        let payload = r#"[{"name": "Annex", "lat": 1.0, "lng": 2.0}]"#;
        let buildings = buildings_from_json(payload).unwrap();
        assert_eq!(buildings[0].name, "Annex");
    }

    #[test]
    fn test_reject_out_of_range_coordinates() {
        let payload = r#"[{"name": "Nowhere", "lat": 120.0, "lng": 0.0}]"#;
        let err = buildings_from_json(payload).unwrap_err();
        assert!(matches!(err, MapError::InvalidCoordinates(_)));
    }

    #[test]
    fn test_reject_malformed_payload() {
        let err = buildings_from_json("not json").unwrap_err();
        assert!(matches!(err, MapError::Serialization(_)));
    }

    #[test]
    fn test_geo_types_conversion() {
        let building = Building::new(-8.11, -79.03, "Building A");
        let point: geo_types::Point<f64> = (&building).into();
        assert_eq!(point.x(), -79.03);
        assert_eq!(point.y(), -8.11);
    }
}
