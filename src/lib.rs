//! # siteview
//!
//! An embeddable building-map viewer for facilities dashboards.
//!
//! The crate centers on [`MapViewer`]: a headless component that owns a
//! camera, a single mutable marker overlay, and the transform boundary
//! between WGS84 longitude/latitude and the Web Mercator coordinates used
//! internally. Callers feed it a list of labeled buildings and/or an
//! initial coordinate, and optionally receive click selections back as
//! `[longitude, latitude]` pairs.
//!
//! Rendering is pluggable: the viewer exposes its marker set and viewport
//! to any backend, and an egui widget is provided behind the `egui`
//! feature.

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod tiles;
#[cfg(feature = "egui")]
pub mod ui;
pub mod viewer;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LonLat, Point, TileCoord},
    viewport::Viewport,
};

pub use crate::layers::{marker::Marker, source::MarkerSource};

pub use crate::input::events::{EventHandled, InputEvent, MouseButton};

pub use crate::data::building::{buildings_from_json, Building};

pub use crate::tiles::source::{OpenStreetMapSource, TileSource};

pub use crate::viewer::MapViewer;

#[cfg(feature = "egui")]
pub use crate::ui::widget::MapWidget;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;
