//! Prelude module for common siteview types
//!
//! Re-exports the most commonly used types for easy importing with
//! `use siteview::prelude::*;`

pub use crate::core::{
    constants,
    geo::{LatLng, LonLat, Point, TileCoord},
    viewport::Viewport,
};

pub use crate::layers::{marker::Marker, source::MarkerSource};

pub use crate::input::events::{EventHandled, InputEvent, MouseButton};

pub use crate::data::building::{buildings_from_json, Building};

pub use crate::tiles::source::{OpenStreetMapSource, TileSource};

pub use crate::viewer::{LocationSelectCallback, MapViewer};

#[cfg(feature = "egui")]
pub use crate::ui::widget::MapWidget;

pub use crate::{MapError, Result};
