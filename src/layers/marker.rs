use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// A single overlay marker.
///
/// Positions are stored in projected Web Mercator coordinates; the
/// geographic-to-projected conversion happens once when the marker is
/// built from caller input. A marker carrying a label renders its text
/// above the icon; a marker without one (the interactive selection
/// marker) renders the icon alone.
///
/// Markers are ephemeral: every refresh rebuilds them from the latest
/// inputs, so they never outlive the data that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    position: Point,
    label: Option<String>,
}

impl Marker {
    /// Creates an unlabeled marker at a projected position.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            label: None,
        }
    }

    /// Attaches a display label, rendered as text above the icon.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}
