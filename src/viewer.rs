use crate::core::geo::{LatLng, LonLat, Point};
use crate::core::viewport::Viewport;
use crate::data::building::Building;
use crate::input::events::{EventHandled, InputEvent};
use crate::layers::{marker::Marker, source::MarkerSource};
use crate::tiles::source::{OpenStreetMapSource, TileSource};

/// Callback invoked with `[longitude, latitude]` when the user clicks
/// the map surface.
pub type LocationSelectCallback = Box<dyn FnMut(LonLat)>;

/// The map-viewer component.
///
/// Owns the camera, the marker overlay, and the geographic/projected
/// transform boundary. The overlay is always a pure function of the
/// latest `(buildings, initial_coordinates)` inputs plus at most one
/// live click selection; every input change rebuilds it from scratch,
/// so stale markers never survive a refresh.
///
/// The camera is centered once, at construction: on the initial
/// coordinates if given, else on the default site. Later input changes
/// move markers but never the camera.
///
/// ```
/// use siteview::{Building, MapViewer};
///
/// let viewer = MapViewer::new()
///     .with_buildings(vec![Building::new(-8.11, -79.03, "Building A")]);
/// assert_eq!(viewer.markers().len(), 1);
/// ```
pub struct MapViewer {
    viewport: Viewport,
    markers: MarkerSource,
    buildings: Vec<Building>,
    initial_coordinates: Option<LonLat>,
    on_location_select: Option<LocationSelectCallback>,
    tile_source: Box<dyn TileSource>,
}

impl MapViewer {
    /// Creates a viewer with an empty overlay, the default camera, and
    /// OpenStreetMap as the base layer.
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            markers: MarkerSource::new(),
            buildings: Vec::new(),
            initial_coordinates: None,
            on_location_select: None,
            tile_source: Box::new(OpenStreetMapSource::new()),
        }
    }

    /// Sets the building list (construction-time form of
    /// [`Self::set_buildings`]).
    pub fn with_buildings(mut self, buildings: Vec<Building>) -> Self {
        self.set_buildings(buildings);
        self
    }

    /// Sets the initial coordinates and centers the camera on them.
    /// This is the only place the camera follows the inputs; the
    /// reactive setter deliberately leaves the framing alone.
    pub fn with_initial_coordinates(mut self, coordinates: LonLat) -> Self {
        self.viewport.set_center(LatLng::from_lon_lat(coordinates));
        self.set_initial_coordinates(Some(coordinates));
        self
    }

    /// Enables click-to-select and registers the selection callback.
    pub fn on_location_select<F>(mut self, callback: F) -> Self
    where
        F: FnMut(LonLat) + 'static,
    {
        self.set_on_location_select(callback);
        self
    }

    /// Sets the surface size in pixels.
    pub fn with_size(mut self, size: Point) -> Self {
        self.viewport.set_size(size);
        self
    }

    /// Replaces the base tile layer.
    pub fn with_tile_source<S>(mut self, source: S) -> Self
    where
        S: TileSource + 'static,
    {
        self.tile_source = Box::new(source);
        self
    }

    /// Replaces the building list and rebuilds the overlay.
    pub fn set_buildings(&mut self, buildings: Vec<Building>) {
        self.buildings = buildings;
        self.refresh();
    }

    /// Replaces the initial coordinates and rebuilds the overlay. The
    /// camera keeps its construction-time framing.
    pub fn set_initial_coordinates(&mut self, coordinates: Option<LonLat>) {
        self.initial_coordinates = coordinates;
        self.refresh();
    }

    /// Replaces the selection callback. The click path always reads the
    /// latest value from this slot, so swapping closures mid-life routes
    /// subsequent clicks to the new one.
    pub fn set_on_location_select<F>(&mut self, callback: F)
    where
        F: FnMut(LonLat) + 'static,
    {
        self.on_location_select = Some(Box::new(callback));
        self.refresh();
    }

    /// Disables click-to-select.
    pub fn clear_on_location_select(&mut self) {
        self.on_location_select = None;
        self.refresh();
    }

    /// Rebuilds the overlay from the current inputs.
    ///
    /// One labeled marker per building; if there are no buildings but
    /// initial coordinates are set, exactly one unlabeled marker there;
    /// otherwise nothing. Runs as a single clear-then-bulk-insert pass.
    fn refresh(&mut self) {
        if !self.buildings.is_empty() {
            let markers: Vec<Marker> = self
                .buildings
                .iter()
                .map(|building| {
                    let marker = Marker::new(building.position().to_mercator());
                    if building.name.is_empty() {
                        marker
                    } else {
                        marker.with_label(building.name.clone())
                    }
                })
                .collect();
            self.markers.set_markers(markers);
        } else if let Some(coordinates) = self.initial_coordinates {
            let position = LatLng::from_lon_lat(coordinates).to_mercator();
            self.markers.set_markers([Marker::new(position)]);
        } else {
            self.markers.clear();
        }

        log::debug!("overlay refreshed: {} markers", self.markers.len());
    }

    /// Routes an input event to the viewer.
    pub fn handle_event(&mut self, event: InputEvent) -> EventHandled {
        match event {
            InputEvent::Click { position, .. } => self.handle_click(position),
            InputEvent::Resize { size } => {
                self.viewport.set_size(size);
                EventHandled::Handled
            }
            _ => EventHandled::NotHandled,
        }
    }

    /// Click-to-select, active only when a selection callback is set:
    /// converts the surface-local click position to `[lon, lat]`,
    /// invokes the callback, and replaces the whole overlay with a
    /// single unlabeled marker at the click position. The building list
    /// is neither consulted nor mutated here.
    pub fn handle_click(&mut self, position: Point) -> EventHandled {
        if self.on_location_select.is_none() {
            return EventHandled::NotHandled;
        }

        let projected = self.viewport.screen_to_mercator(&position);
        let coordinates = LatLng::from_mercator(projected).to_lon_lat();

        if let Some(callback) = self.on_location_select.as_mut() {
            callback(coordinates);
        }

        self.markers.set_markers([Marker::new(projected)]);
        log::debug!(
            "location selected at lng {:.6}, lat {:.6}",
            coordinates[0],
            coordinates[1]
        );
        EventHandled::Handled
    }

    /// The current overlay marker set.
    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn initial_coordinates(&self) -> Option<LonLat> {
        self.initial_coordinates
    }

    pub fn tile_source(&self) -> &dyn TileSource {
        self.tile_source.as_ref()
    }

    /// Whether click-to-select is currently enabled.
    pub fn has_location_select(&self) -> bool {
        self.on_location_select.is_some()
    }
}

impl Default for MapViewer {
    fn default() -> Self {
        Self::new()
    }
}
