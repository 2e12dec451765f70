//! Interactive building browser: renders a campus building list on the
//! map widget and echoes click selections below it.
//!
//! Run with `cargo run --example building_browser --features egui`.

use std::cell::RefCell;
use std::rc::Rc;

use siteview::prelude::*;

struct BrowserApp {
    viewer: MapViewer,
    selected: Rc<RefCell<Option<LonLat>>>,
}

impl BrowserApp {
    fn new() -> Self {
        let selected: Rc<RefCell<Option<LonLat>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&selected);

        let viewer = MapViewer::new()
            .with_buildings(vec![
                Building::new(-8.1131, -79.0385, "Pabellón A"),
                Building::new(-8.1145, -79.0393, "Pabellón C"),
                Building::new(-8.1152, -79.0401, "Biblioteca"),
            ])
            .on_location_select(move |coords| {
                *slot.borrow_mut() = Some(coords);
            });

        Self { viewer, selected }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Buildings");
            ui.add(MapWidget::new(&mut self.viewer));

            if let Some(coords) = *self.selected.borrow() {
                ui.label(format!("Lat: {:.6}, Lng: {:.6}", coords[1], coords[0]));
            } else {
                ui.label("Click the map to select a location");
            }
        });
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Building browser",
        options,
        Box::new(|_cc| Box::new(BrowserApp::new())),
    )
}
