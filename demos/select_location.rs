//! Headless click-to-select walkthrough: builds a viewer the way the
//! building form does, simulates a couple of clicks, and prints the
//! coordinates reported through the selection callback.

use std::cell::RefCell;
use std::rc::Rc;

use siteview::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let selected: Rc<RefCell<Option<LonLat>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&selected);

    let mut viewer = MapViewer::new()
        .with_initial_coordinates([-79.03914887833339, -8.114324076752652])
        .on_location_select(move |coords| {
            *slot.borrow_mut() = Some(coords);
        });

    println!(
        "camera: lat {:.6}, lng {:.6}, zoom {}",
        viewer.viewport().center.lat,
        viewer.viewport().center.lng,
        viewer.viewport().zoom
    );

    let center_tile = TileCoord::from_lat_lng(&viewer.viewport().center, viewer.viewport().zoom as u8);
    println!("base layer tile at camera center: {}", viewer.tile_source().url(center_tile));

    for position in [Point::new(400.0, 250.0), Point::new(120.0, 80.0)] {
        viewer.handle_event(InputEvent::Click {
            position,
            button: MouseButton::Left,
        });

        let coords =
            (*selected.borrow()).ok_or_else(|| anyhow::anyhow!("callback was not invoked"))?;
        println!(
            "clicked at pixel ({}, {}) -> lng {:.6}, lat {:.6} ({} marker on the overlay)",
            position.x,
            position.y,
            coords[0],
            coords[1],
            viewer.markers().len()
        );
    }

    Ok(())
}
