use crate::core::constants::{
    DEFAULT_VIEWPORT_HEIGHT, LABEL_FONT_SIZE, LABEL_OFFSET_Y, MARKER_ICON_RADIUS,
};
use crate::core::geo::Point;
use crate::input::events::{InputEvent, MouseButton};
use crate::viewer::MapViewer;
use egui::{Align2, Color32, FontId, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

/// egui rendering surface for a [`MapViewer`].
///
/// Takes the full available width and a fixed height (500px unless
/// overridden), draws the base layer, one icon per overlay marker with
/// labels offset above the icons, and forwards pointer clicks and
/// resizes to the viewer.
///
/// ```no_run
/// # use siteview::{MapViewer, MapWidget};
/// # fn draw(ui: &mut egui::Ui, viewer: &mut MapViewer) {
/// ui.add(MapWidget::new(viewer));
/// # }
/// ```
pub struct MapWidget<'a> {
    viewer: &'a mut MapViewer,
    height: f32,
    show_attribution: bool,
}

impl<'a> MapWidget<'a> {
    pub fn new(viewer: &'a mut MapViewer) -> Self {
        Self {
            viewer,
            height: DEFAULT_VIEWPORT_HEIGHT as f32,
            show_attribution: true,
        }
    }

    /// Overrides the fixed surface height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Toggles the attribution line in the bottom-left corner.
    pub fn attribution(mut self, show: bool) -> Self {
        self.show_attribution = show;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let desired_size = Vec2::new(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

        // Keep the viewport in sync with the allotted region
        let size = Point::new(rect.width() as f64, rect.height() as f64);
        if self.viewer.viewport().size.distance_to(&size) > 1.0 {
            self.viewer.handle_event(InputEvent::Resize { size });
        }

        let painter = ui.painter_at(rect);

        // Base layer
        painter.rect_filled(rect, 0.0, Color32::from_rgb(229, 227, 223));
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::from_gray(180)));

        // Markers, icon glyph at constant scale plus optional label
        for marker in self.viewer.markers() {
            let screen = self.viewer.viewport().mercator_to_screen(&marker.position());
            let pos = Pos2::new(
                rect.min.x + screen.x as f32,
                rect.min.y + screen.y as f32,
            );
            if !rect.expand(MARKER_ICON_RADIUS).contains(pos) {
                continue;
            }

            painter.circle_filled(pos, MARKER_ICON_RADIUS, Color32::from_rgb(214, 69, 65));
            painter.circle_stroke(pos, MARKER_ICON_RADIUS, Stroke::new(1.5, Color32::WHITE));

            if let Some(label) = marker.label() {
                painter.text(
                    pos + Vec2::new(0.0, LABEL_OFFSET_Y),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(LABEL_FONT_SIZE),
                    Color32::BLACK,
                );
            }
        }

        if self.show_attribution {
            let attribution = self.viewer.tile_source().attribution();
            if !attribution.is_empty() {
                painter.text(
                    rect.left_bottom() + Vec2::new(5.0, -4.0),
                    Align2::LEFT_BOTTOM,
                    attribution,
                    FontId::proportional(10.0),
                    Color32::from_gray(120),
                );
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = Point::new(
                    (pointer.x - rect.min.x) as f64,
                    (pointer.y - rect.min.y) as f64,
                );
                self.viewer.handle_event(InputEvent::Click {
                    position: local,
                    button: MouseButton::Left,
                });
            }
        }

        response
    }
}

impl Widget for MapWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}
