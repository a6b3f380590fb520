use eframe::egui::TextEdit;

use alignment::reticle::ReticleOrientation;

use crate::app_data::{AppData, Coordinate};
use crate::gui::Gui;

#[derive(Debug, Default)]
pub struct LocationUi;

impl LocationUi {
    pub fn render(&mut self, gui: &mut Gui<'_>, app_data: &mut AppData) {
        gui.horizontal(|gui| {
            for coordinate in [Coordinate::Latitude, Coordinate::Longitude] {
                Self::coordinate_field(gui, app_data, coordinate);
            }

            let mut inverted = app_data.orientation == ReticleOrientation::Inverted;
            let response = gui
                .ui()
                .checkbox(&mut inverted, "Inverted")
                .on_hover_text("Show the sky as seen through an inverting polar scope");
            if response.changed() {
                app_data.set_orientation(if inverted {
                    ReticleOrientation::Inverted
                } else {
                    ReticleOrientation::Direct
                });
            }
        });
    }

    fn coordinate_field(gui: &mut Gui<'_>, app_data: &mut AppData, coordinate: Coordinate) {
        let style = std::rc::Rc::clone(&gui.style);
        let field = app_data.field_mut(coordinate);
        let text_color = if field.is_valid() {
            style.text_color
        } else {
            style.error_color
        };
        let hint = field.error().map(|err| err.to_string());

        let ui = gui.ui();
        ui.label(coordinate.label());
        let mut response = ui.add(
            TextEdit::singleline(&mut field.text)
                .desired_width(style.field_width)
                .text_color(text_color),
        );
        if let Some(hint) = hint {
            response = response.on_hover_text(hint);
        }

        if response.changed() {
            app_data.coordinate_edited(coordinate);
        }
    }
}
