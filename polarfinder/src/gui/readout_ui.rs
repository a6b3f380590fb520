use eframe::egui::RichText;

use alignment::hour_angle::AlignmentState;

use crate::gui::Gui;

#[derive(Debug, Default)]
pub struct ReadoutUi;

impl ReadoutUi {
    pub fn render(&mut self, gui: &mut Gui<'_>, alignment: &AlignmentState) {
        let font = gui.style.readout_font.clone();
        let color = gui.style.text_color;
        let padding = gui.style.padding;
        let star = alignment.star_position;

        let ui = gui.ui();
        ui.add_space(padding);
        ui.label(
            RichText::new(format!("LST         {}", alignment.local_sidereal_time))
                .font(font.clone())
                .color(color),
        );
        ui.label(
            RichText::new(format!("Polaris HA  {}", alignment.hour_angle))
                .font(font)
                .color(color),
        )
        .on_hover_text(format!(
            "Apparent RA {}, Dec {:+.4}°",
            star.right_ascension, star.declination_deg
        ));
        ui.add_space(padding);
    }
}
