use std::rc::Rc;
use std::time::Instant;

use eframe::egui;

use crate::app_data::AppData;
use crate::gui::Gui;
use crate::gui::location_ui::LocationUi;
use crate::gui::readout_ui::ReadoutUi;
use crate::gui::reticle_ui::ReticleUi;
use crate::gui::style::Style;

#[derive(Debug, Default)]
pub struct MainUi {
    style: Rc<Style>,
    location_ui: LocationUi,
    readout_ui: ReadoutUi,
    reticle_ui: ReticleUi,
}

impl MainUi {
    pub fn render(&mut self, app_data: &mut AppData, ctx: &egui::Context) {
        let next_tick = app_data.tick(Instant::now());
        ctx.request_repaint_after(next_tick);

        egui::TopBottomPanel::top("location_panel").show(ctx, |ui| {
            let mut gui = Gui::new(ui, &self.style);
            self.location_ui.render(&mut gui, app_data);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.label(&app_data.status);
        });

        egui::TopBottomPanel::bottom("readout_panel").show(ctx, |ui| {
            let mut gui = Gui::new(ui, &self.style);
            self.readout_ui.render(&mut gui, &app_data.alignment);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.style.background))
            .show(ctx, |ui| {
                let mut gui = Gui::new(ui, &self.style);
                self.reticle_ui
                    .render(&mut gui, &app_data.alignment, app_data.orientation);
            });
    }
}
