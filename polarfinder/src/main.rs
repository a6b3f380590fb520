mod app_data;
mod gui;
mod init;
mod main_ui;
mod model;

use anyhow::Result;
use eframe::{NativeOptions, egui};

use alignment::config::ConfigStore;

use crate::app_data::AppData;
use crate::main_ui::MainUi;

fn main() -> Result<()> {
    init::init()?;

    let options = NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 600.0])
            .with_min_inner_size([260.0, 360.0])
            .with_app_id("polarfinder"),
        ..Default::default()
    };

    eframe::run_native(
        "PolarFinder",
        options,
        Box::new(|cc| {
            configure_visuals(&cc.egui_ctx);
            Ok(Box::new(PolarFinder::new()))
        }),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;

    Ok(())
}

fn configure_visuals(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = egui::Color32::BLACK;
    style.visuals.override_text_color = Some(egui::Color32::from_rgb(200, 200, 200));
    ctx.set_style(style);
}

#[derive(Debug)]
struct PolarFinder {
    app_data: AppData,
    main_ui: MainUi,
}

impl PolarFinder {
    fn new() -> Self {
        let config_store = ConfigStore::default();
        tracing::info!("Using config file {}", config_store.path().display());

        Self {
            app_data: AppData::new(config_store),
            main_ui: MainUi::default(),
        }
    }
}

impl eframe::App for PolarFinder {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.main_ui.render(&mut self.app_data, ctx);
    }

    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let color = visuals.panel_fill;
        [
            color.r() as f32 / 255.0,
            color.g() as f32 / 255.0,
            color.b() as f32 / 255.0,
            color.a() as f32 / 255.0,
        ]
    }
}
