use std::rc::Rc;

use eframe::egui::{InnerResponse, Painter, Rect, Ui};

use crate::gui::style::Style;

pub mod location_ui;
pub mod readout_ui;
pub mod reticle_ui;
pub mod style;

pub struct Gui<'a> {
    ui: &'a mut Ui,
    pub style: Rc<Style>,
    pub rect: Rect,
}

impl<'a> Gui<'a> {
    pub fn new(ui: &'a mut Ui, style: &Rc<Style>) -> Self {
        let rect = ui.available_rect_before_wrap();

        Self {
            ui,
            style: Rc::clone(style),
            rect,
        }
    }

    pub fn ui(&mut self) -> &mut Ui {
        self.ui
    }

    pub fn painter(&self) -> &Painter {
        self.ui.painter()
    }

    pub fn horizontal<R>(
        &mut self,
        add_contents: impl FnOnce(&mut Gui<'_>) -> R,
    ) -> InnerResponse<R> {
        let style = Rc::clone(&self.style);
        self.ui.horizontal(|ui| {
            let mut gui = Gui::new(ui, &style);
            add_contents(&mut gui)
        })
    }
}
