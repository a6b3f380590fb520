use eframe::egui::{self, Align2, Rect, Sense, Vec2};

use alignment::hour_angle::AlignmentState;
use alignment::reticle::{
    self, ReticleError, ReticleGeometry, ReticleOrientation, SHORT_TICK_LEVEL, STAR_ORBIT_LEVEL,
};

use crate::gui::Gui;

#[derive(Debug, Default)]
pub struct ReticleUi {
    geometry: Option<ReticleGeometry>,
}

impl ReticleUi {
    pub fn render(
        &mut self,
        gui: &mut Gui<'_>,
        alignment: &AlignmentState,
        orientation: ReticleOrientation,
    ) {
        let side = gui.rect.width().min(gui.rect.height());
        let canvas = Rect::from_center_size(gui.rect.center(), Vec2::splat(side));
        gui.ui().allocate_rect(canvas, Sense::hover());

        let geometry = match self.geometry_for(side) {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::trace!("Skipping reticle: {err}");
                return;
            }
        };

        let style = &gui.style;
        let painter = gui.painter();
        let to_screen = |point: glam::Vec2| canvas.min + egui::vec2(point.x, point.y);
        let center = to_screen(geometry.center());

        for radius in geometry.circle_radii() {
            painter.circle_stroke(center, radius, style.reticle_stroke);
        }

        let label_radius =
            (geometry.radius(SHORT_TICK_LEVEL) + geometry.radius(STAR_ORBIT_LEVEL)) / 2.0;
        for tick in geometry.ticks() {
            let stroke = if tick.long {
                style.long_tick_stroke
            } else {
                style.reticle_stroke
            };
            painter.line_segment([to_screen(tick.start), to_screen(tick.end)], stroke);

            if tick.long {
                let hour = reticle::hour_angle_at(tick.angle_deg, orientation).hms().0;
                let direction = (tick.start - geometry.center()).normalize_or_zero();
                let offset = tick_label_offset(direction, label_radius);
                painter.text(
                    center + offset,
                    Align2::CENTER_CENTER,
                    hour.to_string(),
                    style.hour_label_font.clone(),
                    style.hour_label_color,
                );
            }
        }

        let marker = to_screen(geometry.star_marker(alignment.hour_angle, orientation));
        painter.circle_filled(marker, style.marker_radius, style.marker_color);
    }

    fn geometry_for(&mut self, side: f32) -> Result<&ReticleGeometry, ReticleError> {
        let geometry = match self.geometry.take() {
            Some(geometry) if geometry.size() == side => geometry,
            _ => ReticleGeometry::new(side)?,
        };

        Ok(&*self.geometry.insert(geometry))
    }
}

// Labels sit beside the long tick, rotated a few degrees clockwise so they
// do not overlap the tick line.
fn tick_label_offset(direction: glam::Vec2, radius: f32) -> Vec2 {
    let rotated = glam::Vec2::from_angle(0.12).rotate(direction);
    egui::vec2(rotated.x, rotated.y) * radius
}
