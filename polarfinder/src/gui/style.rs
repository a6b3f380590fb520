use eframe::egui::{Color32, FontId, Stroke};

// Dim red keeps night vision intact.
const RETICLE_RED: Color32 = Color32::from_rgb(200, 40, 40);

#[derive(Debug, Clone)]
pub struct Style {
    pub background: Color32,
    pub reticle_stroke: Stroke,
    pub long_tick_stroke: Stroke,
    pub marker_color: Color32,
    pub marker_radius: f32,
    pub hour_label_font: FontId,
    pub hour_label_color: Color32,
    pub readout_font: FontId,
    pub text_color: Color32,
    pub error_color: Color32,
    pub field_width: f32,
    pub padding: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            reticle_stroke: Stroke::new(1.0, RETICLE_RED),
            long_tick_stroke: Stroke::new(2.0, RETICLE_RED),
            marker_color: Color32::from_rgb(255, 170, 60),
            marker_radius: 5.0,
            hour_label_font: FontId::proportional(12.0),
            hour_label_color: RETICLE_RED.gamma_multiply(0.8),
            readout_font: FontId::monospace(16.0),
            text_color: Color32::from_rgb(200, 200, 200),
            error_color: Color32::from_rgb(255, 90, 90),
            field_width: 96.0,
            padding: 6.0,
        }
    }
}
