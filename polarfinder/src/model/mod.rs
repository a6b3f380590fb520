mod coordinate_field;
mod redraw_ticker;

pub use coordinate_field::CoordinateField;
pub use redraw_ticker::{REDRAW_INTERVAL, RedrawTicker};
