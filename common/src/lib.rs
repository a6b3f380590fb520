pub mod float_ext;
pub mod log_setup;

pub use float_ext::FloatExt;

pub const EPSILON: f32 = 1e-6;
