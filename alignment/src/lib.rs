pub mod aberration;
pub mod angle;
pub mod config;
pub mod hour_angle;
pub mod nutation;
pub mod observer;
pub mod precession;
pub mod reticle;
pub mod sidereal;
pub mod star;
pub mod time;

pub mod prelude {
    pub use crate::angle::Hours;
    pub use crate::config::{Config, ConfigError, ConfigStore};
    pub use crate::hour_angle::AlignmentState;
    pub use crate::observer::ObserverLocation;
    pub use crate::reticle::{ReticleError, ReticleGeometry, ReticleOrientation, Tick};
    pub use crate::star::{CatalogStar, EquatorialPosition, POLARIS};
    pub use crate::time::JulianDate;
}

#[cfg(test)]
mod tests;
