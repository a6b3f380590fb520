//! Low-precision nutation and the obliquity of the ecliptic.
//!
//! The four-term series is good to about 0.5" in longitude and 0.1" in
//! obliquity, which is far below what a polar scope reticle resolves.

use glam::DMat3;

use crate::time::JulianDate;

pub const ARCSEC_PER_DEGREE: f64 = 3_600.0;

const MEAN_OBLIQUITY_J2000_ARCSEC: f64 = 84_381.448;

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();
    let arcsec = MEAN_OBLIQUITY_J2000_ARCSEC - 46.8150 * t - 0.00059 * t * t
        + 0.001813 * t * t * t;
    arcsec / ARCSEC_PER_DEGREE
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude, Δψ.
    pub longitude_arcsec: f64,
    /// Nutation in obliquity, Δε.
    pub obliquity_arcsec: f64,
    pub mean_obliquity_deg: f64,
}

impl Nutation {
    pub fn at(jd: JulianDate) -> Self {
        let t = jd.centuries_since_j2000();

        let moon_node = (125.04452 - 1934.136261 * t).to_radians();
        let sun_longitude = (280.4665 + 36000.7698 * t).to_radians();
        let moon_longitude = (218.3165 + 481267.8813 * t).to_radians();

        let longitude_arcsec = -17.20 * moon_node.sin()
            - 1.32 * (2.0 * sun_longitude).sin()
            - 0.23 * (2.0 * moon_longitude).sin()
            + 0.21 * (2.0 * moon_node).sin();
        let obliquity_arcsec = 9.20 * moon_node.cos()
            + 0.57 * (2.0 * sun_longitude).cos()
            + 0.10 * (2.0 * moon_longitude).cos()
            - 0.09 * (2.0 * moon_node).cos();

        Self {
            longitude_arcsec,
            obliquity_arcsec,
            mean_obliquity_deg: mean_obliquity_deg(jd),
        }
    }

    pub fn true_obliquity_deg(&self) -> f64 {
        self.mean_obliquity_deg + self.obliquity_arcsec / ARCSEC_PER_DEGREE
    }

    /// Difference between apparent and mean sidereal time, in degrees.
    pub fn equation_of_equinoxes_deg(&self) -> f64 {
        self.longitude_arcsec / ARCSEC_PER_DEGREE * self.true_obliquity_deg().to_radians().cos()
    }

    /// Rotates a mean-equator-of-date vector onto the true equator of date.
    pub fn matrix(&self) -> DMat3 {
        let mean_obliquity = self.mean_obliquity_deg.to_radians();
        let true_obliquity = self.true_obliquity_deg().to_radians();
        let longitude = (self.longitude_arcsec / ARCSEC_PER_DEGREE).to_radians();

        DMat3::from_rotation_x(true_obliquity)
            * DMat3::from_rotation_z(longitude)
            * DMat3::from_rotation_x(-mean_obliquity)
    }
}
