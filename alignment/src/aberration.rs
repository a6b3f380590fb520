use glam::DVec3;

use crate::nutation::ARCSEC_PER_DEGREE;
use crate::time::JulianDate;

const ABERRATION_CONSTANT_ARCSEC: f64 = 20.49552;

/// Earth's orbital velocity over the speed of light, in equatorial
/// coordinates of date. Adding it to a unit star vector and renormalizing
/// applies annual aberration, eccentricity term included.
pub fn annual_aberration_velocity(jd: JulianDate, obliquity_deg: f64) -> DVec3 {
    let t = jd.centuries_since_j2000();
    let t2 = t * t;

    let sun_mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let sun_mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let equation_of_center = (1.914602 - 0.004817 * t - 0.000014 * t2) * sun_mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * sun_mean_anomaly).sin()
        + 0.000289 * (3.0 * sun_mean_anomaly).sin();
    let sun_longitude = (sun_mean_longitude + equation_of_center).to_radians();

    let eccentricity = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;
    let perihelion = (102.93735 + 1.71946 * t + 0.00046 * t2).to_radians();

    let kappa = (ABERRATION_CONSTANT_ARCSEC / ARCSEC_PER_DEGREE).to_radians();
    let obliquity = obliquity_deg.to_radians();

    kappa * apex_direction(sun_longitude, obliquity)
        - eccentricity * kappa * apex_direction(perihelion, obliquity)
}

// Ecliptic direction 90 degrees behind `longitude`, rotated onto the equator.
fn apex_direction(longitude: f64, obliquity: f64) -> DVec3 {
    DVec3::new(
        longitude.sin(),
        -longitude.cos() * obliquity.cos(),
        -longitude.cos() * obliquity.sin(),
    )
}
