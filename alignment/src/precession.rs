use glam::DMat3;

use crate::nutation::ARCSEC_PER_DEGREE;
use crate::time::JulianDate;

/// IAU 1976 precession from the J2000.0 mean equator to the mean equator of
/// date, as a rotation applied to unit vectors.
pub fn precession_matrix(jd: JulianDate) -> DMat3 {
    let t = jd.centuries_since_j2000();
    let t2 = t * t;
    let t3 = t2 * t;

    let zeta = arcsec_to_radians(2306.2181 * t + 0.30188 * t2 + 0.017998 * t3);
    let z = arcsec_to_radians(2306.2181 * t + 1.09468 * t2 + 0.018203 * t3);
    let theta = arcsec_to_radians(2004.3109 * t - 0.42665 * t2 - 0.041833 * t3);

    DMat3::from_rotation_z(z) * DMat3::from_rotation_y(-theta) * DMat3::from_rotation_z(zeta)
}

fn arcsec_to_radians(arcsec: f64) -> f64 {
    (arcsec / ARCSEC_PER_DEGREE).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::FloatExt;
    use glam::DVec3;

    #[test]
    fn identity_at_j2000() {
        let matrix = precession_matrix(JulianDate::J2000);
        let v = DVec3::new(0.3, -0.4, 0.866).normalize();

        assert!((matrix * v - v).length().approximately_eq(0.0));
    }

    #[test]
    fn pole_moves_by_theta_over_a_century() {
        let one_century = JulianDate::new(crate::time::J2000_JD + 36_525.0);
        let pole = precession_matrix(one_century) * DVec3::Z;
        let drift_arcsec = pole.angle_between(DVec3::Z).to_degrees() * ARCSEC_PER_DEGREE;

        assert!(drift_arcsec.approximately_eq_within(2004.3, 1.0));
    }
}
