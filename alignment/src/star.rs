use glam::DVec3;

use crate::aberration::annual_aberration_velocity;
use crate::angle::Hours;
use crate::nutation::{ARCSEC_PER_DEGREE, Nutation};
use crate::precession::precession_matrix;
use crate::time::JulianDate;

const MAS_PER_ARCSEC: f64 = 1_000.0;

/// Alpha Ursae Minoris, Hipparcos (2007 reduction) position and proper motion.
pub const POLARIS: CatalogStar = CatalogStar {
    name: "Polaris",
    ra_j2000_deg: 37.954_560_67,
    dec_j2000_deg: 89.264_108_97,
    pm_ra_cos_dec_mas_per_year: 44.48,
    pm_dec_mas_per_year: -11.85,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub right_ascension: Hours,
    pub declination_deg: f64,
}

impl EquatorialPosition {
    pub fn from_unit_vector(v: DVec3) -> Self {
        let v = v.normalize();

        Self {
            right_ascension: Hours::from_radians(v.y.atan2(v.x)),
            declination_deg: v.z.clamp(-1.0, 1.0).asin().to_degrees(),
        }
    }

    pub fn to_unit_vector(&self) -> DVec3 {
        let ra = self.right_ascension.to_radians();
        let dec = self.declination_deg.to_radians();

        DVec3::new(dec.cos() * ra.cos(), dec.cos() * ra.sin(), dec.sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStar {
    pub name: &'static str,
    pub ra_j2000_deg: f64,
    pub dec_j2000_deg: f64,
    /// Proper motion in right ascension, already multiplied by cos(dec).
    pub pm_ra_cos_dec_mas_per_year: f64,
    pub pm_dec_mas_per_year: f64,
}

impl CatalogStar {
    pub fn j2000_position(&self) -> EquatorialPosition {
        EquatorialPosition {
            right_ascension: Hours::from_degrees(self.ra_j2000_deg),
            declination_deg: self.dec_j2000_deg,
        }
    }

    /// Mean place of date: proper motion and precession, no nutation or
    /// aberration.
    pub fn mean_place(&self, jd: JulianDate) -> EquatorialPosition {
        EquatorialPosition::from_unit_vector(self.mean_vector(jd))
    }

    /// Apparent place of date, referred to the true equator and equinox.
    pub fn apparent_place(&self, jd: JulianDate) -> EquatorialPosition {
        let nutation = Nutation::at(jd);
        let true_of_date = nutation.matrix() * self.mean_vector(jd);
        let velocity = annual_aberration_velocity(jd, nutation.true_obliquity_deg());

        EquatorialPosition::from_unit_vector(true_of_date + velocity)
    }

    fn mean_vector(&self, jd: JulianDate) -> DVec3 {
        precession_matrix(jd) * self.vector_at_epoch_of_date(jd)
    }

    // Proper motion applied along the local east/north directions, which
    // stays well defined this close to the pole.
    fn vector_at_epoch_of_date(&self, jd: JulianDate) -> DVec3 {
        let ra = self.ra_j2000_deg.to_radians();
        let dec = self.dec_j2000_deg.to_radians();
        let position = self.j2000_position().to_unit_vector();

        let east = DVec3::new(-ra.sin(), ra.cos(), 0.0);
        let north = DVec3::new(-dec.sin() * ra.cos(), -dec.sin() * ra.sin(), dec.cos());

        let years = jd.years_since_j2000();
        let mas_to_radians = (1.0 / (MAS_PER_ARCSEC * ARCSEC_PER_DEGREE)).to_radians();
        let displacement = years
            * mas_to_radians
            * (self.pm_ra_cos_dec_mas_per_year * east + self.pm_dec_mas_per_year * north);

        (position + displacement).normalize()
    }
}
