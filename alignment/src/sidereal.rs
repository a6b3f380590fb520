use crate::angle::Hours;
use crate::nutation::Nutation;
use crate::time::JulianDate;

const GMST_BASE_DEG: f64 = 280.46061837;
const GMST_ROTATION_PER_DAY: f64 = 360.98564736629;
const GMST_CORRECTION: f64 = 0.000387933;
const GMST_CUBIC_DIVISOR: f64 = 38_710_000.0;

pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> Hours {
    let days = jd.days_since_j2000();
    let centuries = jd.centuries_since_j2000();
    let degrees = GMST_BASE_DEG
        + GMST_ROTATION_PER_DAY * days
        + GMST_CORRECTION * centuries * centuries
        - centuries * centuries * centuries / GMST_CUBIC_DIVISOR;

    Hours::from_degrees(degrees)
}

pub fn greenwich_apparent_sidereal_time(jd: JulianDate) -> Hours {
    let equation_of_equinoxes = Nutation::at(jd).equation_of_equinoxes_deg();
    greenwich_mean_sidereal_time(jd) + Hours::from_degrees(equation_of_equinoxes)
}

/// Local apparent sidereal time. `longitude_deg` is positive east of Greenwich.
pub fn local_sidereal_time(jd: JulianDate, longitude_deg: f64) -> Hours {
    greenwich_apparent_sidereal_time(jd) + Hours::from_degrees(longitude_deg)
}
