use chrono::{DateTime, Utc};

use crate::angle::Hours;
use crate::observer::ObserverLocation;
use crate::sidereal::local_sidereal_time;
use crate::star::{CatalogStar, EquatorialPosition, POLARIS};
use crate::time::JulianDate;

/// Hour angle west of the meridian, normalized to `[0, 24)`.
pub fn hour_angle(local_sidereal_time: Hours, right_ascension: Hours) -> Hours {
    local_sidereal_time - right_ascension
}

/// Everything the reticle overlay shows for one instant. Derived, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentState {
    pub local_sidereal_time: Hours,
    pub hour_angle: Hours,
    pub star_position: EquatorialPosition,
}

impl AlignmentState {
    /// Polaris as seen from `location` at `timestamp`.
    pub fn compute(location: &ObserverLocation, timestamp: DateTime<Utc>) -> Self {
        Self::compute_for(&POLARIS, location, JulianDate::from_utc(timestamp))
    }

    pub fn compute_for(star: &CatalogStar, location: &ObserverLocation, jd: JulianDate) -> Self {
        let local_sidereal_time = local_sidereal_time(jd, location.longitude);
        let star_position = star.apparent_place(jd);

        Self {
            local_sidereal_time,
            hour_angle: hour_angle(local_sidereal_time, star_position.right_ascension),
            star_position,
        }
    }
}
