use chrono::{DateTime, Utc};

pub const J2000_JD: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian day number. UT1 and TT are both taken equal to UTC, which is well
/// inside the precision a polar scope reticle can show.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    pub const J2000: JulianDate = JulianDate(J2000_JD);

    pub fn new(value: f64) -> Self {
        assert!(value.is_finite(), "julian date must be finite");
        Self(value)
    }

    pub fn from_utc(timestamp: DateTime<Utc>) -> Self {
        let seconds =
            timestamp.timestamp() as f64 + timestamp.timestamp_subsec_nanos() as f64 * 1e-9;
        Self(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn days_since_j2000(self) -> f64 {
        self.0 - J2000_JD
    }

    pub fn centuries_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    pub fn years_since_j2000(self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::FloatExt;

    #[test]
    fn j2000_epoch_from_utc() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = JulianDate::from_utc(epoch);

        assert!(jd.value().approximately_eq(J2000_JD));
        assert!(jd.centuries_since_j2000().approximately_eq(0.0));
    }

    #[test]
    fn unix_epoch_from_utc() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert!(JulianDate::from_utc(epoch)
            .value()
            .approximately_eq(2_440_587.5));
    }

    #[test]
    fn sub_second_precision() {
        let a = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let b = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
        let delta_seconds =
            (JulianDate::from_utc(b).value() - JulianDate::from_utc(a).value()) * SECONDS_PER_DAY;

        assert!(delta_seconds.approximately_eq_within(0.5, 1e-3));
    }

    #[test]
    fn years_and_centuries_agree() {
        let jd = JulianDate::new(J2000_JD + DAYS_PER_JULIAN_CENTURY);

        assert!(jd.centuries_since_j2000().approximately_eq(1.0));
        assert!(jd.years_since_j2000().approximately_eq(100.0));
    }
}
