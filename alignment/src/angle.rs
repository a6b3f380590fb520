use std::fmt;
use std::ops::{Add, Sub};

use common::FloatExt;

pub const HOURS_PER_TURN: f64 = 24.0;
pub const DEGREES_PER_HOUR: f64 = 15.0;

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_TURN: u64 = 86_400;

/// Angle in hours, always normalized to `[0, 24)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Hours(f64);

impl Hours {
    pub fn new(hours: f64) -> Self {
        assert!(hours.is_finite(), "hour angle must be finite");
        Self(hours.wrap(HOURS_PER_TURN))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::new(degrees / DEGREES_PER_HOUR)
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::from_degrees(radians.to_degrees())
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> f64 {
        self.0 * DEGREES_PER_HOUR
    }

    pub fn to_radians(self) -> f64 {
        self.to_degrees().to_radians()
    }

    /// Hours, minutes and seconds rounded to the nearest second.
    pub fn hms(self) -> (u32, u32, u32) {
        let total = (self.0 * SECONDS_PER_HOUR as f64).round() as u64 % SECONDS_PER_TURN;

        (
            (total / SECONDS_PER_HOUR) as u32,
            (total % SECONDS_PER_HOUR / 60) as u32,
            (total % 60) as u32,
        )
    }
}

impl Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Self) -> Self::Output {
        Hours::new(self.0 + rhs.0)
    }
}

impl Sub for Hours {
    type Output = Hours;

    fn sub(self, rhs: Self) -> Self::Output {
        Hours::new(self.0 - rhs.0)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}
