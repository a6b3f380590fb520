use std::fmt;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    #[error("coordinate is empty")]
    Empty,
    #[error("'{0}' is not a decimal number of degrees")]
    NotANumber(String),
}

/// Geographic position of the observer in signed decimal degrees.
/// Longitude is positive east of Greenwich.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObserverLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl ObserverLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {}, lon {}", self.latitude, self.longitude)
    }
}

/// Parses a decimal degree value as typed by the user or stored in the
/// config file. Range is not checked.
pub fn parse_coordinate(text: &str) -> Result<f64, CoordinateParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoordinateParseError::Empty);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoordinateParseError::NotANumber(text.to_string())),
    }
}
