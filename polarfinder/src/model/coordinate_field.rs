use alignment::observer::{CoordinateParseError, parse_coordinate};

/// Text box contents for one coordinate. The text is kept as typed; only
/// parseable values reach the observer location.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateField {
    pub text: String,
    error: Option<CoordinateParseError>,
}

impl CoordinateField {
    pub fn new(value: f64) -> Self {
        Self {
            text: value.to_string(),
            error: None,
        }
    }

    /// Re-parses `text` after an edit.
    pub fn parse(&mut self) -> Result<f64, CoordinateParseError> {
        let result = parse_coordinate(&self.text);
        self.error = result.as_ref().err().cloned();
        result
    }

    pub fn error(&self) -> Option<&CoordinateParseError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_valid_with_formatted_value() {
        let field = CoordinateField::new(-33.5);

        assert_eq!(field.text, "-33.5");
        assert!(field.is_valid());
    }

    #[test]
    fn tracks_parse_errors() {
        let mut field = CoordinateField::new(0.0);

        field.text = "12.x".to_string();
        assert!(field.parse().is_err());
        assert!(!field.is_valid());

        field.text = "12.5".to_string();
        assert_eq!(field.parse(), Ok(12.5));
        assert!(field.is_valid());
        assert_eq!(field.error(), None);
    }
}
