//! Parsing of textual command-line values into validated inputs

use crate::core::{Angle, DepthRange, Height};
use crate::validation::error::ValidationError;

/// Whole-string float parse; trailing garbage is an error
pub fn parse_f64(parameter: &str, text: &str) -> Result<f64, ValidationError> {
    text.parse::<f64>().map_err(|_| ValidationError::Unparsable {
        parameter: parameter.to_string(),
        value: text.to_string(),
    })
}

pub fn parse_u32(parameter: &str, text: &str) -> Result<u32, ValidationError> {
    text.parse::<u32>().map_err(|_| ValidationError::Unparsable {
        parameter: parameter.to_string(),
        value: text.to_string(),
    })
}

pub fn parse_angle(parameter: &str, text: &str) -> Result<Angle, ValidationError> {
    let radians = parse_f64(parameter, text)?;
    Angle::new(radians).map_err(|err| rename(err, parameter))
}

pub fn parse_height(parameter: &str, text: &str) -> Result<Height, ValidationError> {
    let meters = parse_f64(parameter, text)?;
    Height::new(meters).map_err(|err| rename(err, parameter))
}

pub fn parse_depth_range(from: &str, to: &str) -> Result<DepthRange, ValidationError> {
    let from = parse_u32("from", from)?;
    let to = parse_u32("to", to)?;
    DepthRange::new(from, to)
}

fn rename(err: ValidationError, parameter: &str) -> ValidationError {
    match err {
        ValidationError::OutOfRange { value, valid_range, .. } => ValidationError::OutOfRange {
            parameter: parameter.to_string(),
            value,
            valid_range,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_values() {
        assert_eq!(parse_angle("A", "1.024").unwrap().radians(), 1.024);
        assert_eq!(parse_height("C", "1.5").unwrap().meters(), 1.5);
        let range = parse_depth_range("6", "10").unwrap();
        assert_eq!((range.from(), range.to()), (6, 10));
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert_eq!(
            parse_f64("A", "0.3rad"),
            Err(ValidationError::Unparsable {
                parameter: "A".to_string(),
                value: "0.3rad".to_string(),
            })
        );
        assert!(parse_u32("N", "6.0").is_err());
        assert!(parse_u32("N", "-1").is_err());
        assert!(parse_f64("A", "").is_err());
    }

    #[test]
    fn test_out_of_range_reports_parameter() {
        match parse_angle("B", "1.5") {
            Err(ValidationError::OutOfRange { parameter, value, .. }) => {
                assert_eq!(parameter, "B");
                assert_eq!(value, "1.5");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_angle("A", "nan").is_err());
        assert!(parse_height("C", "inf").is_err());
    }

    #[test]
    fn test_depth_range_errors() {
        assert!(parse_depth_range("0", "5").is_err());
        assert!(parse_depth_range("5", "14").is_err());
        assert_eq!(
            parse_depth_range("9", "3"),
            Err(ValidationError::EmptyRange { from: 9, to: 3 })
        );
    }
}
