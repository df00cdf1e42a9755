use std::fmt;

/// Reasons a command-line or configuration value is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The text is not a complete number
    Unparsable { parameter: String, value: String },
    /// The number parsed but lies outside its valid interval
    OutOfRange { parameter: String, value: String, valid_range: String },
    /// Depth range with `from > to`
    EmptyRange { from: u32, to: u32 },
}

impl ValidationError {
    pub fn out_of_range(parameter: &str, value: impl ToString, valid_range: &str) -> Self {
        ValidationError::OutOfRange {
            parameter: parameter.to_string(),
            value: value.to_string(),
            valid_range: valid_range.to_string(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Unparsable { parameter, value } => {
                write!(f, "{} '{}' is not a number", parameter, value)
            }
            ValidationError::OutOfRange { parameter, value, valid_range } => {
                write!(f, "{} {} is outside {}", parameter, value, valid_range)
            }
            ValidationError::EmptyRange { from, to } => {
                write!(f, "depth range {}..{} is empty", from, to)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
